use crate::domain::value::{MessageText, Msisdn, ServiceId};

/// Path prefix shared by every BongaSMS endpoint.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP method used by an [`Operation`].
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The BongaSMS operations exposed by this crate.
pub enum Operation {
    SendSms,
    CheckBalance,
    FetchDeliveryReport,
}

impl Operation {
    /// Endpoint path relative to [`API_PREFIX`].
    pub fn path(self) -> &'static str {
        match self {
            Self::SendSms => "/send-sms-v1",
            Self::CheckBalance => "/check-credits",
            Self::FetchDeliveryReport => "/fetch-delivery",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Self::SendSms => Method::Post,
            Self::CheckBalance | Self::FetchDeliveryReport => Method::Get,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SendSms => "send_sms",
            Self::CheckBalance => "check_balance",
            Self::FetchDeliveryReport => "fetch_delivery_report",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single outbound SMS.
pub struct SendSms {
    service_id: Option<ServiceId>,
    message: MessageText,
    to: Msisdn,
}

impl SendSms {
    pub fn new(service_id: Option<ServiceId>, message: MessageText, to: Msisdn) -> Self {
        Self {
            service_id,
            message,
            to,
        }
    }

    pub fn service_id(&self) -> Option<&ServiceId> {
        self.service_id.as_ref()
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn to(&self) -> &Msisdn {
        &self.to
    }
}
