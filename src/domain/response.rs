use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::value::{ClientId, MessageId, Msisdn, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of the action performed on the server side.
///
/// Embedded in every BongaSMS response.
pub struct Status {
    /// `222` on success, `666` on failure.
    pub code: StatusCode,
    /// Verbose text describing the outcome.
    pub message: String,
}

/// Access to the [`Status`] every BongaSMS response carries.
pub trait ApiResponse {
    fn status(&self) -> &Status;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub status: Status,
    /// Identifier assigned to the sent message.
    pub message_id: MessageId,
    /// Credits remaining after the send.
    pub credits: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceResponse {
    pub status: Status,
    pub client_name: String,
    pub client_id: ClientId,
    /// Number of messages that can still be sent.
    pub credits: i64,
    /// Credit level below which BongaSMS sends a low-balance notification.
    pub threshold: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReportResponse {
    pub status: Status,
    pub message_id: MessageId,
    /// Delivery state as reported upstream, e.g. `DeliveredToTerminal`.
    pub delivery_status: String,
    /// When the state in `delivery_status` was recorded, in Africa/Nairobi time.
    pub date_received: DateTime<Tz>,
    /// Sender-supplied value identifying the message on the sender's side.
    pub correlator: Option<String>,
    pub msisdn: Msisdn,
}

impl ApiResponse for SendSmsResponse {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl ApiResponse for BalanceResponse {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl ApiResponse for DeliveryReportResponse {
    fn status(&self) -> &Status {
        &self.status
    }
}
