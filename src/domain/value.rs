use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// BongaSMS API key issued on registration (`key`).
///
/// No format validation is performed; the value is sent as provided.
pub struct ApiKey(String);

impl ApiKey {
    /// Parameter name used by BongaSMS (`key`).
    pub const FIELD: &'static str = "key";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// BongaSMS API secret issued on registration (`secret`).
///
/// `Debug` output is redacted so the secret never ends up in logs.
pub struct ApiSecret(String);

impl ApiSecret {
    /// Parameter name used by BongaSMS (`secret`).
    pub const FIELD: &'static str = "secret";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Numeric identifier of the API client (`apiClientID`).
pub struct ClientId(u64);

impl ClientId {
    /// Parameter name used by BongaSMS requests (`apiClientID`).
    pub const FIELD: &'static str = "apiClientID";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ClientId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Authentication credentials for BongaSMS API calls.
///
/// Immutable once constructed. The library never persists them.
pub struct Credentials {
    api_key: ApiKey,
    client_id: ClientId,
    api_secret: ApiSecret,
}

impl Credentials {
    /// Assemble credentials from the values issued on registration.
    pub fn new(
        api_key: impl Into<String>,
        client_id: u64,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            client_id: ClientId::new(client_id),
            api_secret: ApiSecret::new(api_secret),
        }
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`txtMessage`).
///
/// Arbitrary text; no trimming or length splitting is applied.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by BongaSMS (`txtMessage`).
    pub const FIELD: &'static str = "txtMessage";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number in MSISDN format (`MSISDN`).
///
/// The value is sent unmodified; normalization is the caller's concern.
pub struct Msisdn(String);

impl Msisdn {
    /// Form field name used by BongaSMS requests (`MSISDN`).
    pub const FIELD: &'static str = "MSISDN";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value as sent to or received from BongaSMS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Service/routing identifier accepted alongside a send request.
///
/// The `send-sms-v1` endpoint does not read it, so it is carried on the
/// request but never transmitted.
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier BongaSMS assigns to every sent message (`unique_id`).
pub struct MessageId(u64);

impl MessageId {
    /// Parameter name used by BongaSMS (`unique_id`).
    pub const FIELD: &'static str = "unique_id";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// BongaSMS status code embedded in every response (`status`).
///
/// This value is preserved as-is even when the code is not documented.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by BongaSMS.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a documented status code, if it is one.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    pub fn is_success(self) -> bool {
        self.known() == Some(KnownStatusCode::Success)
    }

    pub fn is_failure(self) -> bool {
        self.known() == Some(KnownStatusCode::Failure)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes documented by BongaSMS.
pub enum KnownStatusCode {
    /// `222`: the action succeeded.
    Success,
    /// `666`: the action failed; `status_message` says why.
    Failure,
}

impl KnownStatusCode {
    pub const SUCCESS_CODE: i32 = 222;
    pub const FAILURE_CODE: i32 = 666;

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::SUCCESS_CODE => Some(Self::Success),
            Self::FAILURE_CODE => Some(Self::Failure),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Success => Self::SUCCESS_CODE,
            Self::Failure => Self::FAILURE_CODE,
        }
    }
}
