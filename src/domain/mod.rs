//! Domain layer: strong types and invariants (no I/O).

mod request;
mod response;
mod timestamp;
mod value;

pub use request::{API_PREFIX, Method, Operation, SendSms};
pub use response::{
    ApiResponse, BalanceResponse, DeliveryReportResponse, SendSmsResponse, Status,
};
pub use timestamp::{DATE_RECEIVED_FORMAT, DELIVERY_TIME_ZONE, TimestampError};
pub use value::{
    ApiKey, ApiSecret, ClientId, Credentials, KnownStatusCode, MessageId, MessageText, Msisdn,
    ServiceId, StatusCode,
};
