//! Typed Rust client for the BongaSMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks, and a small client layer orchestrating requests.
//! Three operations are exposed: sending an SMS, checking the credit balance
//! and fetching the delivery report of a sent message.
//!
//! ```rust,no_run
//! use bongasms::{BongaClient, Credentials, MessageText, Msisdn, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bongasms::BongaError> {
//!     let client = BongaClient::new(Credentials::new("key", 1234, "secret"));
//!     let request = SendSms::new(None, MessageText::new("hello"), Msisdn::new("254712345678"));
//!     let sent = client.send_sms(request).await?;
//!
//!     let report = client.fetch_delivery_report(sent.message_id).await?;
//!     println!("{} at {}", report.delivery_status, report.date_received);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BongaClient, BongaClientBuilder, BongaError, DEFAULT_HOST, DEFAULT_TIMEOUT, StatusPolicy,
};
pub use domain::{
    ApiKey, ApiResponse, ApiSecret, BalanceResponse, ClientId, Credentials,
    DeliveryReportResponse, KnownStatusCode, MessageId, MessageText, Msisdn, Operation,
    SendSms, SendSmsResponse, ServiceId, Status, StatusCode, TimestampError,
};
