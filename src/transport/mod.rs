//! Transport layer: wire-format details (parameter encoding, JSON decoding).

mod account;
mod delivery;
mod send_sms;
mod timestamp;

use serde::Deserialize;

use crate::domain::{ApiKey, ClientId, Credentials, Status, StatusCode, TimestampError};

pub use account::{decode_balance_json_response, encode_check_balance_query};
pub use delivery::{decode_delivery_report_json_response, encode_fetch_delivery_query};
pub use send_sms::{decode_send_sms_json_response, encode_send_sms_form};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date_received: {0}")]
    Timestamp(#[from] TimestampError),
}

/// `status`/`status_message` pair shared by every response body.
#[derive(Debug, Clone, Deserialize)]
struct StatusJson {
    status: i32,
    status_message: String,
}

impl From<StatusJson> for Status {
    fn from(value: StatusJson) -> Self {
        Status {
            code: StatusCode::new(value.status),
            message: value.status_message,
        }
    }
}

/// Decode only the status envelope, ignoring operation-specific fields.
///
/// Failure bodies usually omit those fields, so the status has to be readable
/// on its own before the typed decoders run.
pub fn decode_status_envelope(json: &str) -> Result<Status, TransportError> {
    let parsed: StatusJson = serde_json::from_str(json)?;
    Ok(parsed.into())
}

fn push_auth_params(params: &mut Vec<(String, String)>, credentials: &Credentials) {
    params.push((
        ClientId::FIELD.to_owned(),
        credentials.client_id().to_string(),
    ));
    params.push((
        ApiKey::FIELD.to_owned(),
        credentials.api_key().as_str().to_owned(),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_envelope_ignores_other_fields() {
        let json = r#"
        {
          "status": 222,
          "status_message": "message sent",
          "unique_id": 789879,
          "credits": 127
        }
        "#;

        let status = decode_status_envelope(json).unwrap();
        assert_eq!(status.code, StatusCode::new(222));
        assert_eq!(status.message, "message sent");
    }

    #[test]
    fn status_envelope_reads_failure_without_payload_fields() {
        let json = r#"{ "status": 666, "status_message": "Invalid credentials" }"#;

        let status = decode_status_envelope(json).unwrap();
        assert!(status.code.is_failure());
        assert_eq!(status.message, "Invalid credentials");
    }

    #[test]
    fn status_envelope_requires_both_fields() {
        let err = decode_status_envelope(r#"{ "status": 222 }"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));

        let err = decode_status_envelope("<html>502</html>").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn auth_params_carry_client_id_and_key_only() {
        let credentials = Credentials::new("abc", 123, "shh");
        let mut params = Vec::new();
        push_auth_params(&mut params, &credentials);
        assert_eq!(
            params,
            vec![
                ("apiClientID".to_owned(), "123".to_owned()),
                ("key".to_owned(), "abc".to_owned()),
            ]
        );
    }
}
