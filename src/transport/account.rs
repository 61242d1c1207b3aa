use serde::Deserialize;

use super::{StatusJson, TransportError, push_auth_params};
use crate::domain::{BalanceResponse, ClientId, Credentials};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    #[serde(flatten)]
    status: StatusJson,
    client_name: String,
    api_client_id: u64,
    sms_credits: i64,
    sms_threshold: i64,
}

pub fn encode_check_balance_query(credentials: &Credentials) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_auth_params(&mut params, credentials);
    params
}

pub fn decode_balance_json_response(json: &str) -> Result<BalanceResponse, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;
    Ok(BalanceResponse {
        status: parsed.status.into(),
        client_name: parsed.client_name,
        client_id: ClientId::new(parsed.api_client_id),
        credits: parsed.sms_credits,
        threshold: parsed.sms_threshold,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::StatusCode;

    use super::*;

    #[test]
    fn query_never_carries_the_secret() {
        let credentials = Credentials::new("abc", 7, "shh");
        let params = encode_check_balance_query(&credentials);
        assert_eq!(
            params,
            vec![
                ("apiClientID".to_owned(), "7".to_owned()),
                ("key".to_owned(), "abc".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_balance_maps_payload() {
        let json = r#"
        {
          "status": 222,
          "status_message": "fetched balance",
          "client_name": "Test Client",
          "api_client_id": 123,
          "sms_credits": 45,
          "sms_threshold": 2
        }
        "#;

        let parsed = decode_balance_json_response(json).unwrap();
        assert_eq!(parsed.status.code, StatusCode::new(222));
        assert_eq!(parsed.status.message, "fetched balance");
        assert_eq!(parsed.client_name, "Test Client");
        assert_eq!(parsed.client_id, ClientId::new(123));
        assert_eq!(parsed.credits, 45);
        assert_eq!(parsed.threshold, 2);
    }

    #[test]
    fn decode_balance_rejects_string_counts() {
        let json = r#"
        {
          "status": 222,
          "status_message": "fetched balance",
          "client_name": "Test Client",
          "api_client_id": 123,
          "sms_credits": "45",
          "sms_threshold": 2
        }
        "#;

        assert!(decode_balance_json_response(json).is_err());
    }
}
