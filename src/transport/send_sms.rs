use serde::Deserialize;

use super::{StatusJson, TransportError, push_auth_params};
use crate::domain::{
    ApiSecret, Credentials, MessageId, MessageText, Msisdn, SendSms, SendSmsResponse,
};

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(flatten)]
    status: StatusJson,
    unique_id: u64,
    credits: i64,
}

pub fn encode_send_sms_form(credentials: &Credentials, request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_auth_params(&mut params, credentials);
    params.push((
        ApiSecret::FIELD.to_owned(),
        credentials.api_secret().as_str().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        request.message().as_str().to_owned(),
    ));
    params.push((Msisdn::FIELD.to_owned(), request.to().raw().to_owned()));
    params
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    Ok(SendSmsResponse {
        status: parsed.status.into(),
        message_id: MessageId::new(parsed.unique_id),
        credits: parsed.credits,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{ServiceId, Status, StatusCode};

    use super::*;

    #[test]
    fn encode_form_params_in_wire_order() {
        let credentials = Credentials::new("123", 123, "456");
        let request = SendSms::new(
            Some(ServiceId::new("ignored")),
            MessageText::new("Test"),
            Msisdn::new("254712345678"),
        );

        let params = encode_send_sms_form(&credentials, &request);
        assert_eq!(
            params,
            vec![
                ("apiClientID".to_owned(), "123".to_owned()),
                ("key".to_owned(), "123".to_owned()),
                ("secret".to_owned(), "456".to_owned()),
                ("txtMessage".to_owned(), "Test".to_owned()),
                ("MSISDN".to_owned(), "254712345678".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_does_not_transmit_service_id() {
        let credentials = Credentials::new("k", 1, "s");
        let request = SendSms::new(
            Some(ServiceId::new("svc-42")),
            MessageText::new("hi"),
            Msisdn::new("254700000000"),
        );

        let params = encode_send_sms_form(&credentials, &request);
        assert!(!params.iter().any(|(_, v)| v == "svc-42"));
    }

    #[test]
    fn decode_json_response_maps_fields() {
        let json = r#"
        {
          "status": 222,
          "status_message": "message sent",
          "unique_id": 789879,
          "credits": 127
        }
        "#;

        let resp = decode_send_sms_json_response(json).unwrap();
        assert_eq!(
            resp,
            SendSmsResponse {
                status: Status {
                    code: StatusCode::new(222),
                    message: "message sent".to_owned(),
                },
                message_id: MessageId::new(789879),
                credits: 127,
            }
        );
    }

    #[test]
    fn decode_json_response_requires_unique_id() {
        let json = r#"{ "status": 222, "status_message": "message sent", "credits": 127 }"#;
        let err = decode_send_sms_json_response(json).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
