use serde::Deserialize;

use super::timestamp::parse_date_received;
use super::{StatusJson, TransportError, push_auth_params};
use crate::domain::{Credentials, DeliveryReportResponse, MessageId, Msisdn};

/// First stage: `date_received` stays a raw string until the zone is applied.
#[derive(Debug, Clone, Deserialize)]
struct DeliveryReportJsonResponse {
    #[serde(flatten)]
    status: StatusJson,
    unique_id: u64,
    delivery_status_desc: String,
    date_received: String,
    #[serde(default)]
    correlator: Option<String>,
    msisdn: String,
}

pub fn encode_fetch_delivery_query(
    credentials: &Credentials,
    message_id: MessageId,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    push_auth_params(&mut params, credentials);
    params.push((MessageId::FIELD.to_owned(), message_id.to_string()));
    params
}

pub fn decode_delivery_report_json_response(
    json: &str,
) -> Result<DeliveryReportResponse, TransportError> {
    let parsed: DeliveryReportJsonResponse = serde_json::from_str(json)?;
    let date_received = parse_date_received(&parsed.date_received)?;

    Ok(DeliveryReportResponse {
        status: parsed.status.into(),
        message_id: MessageId::new(parsed.unique_id),
        delivery_status: parsed.delivery_status_desc,
        date_received,
        correlator: parsed.correlator,
        msisdn: Msisdn::new(parsed.msisdn),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::domain::{StatusCode, TimestampError};

    use super::*;

    #[test]
    fn encode_query_appends_message_id() {
        let credentials = Credentials::new("123", 123, "123");
        let params = encode_fetch_delivery_query(&credentials, MessageId::new(789879));
        assert_eq!(
            params,
            vec![
                ("apiClientID".to_owned(), "123".to_owned()),
                ("key".to_owned(), "123".to_owned()),
                ("unique_id".to_owned(), "789879".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_json_response_applies_nairobi_zone() {
        let json = r#"
        {
          "status": 222,
          "status_message": "fetched delivery status",
          "unique_id": 123,
          "delivery_status_desc": "DeliveredToTerminal",
          "date_received": "2022-11-05 15:34:45",
          "correlator": "",
          "msisdn": "254712345678"
        }
        "#;

        let report = decode_delivery_report_json_response(json).unwrap();
        assert_eq!(report.status.code, StatusCode::new(222));
        assert_eq!(report.status.message, "fetched delivery status");
        assert_eq!(report.message_id, MessageId::new(123));
        assert_eq!(report.delivery_status, "DeliveredToTerminal");
        assert_eq!(report.correlator.as_deref(), Some(""));
        assert_eq!(report.msisdn.raw(), "254712345678");
        assert_eq!(
            report.date_received.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2022, 11, 5, 12, 34, 45).unwrap()
        );
    }

    #[test]
    fn decode_json_response_treats_missing_or_null_correlator_as_none() {
        let missing = r#"
        {
          "status": 222,
          "status_message": "ok",
          "unique_id": 1,
          "delivery_status_desc": "DeliveredToTerminal",
          "date_received": "2022-11-05 15:34:45",
          "msisdn": "254712345678"
        }
        "#;
        let report = decode_delivery_report_json_response(missing).unwrap();
        assert_eq!(report.correlator, None);

        let null = r#"
        {
          "status": 222,
          "status_message": "ok",
          "unique_id": 1,
          "delivery_status_desc": "DeliveredToTerminal",
          "date_received": "2022-11-05 15:34:45",
          "correlator": null,
          "msisdn": "254712345678"
        }
        "#;
        let report = decode_delivery_report_json_response(null).unwrap();
        assert_eq!(report.correlator, None);
    }

    #[test]
    fn decode_json_response_surfaces_bad_timestamp_separately() {
        let json = r#"
        {
          "status": 222,
          "status_message": "ok",
          "unique_id": 1,
          "delivery_status_desc": "DeliveredToTerminal",
          "date_received": "2022-11-05T15:34:45Z",
          "correlator": "abc",
          "msisdn": "254712345678"
        }
        "#;

        let err = decode_delivery_report_json_response(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::Timestamp(TimestampError::Format { .. })
        ));
    }
}
