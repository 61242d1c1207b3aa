use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::domain::{DATE_RECEIVED_FORMAT, DELIVERY_TIME_ZONE, TimestampError};

/// Parse a bare `YYYY-MM-DD HH:MM:SS` wall time as Africa/Nairobi local time.
///
/// The zone is asserted by the client; upstream never transmits an offset.
pub fn parse_date_received(input: &str) -> Result<DateTime<Tz>, TimestampError> {
    let naive = NaiveDateTime::parse_from_str(input, DATE_RECEIVED_FORMAT).map_err(|reason| {
        TimestampError::Format {
            input: input.to_owned(),
            reason,
        }
    })?;

    match DELIVERY_TIME_ZONE.from_local_datetime(&naive) {
        LocalResult::Single(parsed) => Ok(parsed),
        LocalResult::Ambiguous(_, _) | LocalResult::None => {
            Err(TimestampError::NotRepresentable {
                input: input.to_owned(),
            })
        }
    }
}
