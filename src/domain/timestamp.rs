use std::fmt;

/// Zone BongaSMS timestamps are recorded in. Upstream sends no offset.
pub const DELIVERY_TIME_ZONE: chrono_tz::Tz = chrono_tz::Africa::Nairobi;

/// `strftime` layout of `date_received`.
pub const DATE_RECEIVED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The value does not match [`DATE_RECEIVED_FORMAT`].
    Format {
        input: String,
        reason: chrono::ParseError,
    },
    /// The wall time does not name exactly one instant in [`DELIVERY_TIME_ZONE`].
    NotRepresentable { input: String },
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { input, reason } => {
                write!(
                    f,
                    "expected `YYYY-MM-DD HH:MM:SS`, got {input:?}: {reason}"
                )
            }
            Self::NotRepresentable { input } => {
                write!(
                    f,
                    "{input:?} is not a single instant in {}",
                    DELIVERY_TIME_ZONE.name()
                )
            }
        }
    }
}

impl std::error::Error for TimestampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format { reason, .. } => Some(reason),
            Self::NotRepresentable { .. } => None,
        }
    }
}
