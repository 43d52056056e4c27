//! Errors raised while reading the event log and clock values.
//!
//! Every variant is recoverable: the caller drops the offending line and
//! carries on with the rest of the log.

/// Failure to parse one input line or value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Line has fewer than the mandatory fields
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields {
        /// Mandatory field count
        expected: usize,
        /// Fields actually present
        found: usize,
    },

    /// Time or duration matched neither accepted format
    #[error("invalid time '{0}': expected HH:MM:SS.mmm or HH:MM:SS")]
    InvalidTime(String),

    /// Numeric field is not a valid number
    #[error("invalid {field} '{value}': not a number")]
    InvalidNumber {
        /// Field name
        field: &'static str,
        /// The raw text
        value: String,
    },

    /// Event kind id outside the known set
    #[error("unknown event kind {0}")]
    UnknownEventKind(u32),

    /// Line bytes are not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// Event kind requires a payload that is absent
    #[error("event kind {kind} requires a {payload} argument")]
    MissingPayload {
        /// Event kind id
        kind: u32,
        /// Human name of the payload
        payload: &'static str,
    },
}

impl ParseError {
    /// Create an invalid time error.
    pub fn invalid_time(raw: impl Into<String>) -> Self {
        ParseError::InvalidTime(raw.into())
    }

    /// Create an invalid number error.
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        ParseError::InvalidNumber {
            field,
            value: value.into(),
        }
    }
}
