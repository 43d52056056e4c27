//! Race configuration errors.
//!
//! A bad configuration corrupts every downstream computation, so none of
//! these are recoverable.

use core::fmt;

/// Race configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Document could not be decoded
    #[error("malformed configuration: {0}")]
    Malformed(String),

    /// Field must be strictly positive
    #[error("field '{field}' must be positive, got {value}")]
    NotPositive {
        /// Field name
        field: String,
        /// The offending value
        value: String,
    },

    /// Duration field must not be negative
    #[error("field '{field}' must not be negative, got {value}")]
    Negative {
        /// Field name
        field: String,
        /// The offending value
        value: String,
    },
}

impl ConfigError {
    /// Create a malformed configuration error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        ConfigError::Malformed(msg.into())
    }

    /// Create a not-positive error for a numeric field.
    pub fn not_positive<T: fmt::Display>(field: impl Into<String>, value: T) -> Self {
        ConfigError::NotPositive {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create a negative-value error for a duration field.
    pub fn negative<T: fmt::Display>(field: impl Into<String>, value: T) -> Self {
        ConfigError::Negative {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_positive_message() {
        let err = ConfigError::not_positive("lapLen", 0);
        assert_eq!(err.to_string(), "field 'lapLen' must be positive, got 0");
    }
}
