//! Unit tests for all error variants.
//!
//! Tests Display implementations, std::error::Error implementations,
//! and From conversions.

use biathlon_errors::{
    Result,
    common::{BiathlonError, ErrorCategory, ErrorContext, ResultExt},
    config::ConfigError,
    contract::ContractError,
    parse::ParseError,
};

mod parse_error_tests {
    use super::*;

    #[test]
    fn test_all_variants_display() -> Result<()> {
        let variants = vec![
            ParseError::TooFewFields {
                expected: 3,
                found: 1,
            },
            ParseError::invalid_time("25:00"),
            ParseError::invalid_number("competitor id", "abc"),
            ParseError::UnknownEventKind(12),
            ParseError::InvalidUtf8,
            ParseError::MissingPayload {
                kind: 2,
                payload: "start time",
            },
        ];

        for variant in variants {
            assert!(
                !variant.to_string().is_empty(),
                "ParseError variant should have display message"
            );
        }
        Ok(())
    }

    #[test]
    fn test_std_error_impl() -> Result<()> {
        let err = ParseError::UnknownEventKind(0);
        let _: &dyn std::error::Error = &err;
        Ok(())
    }
}

mod contract_error_tests {
    use super::*;

    #[test]
    fn test_foreign_event_names_both_competitors() -> Result<()> {
        let msg = ContractError::ForeignEvent {
            expected: 1,
            found: 2,
        }
        .to_string();
        assert!(msg.contains("competitor(1)"));
        assert!(msg.contains("competitor(2)"));
        Ok(())
    }
}

mod biathlon_error_tests {
    use super::*;

    #[test]
    fn test_from_implementations() -> Result<()> {
        let err: BiathlonError = ConfigError::malformed("eof").into();
        assert_eq!(err.category(), ErrorCategory::Config);

        let err: BiathlonError = ContractError::EmptyEventSequence { competitor: 1 }.into();
        assert_eq!(err.category(), ErrorCategory::Contract);

        let err: BiathlonError = std::io::Error::other("gone").into();
        assert_eq!(err.category(), ErrorCategory::IO);
        Ok(())
    }

    #[test]
    fn test_context_chain_exposes_source() -> Result<()> {
        let failed: std::result::Result<(), ConfigError> =
            Err(ConfigError::not_positive("laps", 0));
        let Err(err) = failed.context(ErrorContext::new("load config").with("path", "cfg.json"))
        else {
            return Err(std::io::Error::other("context must keep the error").into());
        };

        assert_eq!(err.category(), ErrorCategory::Config);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Configuration error: field 'laps' must be positive, got 0")
        );
        Ok(())
    }

    #[test]
    fn test_nested_context_keeps_category() -> Result<()> {
        let inner: std::result::Result<(), ContractError> =
            Err(ContractError::MissingTerminalMarker { competitor: 40 });
        let outer = inner.with_context("compute result").with_context("process race");
        let Err(err) = outer else {
            return Err(std::io::Error::other("context must keep the error").into());
        };
        assert_eq!(err.category(), ErrorCategory::Contract);
        assert!(err.to_string().starts_with("process race: compute result: "));
        Ok(())
    }
}
