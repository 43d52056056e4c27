//! Top-level error type and classification shared by every crate.

use core::fmt;

use crate::{ConfigError, ContractError};

/// Top-level error type for failures that end a run.
///
/// Parse errors have no variant here: a malformed line is skipped where it is
/// read and never ends a run.
#[derive(Debug, thiserror::Error)]
pub enum BiathlonError {
    /// Race configuration is malformed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Event stream violates a processing contract
    #[error("Contract violation: {0}")]
    Contract(#[from] ContractError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// An error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        /// What was being done
        context: ErrorContext,
        /// The underlying error
        source: Box<BiathlonError>,
    },
}

impl BiathlonError {
    /// Get the error category for classification.
    ///
    /// Context wrappers report the category of the error they wrap.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BiathlonError::Config(_) => ErrorCategory::Config,
            BiathlonError::Contract(_) => ErrorCategory::Contract,
            BiathlonError::Io(_) => ErrorCategory::IO,
            BiathlonError::Context { source, .. } => source.category(),
        }
    }
}

impl From<std::io::Error> for BiathlonError {
    fn from(e: std::io::Error) -> Self {
        BiathlonError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Malformed configuration
    Config = 1,
    /// Ill-formed event stream
    Contract = 2,
    /// I/O errors
    IO = 3,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Contract => write!(f, "Contract"),
            ErrorCategory::IO => write!(f, "IO"),
        }
    }
}

/// Operation and key/value details attached to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation that was being performed
    pub operation: String,
    /// Additional context key-value pairs
    pub context: Vec<(String, String)>,
}

impl ErrorContext {
    /// Create a new error context for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: Vec::new(),
        }
    }

    /// Add a context key-value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        for (key, value) in &self.context {
            write!(f, ", {key}: {value}")?;
        }
        Ok(())
    }
}

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in [`BiathlonError::Context`].
    fn context(self, ctx: ErrorContext) -> Result<T, BiathlonError>;

    /// Add context with an operation name.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in [`BiathlonError::Context`].
    fn with_context(self, operation: impl Into<String>) -> Result<T, BiathlonError>;
}

impl<T, E: Into<BiathlonError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, ctx: ErrorContext) -> Result<T, BiathlonError> {
        self.map_err(|e| BiathlonError::Context {
            context: ctx,
            source: Box::new(e.into()),
        })
    }

    fn with_context(self, operation: impl Into<String>) -> Result<T, BiathlonError> {
        self.context(ErrorContext::new(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Config.to_string(), "Config");
        assert_eq!(ErrorCategory::Contract.to_string(), "Contract");
        assert_eq!(ErrorCategory::IO.to_string(), "IO");
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new("load config")
            .with("path", "config.json")
            .with("line", "3");
        assert_eq!(ctx.to_string(), "load config, path: config.json, line: 3");
    }

    #[test]
    fn test_context_keeps_inner_category() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::not_positive("laps", 0));
        let err = match result.with_context("load config") {
            Ok(()) => return,
            Err(e) => e,
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.to_string().starts_with("load config: "));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: BiathlonError = std::io::Error::other("disk gone").into();
        assert_eq!(err.category(), ErrorCategory::IO);
        let _: &dyn std::error::Error = &err;
    }
}
