//! Prelude module for convenient error handling imports.
//!
//! ```
//! use biathlon_errors::prelude::*;
//!
//! fn reject() -> Result<()> {
//!     Err(ContractError::EmptyEventSequence { competitor: 12 }.into())
//! }
//!
//! assert!(reject().is_err_and(|e| e.category() == ErrorCategory::Contract));
//! ```

pub use crate::{
    Result,
    common::{BiathlonError, ErrorCategory, ErrorContext, ResultExt},
    config::ConfigError,
    contract::ContractError,
    parse::ParseError,
};
