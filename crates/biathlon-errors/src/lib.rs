//! Centralized error types for the biathlon results workspace
//!
//! Errors are grouped by who is at fault and what the run does about it:
//!
//! - [`parse`]: a single input line or value could not be read. The line is
//!   dropped and processing continues, so these never become a
//!   [`BiathlonError`].
//! - [`config`]: the race configuration is malformed. The run fails.
//! - [`contract`]: an upstream stage produced an ill-formed event stream.
//!   The run fails fast.
//! - [`common`]: the top-level [`BiathlonError`] wrapping all of the above,
//!   plus classification and context helpers.
//!
//! # Example
//!
//! ```
//! use biathlon_errors::prelude::*;
//!
//! fn check_laps(laps: u32) -> Result<u32> {
//!     if laps == 0 {
//!         return Err(ConfigError::not_positive("laps", laps).into());
//!     }
//!     Ok(laps)
//! }
//!
//! assert!(check_laps(0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod config;
pub mod contract;
pub mod parse;
pub mod prelude;

pub use common::{BiathlonError, ErrorCategory, ErrorContext, ResultExt};
pub use config::ConfigError;
pub use contract::ContractError;
pub use parse::ParseError;

/// A specialized `Result` type for biathlon operations.
pub type Result<T> = std::result::Result<T, BiathlonError>;
