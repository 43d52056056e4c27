//! Shared test utilities for biathlon results.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`fixtures`] - Race configuration and per-competitor event script builders
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! biathlon-test-helpers = { path = "crates/biathlon-test-helpers" }
//! ```
//!
//! ```rust,ignore
//! use biathlon_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod fixtures;
pub mod must;
pub mod prelude;

pub use must::*;
