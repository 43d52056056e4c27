//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use biathlon_test_helpers::prelude::*;
//! ```

pub use crate::fixtures::{CompetitorScript, RaceConfigFixture, at, merge};
pub use crate::must::{must, must_some};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
