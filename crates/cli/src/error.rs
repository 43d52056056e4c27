//! Exit codes for biathlon-report

use anyhow::Error;
use biathlon_errors::{BiathlonError, ErrorCategory};

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CONFIG: u8 = 3;
pub const EXIT_CONTRACT: u8 = 4;
pub const EXIT_IO: u8 = 5;

/// Map an error to the process exit code by its category.
pub fn exit_code(error: &Error) -> u8 {
    match error.downcast_ref::<BiathlonError>().map(BiathlonError::category) {
        Some(ErrorCategory::Config) => EXIT_CONFIG,
        Some(ErrorCategory::Contract) => EXIT_CONTRACT,
        Some(ErrorCategory::IO) => EXIT_IO,
        None => EXIT_FAILURE,
    }
}
