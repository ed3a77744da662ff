//! Error handling and exit codes.

use bodycomp_core::calculator::{BodyComposition, ValidationError};
use bodycomp_core::constants::exit_codes;

/// Exit code for a rejected calculation.
pub fn handle_error(err: &ValidationError) -> i32 {
    match err {
        ValidationError::Unparseable { .. } | ValidationError::OutOfRange { .. } => {
            exit_codes::ERROR_VALIDATION
        }
    }
}

/// Exit code for the outcome of a calculation.
pub fn exit_code(outcome: &Result<BodyComposition, ValidationError>) -> i32 {
    match outcome {
        Ok(_) => exit_codes::SUCCESS,
        Err(err) => handle_error(err),
    }
}
