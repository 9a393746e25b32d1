//! Exit codes for the CLI

use curate_core::CurateError;

/// General error
pub const ERROR: i32 = 1;

/// Input file missing or malformed
pub const INPUT_ERROR: i32 = 2;

/// Configuration error
pub const CONFIG_ERROR: i32 = 3;

/// Output could not be rendered or written
pub const OUTPUT_ERROR: i32 = 4;

/// Validation found problems
pub const VALIDATION_ERROR: i32 = 5;

/// Map an error to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CurateError>() {
        Some(CurateError::Input(_)) => INPUT_ERROR,
        Some(CurateError::Config(_)) => CONFIG_ERROR,
        Some(CurateError::Output(_)) => OUTPUT_ERROR,
        Some(CurateError::Validation(_)) => VALIDATION_ERROR,
        _ => ERROR,
    }
}
