//! CLI output: command results and error mapping to the stable CLI surface.

use crate::error::IntegrityError;

pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for `verify --fail-on-change` when any verdict fired.
/// Error exit codes come from [`IntegrityError::exit_code`].
pub const EXIT_CHANGES_DETECTED: i32 = 5;

/// Rendered output of a successful command plus the exit code to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(text: String) -> Self {
        Self {
            text,
            exit_code: EXIT_SUCCESS,
        }
    }
}

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &IntegrityError) -> String {
    format!("Error: {}", e)
}
