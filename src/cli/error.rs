//! Dispatch-level errors
//!
//! These are the top-level errors shown to the user. Any of them aborts the
//! whole dispatch run before a single callback has executed.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("unknown command '--{0}'")]
    UnknownCommand(String),

    #[error("parameter #{index} on '--{command}' could not be converted to the required type: '{value}'")]
    TypeMismatch {
        command: String,
        index: usize,
        value: String,
    },

    #[error("required parameter missing on '--{command}'\nSyntax: {syntax}")]
    MissingParameter { command: String, syntax: String },

    #[error("parameter #{index} on '--{command}' failed validation: '{value}'")]
    FailedValidation {
        command: String,
        index: usize,
        value: String,
    },
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::UnknownCommand(_)
            | DispatchError::TypeMismatch { .. }
            | DispatchError::MissingParameter { .. }
            | DispatchError::FailedValidation { .. } => crate::exitcode::USAGE,
        }
    }
}
