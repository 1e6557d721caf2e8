//! Top-level error types.
//!
//! Pipeline failures carry their own step-prefixed messages and are passed
//! through unchanged; argument errors are reported as [`CliError`].

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type surfaced by the binary
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Release pipeline errors
    #[error(transparent)]
    Release(#[from] crate::release::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
