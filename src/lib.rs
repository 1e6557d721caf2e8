//! Hermetic release builder.
//!
//! Builds a Rust project at a given version and commit and packages the
//! binaries for the host platform:
//! - a compressed tarball everywhere
//! - a .deb package on Linux, plus an optional .rpm
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod release;
pub mod source;

// Re-export commonly used types
pub use error::{AppError, CliError, Result};
