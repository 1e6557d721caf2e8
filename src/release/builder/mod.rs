//! Release orchestration and coordination.
//!
//! - [`checksum`] - SHA-256 of produced artifacts
//! - [`orchestrator`] - the [`Releaser`] pipeline
//! - [`tool_detection`] - external tool availability checking

mod checksum;
mod orchestrator;
pub mod tool_detection;

pub use orchestrator::Releaser;
pub use tool_detection::{Toolchain, check_for_tools, required_tools};
