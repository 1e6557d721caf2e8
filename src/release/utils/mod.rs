//! Helpers shared by the pipeline steps.

pub mod command;
pub mod fs;
