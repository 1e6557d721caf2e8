//! Hermetic release builds.
//!
//! The [`Releaser`] checks that every external tool is present, resolves
//! [`Settings`] from a [`ReleaseRequest`] and the [`HostEnvironment`], compiles
//! the project at the requested commit into a staging directory, and packages
//! the result:
//!
//! - a `<name>_<version>_<os>_<arch>.tar.gz` tarball on every OS
//! - a `.deb` on Linux
//! - an `.rpm` on Linux when requested
//!
//! # Example
//!
//! ```no_run
//! use build_release::release::{HostEnvironment, ReleaseRequest, Releaser};
//!
//! # fn example() -> build_release::release::Result<()> {
//! let artifacts = Releaser::new(
//!     ReleaseRequest::new("1.2.3", "abc123"),
//!     HostEnvironment::detect()?,
//! )
//! .run()?;
//! println!("Created {} artifacts", artifacts.len());
//! # Ok(())
//! # }
//! ```

pub mod binaries;
mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub(crate) mod utils;

pub use binaries::{COMMIT_ENV, StagedBinaries, VERSION_ENV, build_binaries};
pub use builder::{Releaser, Toolchain, check_for_tools, required_tools, tool_detection};
pub use error::{Error, Result, Step};
pub use platform::{PackageFormat, ReleaseArtifact};
pub use settings::{
    Arch, HostEnvironment, Platform, ReleaseRequest, Settings, SettingsBuilder, TargetOs,
};
