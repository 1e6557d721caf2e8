//! Configuration structures for release runs.
//!
//! [`ReleaseRequest`] carries the user's flags, [`HostEnvironment`] the ambient
//! values, and [`SettingsBuilder`] validates both into a [`Settings`].

mod arch;
mod builder;
mod core;
mod host;
mod request;
mod target;

pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use host::HostEnvironment;
pub use request::ReleaseRequest;
pub use target::{Platform, TargetOs};
