//! Ambient values of the machine running the release.

use std::ffi::OsString;
use std::path::PathBuf;

use super::{Arch, Platform, TargetOs};
use crate::release::{Error, Result};

/// Ambient build environment.
///
/// [`HostEnvironment::detect`] reads the running process; tests construct the
/// value directly to run the pipeline against synthetic platforms, search
/// paths and directories.
#[derive(Clone, Debug)]
pub struct HostEnvironment {
    /// Platform the release targets. Always the host; not user-overridable.
    pub platform: Platform,

    /// Executable search path used for tool lookup. `None` uses `PATH`.
    pub search_path: Option<OsString>,

    /// Working directory. `None` asks the process when needed.
    pub working_dir: Option<PathBuf>,

    /// Parent of every temporary directory. `None` uses the system default.
    pub temp_dir: Option<PathBuf>,
}

impl HostEnvironment {
    /// Detects the environment of the current process.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the host architecture has no packaging name.
    pub fn detect() -> Result<Self> {
        let arch = Arch::from_rust_arch(std::env::consts::ARCH).ok_or_else(|| {
            Error::Environment {
                what: "host architecture",
                source: std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    format!("unsupported architecture `{}`", std::env::consts::ARCH),
                ),
            }
        })?;

        Ok(Self {
            platform: Platform::new(TargetOs::from_rust_os(std::env::consts::OS), arch),
            search_path: std::env::var_os("PATH"),
            working_dir: None,
            temp_dir: None,
        })
    }

    /// Resolves the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] if the process working directory is unavailable.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|source| Error::Environment {
                what: "working directory",
                source,
            }),
        }
    }

    /// Directory temporary trees are created in.
    pub fn temp_root(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
