//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

use super::{Arch, Platform, TargetOs};
use crate::source::RepositorySource;

/// Resolved settings for one release run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder) and used
/// unchanged by every later step. Version and commit are guaranteed non-empty.
///
/// # Examples
///
/// ```no_run
/// use build_release::release::{HostEnvironment, ReleaseRequest, SettingsBuilder};
///
/// # fn example() -> build_release::release::Result<()> {
/// let host = HostEnvironment::detect()?;
/// let settings = SettingsBuilder::from_request(&ReleaseRequest::new("1.2.3", "abc123"))
///     .build(&host)?;
/// println!("{}", settings.tarball_name("demo"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    version: String,
    commit: String,
    platform: Platform,

    /// Absolute destination directory for artifacts.
    output_dir: PathBuf,

    source: RepositorySource,
}

impl Settings {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn target_os(&self) -> &TargetOs {
        &self.platform.os
    }

    pub fn target_arch(&self) -> Arch {
        self.platform.arch
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn source(&self) -> &RepositorySource {
        &self.source
    }

    /// Tarball file name, e.g. `demo_1.2.3_linux_amd64.tar.gz`.
    ///
    /// Depends only on the settings, so repeated runs overwrite the same file.
    pub fn tarball_name(&self, package: &str) -> String {
        format!(
            "{package}_{}_{}_{}.tar.gz",
            self.version,
            self.platform.os,
            self.platform.arch.release_name()
        )
    }

    pub(super) fn new(
        version: String,
        commit: String,
        platform: Platform,
        output_dir: PathBuf,
        source: RepositorySource,
    ) -> Self {
        Self {
            version,
            commit,
            platform,
            output_dir,
            source,
        }
    }
}
