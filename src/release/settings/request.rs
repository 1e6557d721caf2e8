//! User-supplied release parameters.

use std::path::PathBuf;

/// Raw release parameters, constructed once by argument parsing.
///
/// Values are taken as given; validation happens in
/// [`SettingsBuilder::build`](super::SettingsBuilder::build).
#[derive(Clone, Debug, Default)]
pub struct ReleaseRequest {
    /// Version label embedded in binaries and artifact file names.
    pub version: String,

    /// Commit (or any git revision) to build.
    pub commit: String,

    /// Destination for artifacts. `None` means the working directory.
    pub output_dir: Option<PathBuf>,

    /// Also build an .rpm when targeting Linux.
    pub rpm: bool,

    /// Repository to build: local path, `org/repo` or clone URL.
    pub source: String,
}

impl ReleaseRequest {
    pub fn new(version: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
            output_dir: None,
            rpm: false,
            source: ".".to_string(),
        }
    }
}
