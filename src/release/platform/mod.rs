//! Packaging steps and their artifacts.
//!
//! - [`tarball`] - compressed archive of the staged binaries (every OS)
//! - [`linux`] - .deb and .rpm packages

pub mod linux;
pub mod tarball;

use std::path::PathBuf;

/// Kind of release artifact.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PackageFormat {
    Tarball,
    Deb,
    Rpm,
}

impl std::fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PackageFormat::Tarball => "tarball",
            PackageFormat::Deb => ".deb",
            PackageFormat::Rpm => ".rpm",
        })
    }
}

/// A file written to the output directory.
#[derive(Clone, Debug)]
pub struct ReleaseArtifact {
    pub format: PackageFormat,
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the file
    pub checksum: String,
}
