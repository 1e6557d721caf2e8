//! Command line argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::release::ReleaseRequest;

/// Hermetic release builder
#[derive(Parser, Debug)]
#[command(
    name = "build_release",
    about = "Build a Rust project at a commit and package the release",
    long_about = "Builds a Rust project at a given version and commit and packages the binaries
for the host platform.

Writes <name>_<version>_<os>_<arch>.tar.gz to the output directory, plus a .deb
(and with --rpm an .rpm) on Linux.

Usage:
  build_release --version 1.2.3 --commit abc123
  build_release --version 1.2.3 --commit v1.2.3 --source org/repo --output_dir dist --rpm

Exit code 0 = every artifact exists in the output directory."
)]
pub struct Args {
    /// Version number of the release
    #[arg(long, value_name = "VERSION", default_value = "")]
    pub version: String,

    /// Commit at which to build
    #[arg(long, value_name = "COMMIT", default_value = "")]
    pub commit: String,

    /// Where to write outputs (default: current directory)
    #[arg(long = "output_dir", visible_alias = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Build .rpm in addition to .deb
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub rpm: bool,

    /// Repository to build: local path, GitHub org/repo, or clone URL
    #[arg(long, value_name = "SOURCE", default_value = ".")]
    pub source: String,
}

impl Args {
    /// Converts parsed flags into the pipeline's request.
    pub fn into_request(self) -> ReleaseRequest {
        ReleaseRequest {
            version: self.version,
            commit: self.commit,
            output_dir: self.output_dir,
            rpm: self.rpm,
            source: self.source,
        }
    }
}
