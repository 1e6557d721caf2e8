//! Command line interface for build_release.

mod args;

pub use args::Args;

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::{CliError, Result};
use crate::release::{HostEnvironment, Releaser};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    run_from(std::env::args_os())
}

/// Runs the CLI with explicit arguments.
///
/// Prints one `<sha256>  <path>` line per artifact to stdout on success.
pub fn run_from<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return Ok(0);
        }
        Err(e) => {
            return Err(CliError::InvalidArguments {
                reason: e.to_string().trim_end().to_string(),
            }
            .into());
        }
    };

    let host = HostEnvironment::detect()?;
    let artifacts = Releaser::new(args.into_request(), host).run()?;

    for artifact in &artifacts {
        println!("{}  {}", artifact.checksum, artifact.path.display());
    }

    Ok(0)
}
