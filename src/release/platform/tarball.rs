//! Tarball packager.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::PackageFormat;
use crate::release::{Result, Settings, StagedBinaries, error::ErrorExt, utils::command};

/// Archives the staging directory into `<output_dir>/<name>_<version>_<os>_<arch>.tar.gz`.
///
/// An existing file of the same name is overwritten. The staging directory is
/// only read.
pub fn package_tarball(
    tar: &Path,
    staged: &StagedBinaries,
    settings: &Settings,
) -> Result<PathBuf> {
    let output_dir = settings.output_dir();
    std::fs::create_dir_all(output_dir).packaging_context(
        PackageFormat::Tarball,
        format!("creating output directory {}", output_dir.display()),
    )?;

    let tarball = output_dir.join(settings.tarball_name(&staged.package().name));
    log::info!("Writing {}", tarball.display());

    command::run(
        Command::new(tar)
            .arg("-czf")
            .arg(&tarball)
            .arg("-C")
            .arg(staged.path())
            .arg("."),
    )
    .packaging_context(PackageFormat::Tarball, "tar")?;

    Ok(tarball)
}
