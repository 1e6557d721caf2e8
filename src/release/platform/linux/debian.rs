//! Debian package (.deb) creation.
//!
//! Stages a package tree and hands it to `dpkg-deb`:
//!
//! ```text
//! <tree>/
//! ├── DEBIAN/
//! │   └── control
//! └── usr/bin/<binary>
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{package_version, stage_install_tree};
use crate::metadata::PackageMetadata;
use crate::release::{
    Arch, Result, Settings, StagedBinaries,
    error::ErrorExt,
    platform::PackageFormat,
    utils::{command, fs},
};

const FORMAT: PackageFormat = PackageFormat::Deb;

/// Builds `<output_dir>/<package>_<version>_<arch>.deb` with `dpkg-deb`.
///
/// The package tree lives in its own temporary directory under `temp_root`
/// and is removed before this returns.
pub fn bundle_project(
    dpkg_deb: &Path,
    staged: &StagedBinaries,
    settings: &Settings,
    temp_root: &Path,
) -> Result<PathBuf> {
    let tree = tempfile::Builder::new()
        .prefix("build_release-deb-")
        .tempdir_in(temp_root)
        .packaging_context(FORMAT, "creating package tree")?;

    stage_install_tree(staged, tree.path(), FORMAT)?;

    let installed_kib = fs::dir_size(tree.path())
        .packaging_context(FORMAT, "measuring package tree")?
        .div_ceil(1024);

    let package = staged.package();
    let version = package_version(settings.version());
    let control = control_file(package, version, settings.target_arch(), installed_kib);

    let control_path = tree.path().join("DEBIAN/control");
    fs::write_file(&control_path, control.as_bytes())
        .packaging_context(FORMAT, "writing DEBIAN/control")?;

    let deb_path = settings.output_dir().join(format!(
        "{}_{}_{}.deb",
        package_name(&package.name),
        version,
        settings.target_arch().release_name()
    ));
    log::info!("Writing {}", deb_path.display());

    command::run(
        Command::new(dpkg_deb)
            .arg("--root-owner-group")
            .arg("--build")
            .arg(tree.path())
            .arg(&deb_path),
    )
    .packaging_context(FORMAT, "dpkg-deb")?;

    tree.close().packaging_context(FORMAT, "removing package tree")?;

    Ok(deb_path)
}

/// Debian package names are lower case and may not contain underscores.
fn package_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Renders `DEBIAN/control`.
fn control_file(
    package: &PackageMetadata,
    version: &str,
    arch: Arch,
    installed_kib: u64,
) -> String {
    let maintainer = package
        .authors
        .first()
        .cloned()
        .unwrap_or_else(|| format!("{} maintainers", package.name));

    let mut control = format!(
        "Package: {}\n\
         Version: {}\n\
         Architecture: {}\n\
         Maintainer: {}\n\
         Installed-Size: {}\n\
         Section: utils\n\
         Priority: optional\n",
        package_name(&package.name),
        version,
        arch.release_name(),
        maintainer,
        installed_kib
    );

    if let Some(homepage) = &package.homepage {
        control.push_str(&format!("Homepage: {homepage}\n"));
    }
    if !package.deb_depends.is_empty() {
        control.push_str(&format!("Depends: {}\n", package.deb_depends.join(", ")));
    }

    // Continuation lines of a multi-line description start with a space; empty ones are " .".
    let mut lines = package.description.trim().lines();
    control.push_str(&format!("Description: {}\n", lines.next().unwrap_or_default()));
    for line in lines {
        if line.trim().is_empty() {
            control.push_str(" .\n");
        } else {
            control.push_str(&format!(" {}\n", line.trim_end()));
        }
    }

    control
}
