//! Release binary compilation.
//!
//! Checks the source out at the requested commit, compiles it with cargo and
//! copies the resulting executables into the staging directory:
//!
//! ```text
//! <staging>/
//! └── bin/
//!     ├── <binary>
//!     └── ...
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::metadata::{self, PackageMetadata};
use crate::release::{
    Result, Settings, Toolchain,
    error::ErrorExt,
    utils::{command, fs},
};

/// Compiler environment variable carrying the release version.
pub const VERSION_ENV: &str = "RELEASE_VERSION";

/// Compiler environment variable carrying the source commit.
pub const COMMIT_ENV: &str = "RELEASE_COMMIT";

/// Variables that change compiler output and are never passed to the release build.
const BUILD_OVERRIDES: &[&str] = &[
    "RUSTFLAGS",
    "CARGO_ENCODED_RUSTFLAGS",
    "RUSTDOCFLAGS",
    "CARGO_ENCODED_RUSTDOCFLAGS",
    "RUSTC_WRAPPER",
    "RUSTC_WORKSPACE_WRAPPER",
    "CARGO_BUILD_RUSTFLAGS",
];

/// Prefix of variables that override `[profile]` settings.
const PROFILE_PREFIX: &str = "CARGO_PROFILE_";

/// Binaries of one run, owned until packaging is done.
///
/// The directory is removed when this value is dropped or
/// [`close`](StagedBinaries::close)d.
#[derive(Debug)]
pub struct StagedBinaries {
    dir: TempDir,
    package: PackageMetadata,
    binaries: Vec<String>,
}

impl StagedBinaries {
    /// Root of the staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory holding the executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Metadata of the built package.
    pub fn package(&self) -> &PackageMetadata {
        &self.package
    }

    /// Executable file names in [`bin_dir`](StagedBinaries::bin_dir).
    pub fn binaries(&self) -> &[String] {
        &self.binaries
    }

    /// Removes the staging directory, reporting removal failures.
    pub fn close(self) -> std::io::Result<()> {
        self.dir.close()
    }
}

/// Builds release binaries for `settings` into a new staging directory under `temp_root`.
///
/// # Errors
///
/// Returns [`Error::Build`](crate::release::Error::Build) if the checkout,
/// manifest or compilation fails. Nothing is left on disk in that case.
pub fn build_binaries(
    tools: &Toolchain,
    settings: &Settings,
    temp_root: &Path,
) -> Result<StagedBinaries> {
    let staging = tempfile::Builder::new()
        .prefix("build_release-bin-")
        .tempdir_in(temp_root)
        .build_context("creating staging directory")?;
    log::debug!("Staging binaries in {}", staging.path().display());

    let checkout = tempfile::Builder::new()
        .prefix("build_release-src-")
        .tempdir_in(temp_root)
        .build_context("creating checkout directory")?;

    check_out(tools, settings, checkout.path())?;

    let manifest = metadata::load_manifest(&checkout.path().join("Cargo.toml"))
        .build_context("reading project manifest")?;

    log::info!(
        "Building {} {} ({}) for {}",
        manifest.metadata.name,
        settings.version(),
        settings.commit(),
        settings.platform()
    );

    let target_dir = checkout.path().join("target");
    let triple = settings.platform().rust_triple();

    let mut cargo = Command::new(&tools.cargo);
    cargo
        .args(["build", "--release", "--locked", "--bins"])
        .current_dir(checkout.path())
        .env("CARGO_TARGET_DIR", &target_dir)
        .env(VERSION_ENV, settings.version())
        .env(COMMIT_ENV, settings.commit());
    for var in build_overrides(std::env::vars_os().map(|(key, _)| key)) {
        log::debug!("Clearing {} for the release build", var.to_string_lossy());
        cargo.env_remove(var);
    }
    match &triple {
        Some(triple) => cargo.env("CARGO_BUILD_TARGET", triple),
        None => cargo.env_remove("CARGO_BUILD_TARGET"),
    };
    command::run(&mut cargo).build_context("cargo build")?;

    let release_dir = match &triple {
        Some(triple) => target_dir.join(triple).join("release"),
        None => target_dir.join("release"),
    };

    let bin_dir = staging.path().join("bin");
    let mut binaries = Vec::with_capacity(manifest.binaries.len());
    for name in &manifest.binaries {
        let file_name = settings.platform().executable_name(name);
        fs::copy_executable(&release_dir.join(&file_name), &bin_dir.join(&file_name))
            .build_context(format!("staging binary `{file_name}`"))?;
        binaries.push(file_name);
    }

    Ok(StagedBinaries {
        dir: staging,
        package: manifest.metadata,
        binaries,
    })
}

fn check_out(tools: &Toolchain, settings: &Settings, checkout: &Path) -> Result<()> {
    let source = settings.source().clone_url();
    log::info!("Checking out {} at {}", source, settings.commit());

    command::run(
        Command::new(&tools.git)
            .arg("clone")
            .arg("--quiet")
            .arg(&source)
            .arg(checkout),
    )
    .build_context("git clone")?;

    command::run(
        Command::new(&tools.git)
            .arg("-C")
            .arg(checkout)
            .args(["checkout", "--quiet", "--detach", settings.commit()]),
    )
    .build_context(format!("git checkout {}", settings.commit()))?;

    Ok(())
}

/// Names among `vars` that must be removed from the compiler environment.
///
/// Per-target linker settings are kept; per-target `RUSTFLAGS` are not.
fn build_overrides(vars: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    vars.into_iter()
        .filter(|var| {
            let Some(name) = var.to_str() else {
                return false;
            };
            BUILD_OVERRIDES.contains(&name)
                || name.starts_with(PROFILE_PREFIX)
                || (name.starts_with("CARGO_TARGET_") && name.ends_with("_RUSTFLAGS"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_and_profile_overrides_are_cleared() {
        let vars = [
            "PATH",
            "HOME",
            "RUSTFLAGS",
            "CARGO_ENCODED_RUSTFLAGS",
            "CARGO_PROFILE_RELEASE_OPT_LEVEL",
            "CARGO_PROFILE_RELEASE_DEBUG",
            "CARGO_TARGET_X86_64_UNKNOWN_LINUX_GNU_LINKER",
            "CARGO_TARGET_X86_64_UNKNOWN_LINUX_GNU_RUSTFLAGS",
            "CARGO_TARGET_DIR",
            "CARGO_HOME",
        ]
        .map(OsString::from);

        let cleared = build_overrides(vars);

        assert_eq!(
            cleared,
            [
                "RUSTFLAGS",
                "CARGO_ENCODED_RUSTFLAGS",
                "CARGO_PROFILE_RELEASE_OPT_LEVEL",
                "CARGO_PROFILE_RELEASE_DEBUG",
                "CARGO_TARGET_X86_64_UNKNOWN_LINUX_GNU_RUSTFLAGS",
            ]
            .map(OsString::from)
        );
    }
}
