//! Main release orchestration.
//!
//! This module provides the [`Releaser`] that runs the pipeline:
//!
//! ```text
//! check for tools → resolve settings → build binaries
//!     → package tarball → [package deb] → [package rpm] → cleanup
//! ```

use std::path::{Path, PathBuf};

use super::checksum::calculate_sha256;
use super::tool_detection::check_for_tools;
use crate::release::{
    HostEnvironment, ReleaseRequest, Result, SettingsBuilder,
    binaries::build_binaries,
    error::{ErrorExt, Step, StepContext},
    platform::{PackageFormat, ReleaseArtifact, linux, tarball},
};

/// Release pipeline orchestrator.
///
/// Runs every step strictly in order and stops at the first failure. The
/// staging directory created by the build step is removed on every exit path.
///
/// # Examples
///
/// ```no_run
/// use build_release::release::{HostEnvironment, ReleaseRequest, Releaser};
///
/// # fn example() -> build_release::release::Result<()> {
/// let mut request = ReleaseRequest::new("1.2.3", "abc123");
/// request.rpm = true;
///
/// let artifacts = Releaser::new(request, HostEnvironment::detect()?).run()?;
/// for artifact in artifacts {
///     println!("{} {}", artifact.checksum, artifact.path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Releaser {
    request: ReleaseRequest,
    host: HostEnvironment,
}

impl Releaser {
    pub fn new(request: ReleaseRequest, host: HostEnvironment) -> Self {
        Self { request, host }
    }

    /// Runs the pipeline and returns the artifacts written to the output directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Step`](crate::release::Error::Step) naming the failed
    /// step. Artifacts written by earlier steps are left in place.
    pub fn run(&self) -> Result<Vec<ReleaseArtifact>> {
        let host = &self.host;
        let os = &host.platform.os;

        // Only relative search path entries depend on it; an unknown working
        // directory is reported by the settings step.
        let lookup_dir = host.working_dir().unwrap_or_else(|_| PathBuf::from("."));
        let tools = check_for_tools(
            os,
            self.request.rpm,
            host.search_path.as_deref(),
            &lookup_dir,
        )
        .step(Step::CheckTools)?;

        let settings = SettingsBuilder::from_request(&self.request)
            .build(host)
            .step(Step::ResolveSettings)?;

        let temp_root = host.temp_root();
        let staged = build_binaries(&tools, &settings, &temp_root).step(Step::BuildBinaries)?;

        // Dropping `staged` on an early return removes the staging directory.
        let mut outputs = Vec::new();

        let path = tarball::package_tarball(&tools.tar, &staged, &settings)
            .step(Step::PackageTarball)?;
        outputs.push((PackageFormat::Tarball, path));

        if os.is_linux() {
            if let Some(dpkg_deb) = &tools.dpkg_deb {
                let path = linux::debian::bundle_project(dpkg_deb, &staged, &settings, &temp_root)
                    .step(Step::PackageDeb)?;
                outputs.push((PackageFormat::Deb, path));
            }

            if let Some(rpmbuild) = &tools.rpmbuild {
                let path = linux::rpm::bundle_project(rpmbuild, &staged, &settings, &temp_root)
                    .step(Step::PackageRpm)?;
                outputs.push((PackageFormat::Rpm, path));
            }
        } else {
            log::info!("Skipping .deb and .rpm: target OS is {}", os);
        }

        let staging_path = staged.path().to_path_buf();
        if let Err(e) = staged.close() {
            log::warn!(
                "Failed to remove staging directory {}: {}",
                staging_path.display(),
                e
            );
        }

        outputs
            .into_iter()
            .map(|(format, path)| describe_artifact(format, path))
            .collect::<Result<Vec<_>>>()
            .step(Step::ReportArtifacts)
    }
}

/// Verifies an artifact exists and records its size and checksum.
fn describe_artifact(format: PackageFormat, path: PathBuf) -> Result<ReleaseArtifact> {
    let size = artifact_size(&path).packaging_context(format, "reading artifact metadata")?;
    let checksum = calculate_sha256(&path).packaging_context(format, "hashing artifact")?;
    log::info!("✓ Created {}: {} ({} bytes)", format, path.display(), size);

    Ok(ReleaseArtifact {
        format,
        path,
        size,
        checksum,
    })
}

fn artifact_size(path: &Path) -> std::io::Result<u64> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(std::io::Error::other(format!(
            "{} is not a file",
            path.display()
        )));
    }
    Ok(metadata.len())
}
