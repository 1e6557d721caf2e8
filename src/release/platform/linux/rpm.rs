//! RPM package (.rpm) creation.
//!
//! Stages an rpmbuild tree and a spec file that installs the prebuilt
//! binaries verbatim:
//!
//! ```text
//! <tree>/
//! ├── SPECS/<name>.spec
//! └── root/usr/bin/<binary>
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{BIN_PREFIX, package_version, stage_install_tree};
use crate::metadata::PackageMetadata;
use crate::release::{
    Arch, Result, Settings, StagedBinaries,
    error::ErrorExt,
    platform::PackageFormat,
    utils::{command, fs},
};

const FORMAT: PackageFormat = PackageFormat::Rpm;

/// Release number of every package; a rebuild of the same version is a new version.
const RELEASE: &str = "1";

/// Builds `<output_dir>/<name>-<version>-1.<arch>.rpm` with `rpmbuild`.
///
/// The rpmbuild tree lives in its own temporary directory under `temp_root`
/// and is removed before this returns.
pub fn bundle_project(
    rpmbuild: &Path,
    staged: &StagedBinaries,
    settings: &Settings,
    temp_root: &Path,
) -> Result<PathBuf> {
    let tree = tempfile::Builder::new()
        .prefix("build_release-rpm-")
        .tempdir_in(temp_root)
        .packaging_context(FORMAT, "creating rpmbuild tree")?;

    let root = tree.path().join("root");
    stage_install_tree(staged, &root, FORMAT)?;

    let files = fs::list_files(&root).packaging_context(FORMAT, "listing package files")?;

    let package = staged.package();
    let version = rpm_version(settings.version());
    let arch = settings.target_arch();
    let spec = spec_file(package, &version, arch, &root, &files);

    let spec_path = tree.path().join("SPECS").join(format!("{}.spec", package.name));
    fs::write_file(&spec_path, spec.as_bytes()).packaging_context(FORMAT, "writing spec file")?;

    let file_name = format!(
        "{}-{}-{}.{}.rpm",
        package.name,
        version,
        RELEASE,
        arch.rpm_name()
    );
    let rpm_path = settings.output_dir().join(&file_name);
    log::info!("Writing {}", rpm_path.display());

    command::run(
        Command::new(rpmbuild)
            .arg("-bb")
            .args(["--target", arch.rpm_name()])
            .arg("--define")
            .arg(format!("_topdir {}", tree.path().display()))
            .arg("--define")
            .arg(format!("_rpmdir {}", settings.output_dir().display()))
            .arg("--define")
            .arg(format!("_build_name_fmt {file_name}"))
            .arg("--define")
            .arg("debug_package %{nil}")
            .arg(&spec_path),
    )
    .packaging_context(FORMAT, "rpmbuild")?;

    tree.close().packaging_context(FORMAT, "removing rpmbuild tree")?;

    Ok(rpm_path)
}

/// RPM versions may not contain `-`; pre-release separators become `~`.
fn rpm_version(version: &str) -> String {
    package_version(version).replace('-', "~")
}

/// Renders the spec file for prebuilt binaries staged under `root`.
fn spec_file(
    package: &PackageMetadata,
    version: &str,
    arch: Arch,
    root: &Path,
    files: &[PathBuf],
) -> String {
    let summary = package.description.lines().next().unwrap_or_default().trim();
    let mut spec = format!(
        "Name: {}\n\
         Version: {}\n\
         Release: {}\n\
         Summary: {}\n\
         License: {}\n\
         BuildArch: {}\n\
         AutoReqProv: no\n",
        package.name,
        version,
        RELEASE,
        summary,
        package.license.as_deref().unwrap_or("Unspecified"),
        arch.rpm_name()
    );

    if let Some(homepage) = &package.homepage {
        spec.push_str(&format!("URL: {homepage}\n"));
    }
    for requirement in &package.rpm_requires {
        spec.push_str(&format!("Requires: {requirement}\n"));
    }

    spec.push_str(&format!(
        "\n%description\n{}\n\n\
         %install\n\
         mkdir -p %{{buildroot}}\n\
         cp -a \"{}/.\" \"%{{buildroot}}/\"\n\n\
         %files\n",
        package.description.trim(),
        root.display()
    ));
    for file in files {
        spec.push_str(&format!("/{}\n", file.display()));
    }
    if files.is_empty() {
        spec.push_str(&format!("/{BIN_PREFIX}\n"));
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prerelease_versions_use_tilde() {
        assert_eq!(rpm_version("1.2.3"), "1.2.3");
        assert_eq!(rpm_version("v1.2.3-rc.1"), "1.2.3~rc.1");
    }

    #[test]
    fn spec_lists_staged_files() {
        let package = PackageMetadata {
            name: "demo".into(),
            description: "Demo tool\nMore text".into(),
            license: Some("MIT".into()),
            rpm_requires: vec!["fuse".into()],
            ..Default::default()
        };
        let files = vec![
            PathBuf::from("usr/bin/demo"),
            PathBuf::from("usr/bin/demo-helper"),
        ];
        let root = Path::new("/tmp/tree/root");

        let spec = spec_file(&package, "1.2.3", Arch::X86_64, root, &files);

        assert!(spec.starts_with("Name: demo\nVersion: 1.2.3\nRelease: 1\nSummary: Demo tool\n"));
        assert!(spec.contains("License: MIT\n"));
        assert!(spec.contains("BuildArch: x86_64\n"));
        assert!(spec.contains("Requires: fuse\n"));
        assert!(spec.contains("cp -a \"/tmp/tree/root/.\" \"%{buildroot}/\"\n"));
        assert!(spec.ends_with("%files\n/usr/bin/demo\n/usr/bin/demo-helper\n"));
    }

    #[test]
    fn install_quotes_tree_paths_with_spaces() {
        let package = PackageMetadata {
            name: "demo".into(),
            description: "Demo tool".into(),
            ..Default::default()
        };
        let root = Path::new("/tmp/my builds/tree/root");

        let spec = spec_file(&package, "1.2.3", Arch::X86_64, root, &[]);

        assert!(spec.contains("cp -a \"/tmp/my builds/tree/root/.\" \"%{buildroot}/\"\n"));
        assert!(spec.ends_with("%files\n/usr/bin\n"));
    }
}
