//! External tool detection and availability checking.
//!
//! Every tool the run will need is resolved up front so that a missing
//! executable fails the run before any work is done.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::release::{Error, Result, TargetOs};

pub const GIT: &str = "git";
pub const CARGO: &str = "cargo";
pub const TAR: &str = "tar";
pub const DPKG_DEB: &str = "dpkg-deb";
pub const RPMBUILD: &str = "rpmbuild";

/// Tools required for a run on `os`, in lookup order.
pub fn required_tools(os: &TargetOs, rpm: bool) -> Vec<&'static str> {
    let mut tools = vec![GIT, CARGO, TAR];
    if os.is_linux() {
        tools.push(DPKG_DEB);
        if rpm {
            tools.push(RPMBUILD);
        }
    }
    tools
}

/// Absolute paths of the external tools used by a run.
#[derive(Clone, Debug)]
pub struct Toolchain {
    pub git: PathBuf,
    pub cargo: PathBuf,
    pub tar: PathBuf,
    pub dpkg_deb: Option<PathBuf>,
    pub rpmbuild: Option<PathBuf>,
}

/// Resolves every tool needed on `os` against `search_path`.
///
/// `search_path` uses the `PATH` syntax of the host; `None` reads `PATH`.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] naming the first missing tool.
pub fn check_for_tools(
    os: &TargetOs,
    rpm: bool,
    search_path: Option<&OsStr>,
    working_dir: &Path,
) -> Result<Toolchain> {
    let required = required_tools(os, rpm);
    log::info!("Checking for tools: {}", required.join(", "));
    let locate_if_required = |tool: &'static str| -> Result<Option<PathBuf>> {
        if required.contains(&tool) {
            locate(tool, search_path, working_dir).map(Some)
        } else {
            Ok(None)
        }
    };

    Ok(Toolchain {
        git: locate(GIT, search_path, working_dir)?,
        cargo: locate(CARGO, search_path, working_dir)?,
        tar: locate(TAR, search_path, working_dir)?,
        dpkg_deb: locate_if_required(DPKG_DEB)?,
        rpmbuild: locate_if_required(RPMBUILD)?,
    })
}

fn locate(
    tool: &'static str,
    search_path: Option<&OsStr>,
    working_dir: &Path,
) -> Result<PathBuf> {
    let found = match search_path {
        Some(paths) => which::which_in(tool, Some(paths), working_dir),
        None => which::which(tool),
    };

    match found {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            Ok(path)
        }
        Err(source) => Err(Error::ToolNotFound { tool, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_needs_packaging_tools() {
        assert_eq!(
            required_tools(&TargetOs::Linux, false),
            vec![GIT, CARGO, TAR, DPKG_DEB]
        );
        assert_eq!(
            required_tools(&TargetOs::Linux, true),
            vec![GIT, CARGO, TAR, DPKG_DEB, RPMBUILD]
        );
    }

    #[test]
    fn other_systems_ignore_rpm_flag() {
        assert_eq!(required_tools(&TargetOs::MacOs, true), vec![GIT, CARGO, TAR]);
    }

    #[test]
    fn empty_search_path_reports_first_tool() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_for_tools(
            &TargetOs::Linux,
            false,
            Some(dir.path().as_os_str()),
            dir.path(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::ToolNotFound { tool: GIT, .. }));
        assert!(err.to_string().contains("`git`"));
    }
}
