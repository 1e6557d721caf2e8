//! Linux packages.
//!
//! Both packagers stage their own install tree from the staged binaries, in a
//! temporary directory scoped to the packaging step:
//!
//! ```text
//! <tree>/usr/bin/<binary>
//! ```

pub mod debian;
pub mod rpm;

use std::path::Path;

use super::PackageFormat;
use crate::release::{Result, StagedBinaries, error::ErrorExt, utils::fs};

/// Installation prefix for executables.
const BIN_PREFIX: &str = "usr/bin";

/// Copies the staged executables into `root/usr/bin`.
fn stage_install_tree(staged: &StagedBinaries, root: &Path, format: PackageFormat) -> Result<()> {
    let bin_dir = root.join(BIN_PREFIX);
    for binary in staged.binaries() {
        fs::copy_executable(&staged.bin_dir().join(binary), &bin_dir.join(binary))
            .packaging_context(format, format!("staging {BIN_PREFIX}/{binary}"))?;
    }
    Ok(())
}

/// Strips a `v` prefix from tags like `v1.2.3`; package versions must start with a digit.
fn package_version(version: &str) -> &str {
    match version.strip_prefix('v') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tag_prefix_only_before_digits() {
        assert_eq!(package_version("v1.2.3"), "1.2.3");
        assert_eq!(package_version("1.2.3"), "1.2.3");
        assert_eq!(package_version("vnext"), "vnext");
    }
}
