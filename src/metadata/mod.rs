//! Package metadata and binary discovery from the released project's Cargo.toml

use std::path::Path;

use toml::Value;

/// Package metadata extracted from Cargo.toml
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Package name from `[package]`
    pub name: String,

    /// Package description, or a generic fallback
    pub description: String,

    /// List of package authors (`Name <email>`)
    pub authors: Vec<String>,

    /// SPDX license expression
    pub license: Option<String>,

    /// Homepage URL
    pub homepage: Option<String>,

    /// Debian `Depends` entries from `[package.metadata.release]`
    pub deb_depends: Vec<String>,

    /// RPM `Requires` entries from `[package.metadata.release]`
    pub rpm_requires: Vec<String>,
}

/// Complete manifest data from Cargo.toml
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CargoManifest {
    /// Package metadata ([package] section)
    pub metadata: PackageMetadata,

    /// Binary target names: every `[[bin]]`, or the package name when none are declared
    pub binaries: Vec<String>,
}

/// Errors reading a project manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse Cargo.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Load the manifest at `cargo_toml_path`.
pub fn load_manifest(cargo_toml_path: &Path) -> Result<CargoManifest, ManifestError> {
    let manifest = std::fs::read_to_string(cargo_toml_path).map_err(|source| ManifestError::Read {
        path: cargo_toml_path.display().to_string(),
        source,
    })?;
    parse_manifest(&manifest)
}

/// Parse manifest text.
pub fn parse_manifest(manifest: &str) -> Result<CargoManifest, ManifestError> {
    let toml_value: Value = toml::from_str(manifest)?;

    let package = toml_value
        .get("package")
        .ok_or_else(|| ManifestError::Invalid("no [package] section in Cargo.toml".to_string()))?;

    let name = package
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ManifestError::Invalid("missing 'name' in [package]".to_string()))?
        .to_string();

    let release = package.get("metadata").and_then(|m| m.get("release"));

    let metadata = PackageMetadata {
        description: package
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("Rust application")
            .to_string(),
        authors: string_list(package.get("authors")),
        license: package
            .get("license")
            .and_then(Value::as_str)
            .map(String::from),
        homepage: package
            .get("homepage")
            .or_else(|| package.get("repository"))
            .and_then(Value::as_str)
            .map(String::from),
        deb_depends: string_list(release.and_then(|r| r.get("depends"))),
        rpm_requires: string_list(release.and_then(|r| r.get("requires"))),
        name,
    };

    let mut binaries: Vec<String> = toml_value
        .get("bin")
        .and_then(Value::as_array)
        .map(|bins| {
            bins.iter()
                .filter_map(|bin| bin.get("name").and_then(Value::as_str))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    if binaries.is_empty() {
        binaries.push(metadata.name.clone());
    }

    Ok(CargoManifest { metadata, binaries })
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bins_and_release_metadata() {
        let manifest = parse_manifest(
            r#"
            [package]
            name = "demo"
            version = "0.1.0"
            description = "Demo tool"
            authors = ["Demo Dev <dev@example.com>"]
            license = "MIT"
            repository = "https://example.com/demo"

            [package.metadata.release]
            depends = ["fuse"]
            requires = ["fuse-libs"]

            [[bin]]
            name = "demo"

            [[bin]]
            name = "demo-helper"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.binaries, vec!["demo", "demo-helper"]);
        assert_eq!(manifest.metadata.name, "demo");
        assert_eq!(manifest.metadata.homepage.as_deref(), Some("https://example.com/demo"));
        assert_eq!(manifest.metadata.deb_depends, vec!["fuse"]);
        assert_eq!(manifest.metadata.rpm_requires, vec!["fuse-libs"]);
    }

    #[test]
    fn package_name_is_the_default_binary() {
        let manifest = parse_manifest("[package]\nname = \"solo\"\n").unwrap();
        assert_eq!(manifest.binaries, vec!["solo"]);
        assert_eq!(manifest.metadata.description, "Rust application");
        assert!(manifest.metadata.authors.is_empty());
    }

    #[test]
    fn workspace_root_without_package_is_rejected() {
        let err = parse_manifest("[workspace]\nmembers = []\n").unwrap_err();
        assert!(err.to_string().contains("[package]"));
    }
}
