//! Builder for constructing Settings.

use std::path::PathBuf;

use path_absolutize::Absolutize;

use super::{HostEnvironment, ReleaseRequest, Settings};
use crate::release::{Error, Result};
use crate::source::RepositorySource;

/// Builder for constructing [`Settings`].
///
/// Validates user parameters and fills in everything derived from the
/// [`HostEnvironment`].
///
/// # Examples
///
/// ```no_run
/// use build_release::release::{HostEnvironment, SettingsBuilder};
///
/// # fn example() -> build_release::release::Result<()> {
/// let settings = SettingsBuilder::new()
///     .version("1.2.3")
///     .commit("abc123")
///     .output_dir("dist")
///     .build(&HostEnvironment::detect()?)?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    version: String,
    commit: String,
    output_dir: Option<PathBuf>,
    source: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Seeds the builder from parsed flags.
    pub fn from_request(request: &ReleaseRequest) -> Self {
        Self {
            version: request.version.clone(),
            commit: request.commit.clone(),
            output_dir: request.output_dir.clone(),
            source: Some(request.source.clone()),
        }
    }

    /// Sets the version label.
    ///
    /// # Required
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the commit to build.
    ///
    /// # Required
    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }

    /// Sets the artifact destination.
    ///
    /// Default: the working directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Sets the repository to build.
    ///
    /// Default: `.`
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingParameter`] if version or commit is empty
    /// - [`Error::InvalidParameter`] if the version contains whitespace or a path separator
    /// - [`Error::Environment`] if the working directory cannot be determined
    pub fn build(self, host: &HostEnvironment) -> Result<Settings> {
        let version = file_name_component("version", &self.version)?;
        let commit = required("commit", &self.commit)?;

        let working_dir = host.working_dir()?;

        let output_dir = match self.output_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir
                .absolutize_from(&working_dir)
                .map_err(|source| Error::Environment {
                    what: "output directory",
                    source,
                })?
                .into_owned(),
            _ => working_dir.clone(),
        };

        let source = self
            .source
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| ".".to_string());
        let source = RepositorySource::parse(source.trim(), &working_dir).map_err(|source| {
            Error::Environment {
                what: "source path",
                source,
            }
        })?;

        Ok(Settings::new(
            version,
            commit,
            host.platform.clone(),
            output_dir,
            source,
        ))
    }
}

fn required(flag: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingParameter { flag });
    }
    Ok(value.to_string())
}

/// Like [`required`], for values that end up in artifact file names.
fn file_name_component(flag: &'static str, value: &str) -> Result<String> {
    let value = required(flag, value)?;
    if value.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
        return Err(Error::InvalidParameter {
            flag,
            reason: format!("`{value}` must not contain whitespace or path separators"),
        });
    }
    Ok(value)
}
