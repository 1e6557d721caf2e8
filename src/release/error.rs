//! Error types for the release pipeline.
//!
//! Every pipeline step returns [`Error`]; the orchestrator wraps failures in
//! [`Error::Step`] so the message names the step that produced them.

use std::fmt::Display;
use std::io;
use std::process::ExitStatus;

use thiserror::Error;

use super::platform::PackageFormat;

/// Result type alias for release operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline step names, used to prefix errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    CheckTools,
    ResolveSettings,
    BuildBinaries,
    PackageTarball,
    PackageDeb,
    PackageRpm,
    ReportArtifacts,
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::CheckTools => "check for tools",
            Step::ResolveSettings => "resolve settings",
            Step::BuildBinaries => "build binaries",
            Step::PackageTarball => "package tarball",
            Step::PackageDeb => "package deb",
            Step::PackageRpm => "package rpm",
            Step::ReportArtifacts => "report artifacts",
        };
        f.write_str(name)
    }
}

/// Errors produced by the release pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// A required flag was empty or absent.
    #[error("missing required parameter: you must set --{flag}")]
    MissingParameter { flag: &'static str },

    /// A flag was present but unusable.
    #[error("invalid --{flag}: {reason}")]
    InvalidParameter { flag: &'static str, reason: String },

    /// Ambient state (working directory, host platform) could not be determined.
    #[error("cannot determine {what}: {source}")]
    Environment {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    /// A required executable is not on the search path.
    #[error("required tool `{tool}` not found on the search path: {source}")]
    ToolNotFound {
        tool: &'static str,
        #[source]
        source: which::Error,
    },

    /// The checkout or compiler toolchain failed.
    #[error("build failed: {message}")]
    Build { message: String },

    /// Staging a layout or running a packaging tool failed.
    #[error("{format} packaging failed: {message}")]
    Packaging {
        format: PackageFormat,
        message: String,
    },

    /// Failure wrapped with the name of the step that produced it.
    #[error("{step}: {source}")]
    Step {
        step: Step,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Returns the innermost error, skipping step wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Step { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the outermost step this error was attributed to.
    pub fn step(&self) -> Option<Step> {
        match self {
            Error::Step { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub(crate) fn packaging(format: PackageFormat, message: impl Into<String>) -> Self {
        Error::Packaging {
            format,
            message: message.into(),
        }
    }
}

/// Extension trait attaching pipeline context to foreign failures.
pub trait ErrorExt<T> {
    /// Converts the failure into [`Error::Build`], prefixed with `context`.
    fn build_context(self, context: impl Display) -> Result<T>;

    /// Converts the failure into [`Error::Packaging`] for `format`, prefixed with `context`.
    fn packaging_context(self, format: PackageFormat, context: impl Display) -> Result<T>;
}

impl<T, E: Display> ErrorExt<T> for std::result::Result<T, E> {
    fn build_context(self, context: impl Display) -> Result<T> {
        self.map_err(|e| Error::Build {
            message: format!("{context}: {e}"),
        })
    }

    fn packaging_context(self, format: PackageFormat, context: impl Display) -> Result<T> {
        self.map_err(|e| Error::packaging(format, format!("{context}: {e}")))
    }
}

/// Wraps a step's failure with the step name.
pub(crate) trait StepContext<T> {
    fn step(self, step: Step) -> Result<T>;
}

impl<T> StepContext<T> for Result<T> {
    fn step(self, step: Step) -> Result<T> {
        self.map_err(|e| Error::Step {
            step,
            source: Box::new(e),
        })
    }
}

/// Failure of an external tool invocation.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The process could not be started.
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The process ran and exited unsuccessfully.
    #[error("`{command}` exited with {status}{}", diagnostics(.output))]
    Status {
        command: String,
        status: ExitStatus,
        output: String,
    },
}

fn diagnostics(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(":\n{output}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wrapper_prefixes_message_and_keeps_root() {
        let err: Result<()> = Err(Error::MissingParameter { flag: "version" });
        let err = err.step(Step::ResolveSettings).unwrap_err();

        assert_eq!(
            err.to_string(),
            "resolve settings: missing required parameter: you must set --version"
        );
        assert!(matches!(
            err.root(),
            Error::MissingParameter { flag: "version" }
        ));
        assert_eq!(err.step(), Some(Step::ResolveSettings));
    }

    #[test]
    fn deb_and_rpm_failures_are_distinguishable() {
        let deb: Result<()> = Err("boom").packaging_context(PackageFormat::Deb, "dpkg-deb");
        let rpm: Result<()> = Err("boom").packaging_context(PackageFormat::Rpm, "rpmbuild");
        let deb = deb.step(Step::PackageDeb).unwrap_err().to_string();
        let rpm = rpm.step(Step::PackageRpm).unwrap_err().to_string();

        assert_ne!(deb, rpm);
        assert!(deb.starts_with("package deb: .deb packaging failed"));
        assert!(rpm.starts_with("package rpm: .rpm packaging failed"));
    }
}
