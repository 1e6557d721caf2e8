//! Source repository resolution

use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

/// Where the project to release is cloned from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RepositorySource {
    Local(PathBuf),
    GitHub { org: String, repo: String },
    Url(String),
}

impl RepositorySource {
    /// Interprets `source` relative to `working_dir`.
    ///
    /// Existing paths always win; otherwise `org/repo` is GitHub shorthand and
    /// anything with a scheme or `git@` prefix is a clone URL.
    pub fn parse(source: &str, working_dir: &Path) -> std::io::Result<Self> {
        let candidate = Path::new(source);
        let absolute = candidate.absolutize_from(working_dir)?;
        if absolute.exists() {
            return Ok(Self::Local(absolute.into_owned()));
        }

        if source.contains("://") || source.starts_with("git@") {
            return Ok(Self::Url(source.to_string()));
        }

        if !source.starts_with('.') && !source.starts_with('/') {
            if let Some((org, repo)) = source.split_once('/') {
                if !org.is_empty() && !repo.is_empty() && !repo.contains('/') {
                    return Ok(Self::GitHub {
                        org: org.to_string(),
                        repo: repo.trim_end_matches(".git").to_string(),
                    });
                }
            }
        }

        Ok(Self::Local(absolute.into_owned()))
    }

    /// Argument handed to `git clone`.
    pub fn clone_url(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::GitHub { org, repo } => format!("https://github.com/{org}/{repo}.git"),
            Self::Url(url) => url.clone(),
        }
    }
}

impl std::fmt::Display for RepositorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.clone_url())
    }
}
