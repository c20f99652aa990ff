//! Repository identifier normalisation.
//!
//! Users may pass either a full clone URL or a GitHub `owner/name` shorthand.
//! Anything starting with the four letters `http` is treated as already
//! qualified and passed through untouched.

use std::fmt;

use thiserror::Error;

const GITHUB_PREFIX: &str = "https://github.com/";

/// Errors raised while resolving a repository identifier.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RepoError {
    /// Raised when no repository was supplied.
    #[error("--repo flag is required")]
    Empty,
}

/// Maps a repository identifier to a clone URL.
///
/// # Examples
///
/// ```
/// use pro::repo::normalize_repo_url;
///
/// assert_eq!(normalize_repo_url("wilmoore/pro"), "https://github.com/wilmoore/pro.git");
/// assert_eq!(
///     normalize_repo_url("https://gitlab.com/team/site.git"),
///     "https://gitlab.com/team/site.git"
/// );
/// ```
#[must_use]
pub fn normalize_repo_url(repo: &str) -> String {
    if repo.starts_with("http") {
        return repo.to_owned();
    }
    format!("{GITHUB_PREFIX}{repo}.git")
}

/// Canonical clone URL for a single run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepoUrl(String);

impl RepoUrl {
    /// Validates that `repo` is non-empty and normalises it.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::Empty`] when `repo` is empty.
    pub fn parse(repo: &str) -> Result<Self, RepoError> {
        if repo.is_empty() {
            return Err(RepoError::Empty);
        }
        Ok(Self(normalize_repo_url(repo)))
    }

    /// Returns the clone URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
