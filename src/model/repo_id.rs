//! Repository identifiers of the form `org/repo`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why a string was rejected as a repository identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected `org/repo`, got {input:?}")]
pub struct RepoIdError {
    /// The rejected input.
    pub input: String,
}

/// A validated `org/repo` identifier.
///
/// Both segments are non-empty and neither contains a `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoId {
    org: String,
    repo: String,
}

impl RepoId {
    /// Builds an identifier from its two segments.
    ///
    /// # Errors
    ///
    /// Returns an error if either segment is empty or contains a `/`.
    pub fn new(org: &str, repo: &str) -> Result<Self, RepoIdError> {
        format!("{org}/{repo}").parse()
    }

    /// The organisation segment.
    #[must_use]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// The repository segment.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Directory holding this repository's documents, relative to the data root.
    #[must_use]
    pub fn data_dir(&self) -> String {
        format!("data/{}/{}", self.org, self.repo)
    }

    /// Path of the most recent snapshot document.
    #[must_use]
    pub fn latest_path(&self) -> String {
        format!("{}/latest.json", self.data_dir())
    }

    /// Path of the history index document.
    #[must_use]
    pub fn index_path(&self) -> String {
        format!("{}/index.json", self.data_dir())
    }

    /// Path of a named history document.
    #[must_use]
    pub fn history_path(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.data_dir())
    }
}

impl FromStr for RepoId {
    type Err = RepoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || RepoIdError { input: s.to_string() };
        let (org, repo) = s.split_once('/').ok_or_else(reject)?;
        if org.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(reject());
        }
        Ok(Self { org: org.to_string(), repo: repo.to_string() })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.repo)
    }
}
