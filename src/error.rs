//! Error taxonomy for dashboard loads.

use thiserror::Error;

use crate::model::{RepoId, RepoIdError};

/// Failures of a dashboard operation.
///
/// Only [`DashboardError::InvalidIdentifier`] and
/// [`DashboardError::LatestSnapshotUnavailable`] ever reach the user; the
/// other conditions degrade gracefully inside the pipeline and exist so
/// they can be named in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// No registry document could be read; manual entry takes over.
    #[error("repository registry unavailable")]
    RegistryUnavailable,

    /// User input is not an `org/repo` identifier. Rejected before any fetch.
    #[error("specify the repository as org/repo (got {input:?})")]
    InvalidIdentifier {
        /// The rejected input.
        input: String,
    },

    /// The latest snapshot could not be fetched or parsed.
    #[error("latest snapshot not found for {repo}: {path}")]
    LatestSnapshotUnavailable {
        /// Repository being loaded.
        repo: RepoId,
        /// Path that was attempted.
        path: String,
    },

    /// No usable history index; the trend falls back to the latest snapshot.
    #[error("history index unavailable for {repo}")]
    HistoryUnavailable {
        /// Repository being loaded.
        repo: RepoId,
    },

    /// One document could not be fetched or parsed. Callers decide whether
    /// that is fatal.
    #[error("fetch failed for {path}: {reason}")]
    Fetch {
        /// Path that was attempted.
        path: String,
        /// Transport or parse failure.
        reason: String,
    },
}

impl From<RepoIdError> for DashboardError {
    fn from(err: RepoIdError) -> Self {
        Self::InvalidIdentifier { input: err.input }
    }
}
