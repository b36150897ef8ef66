//! Data model for metric snapshots and repository identifiers.
//!
//! Snapshots are produced upstream and consumed here read-only. Every
//! numeric field goes through [`coerce`], so malformed documents degrade to
//! zeros instead of failing.

mod coerce;
mod repo_id;
mod snapshot;

pub use coerce::{coerce, coerce_value};
pub use repo_id::{RepoId, RepoIdError};
pub use snapshot::{HistoryIndex, MetricGroup, Snapshot};
