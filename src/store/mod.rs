//! Snapshot store: the single fetch-and-parse primitive.
//!
//! Every document the dashboard reads goes through [`SnapshotStore`]. A
//! failed fetch is never an error here; callers decide whether absence is
//! fatal.

pub mod registry;

use std::sync::Arc;

use serde_json::Value;

use crate::error::DashboardError;
use crate::model::Snapshot;
use crate::ports::diagnostics::DiagnosticSink;
use crate::ports::source::DocumentSource;

pub use registry::RegistryLoader;

/// Fetches and parses metric documents, tolerating absence.
#[derive(Clone)]
pub struct SnapshotStore {
    source: Arc<dyn DocumentSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl SnapshotStore {
    /// Creates a store reading from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn DocumentSource>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { source, diagnostics }
    }

    /// Fetches `path` as a snapshot. `None` on any failure.
    pub async fn fetch(&self, path: &str) -> Option<Snapshot> {
        let value = self.fetch_json(path).await?;
        let snapshot = Snapshot::from_value(value);
        if snapshot.is_none() {
            self.diagnostics.warn(&format!("{path}: snapshot document is not an object"));
        }
        snapshot
    }

    /// Fetches `path` as arbitrary JSON. `None` on any failure.
    pub async fn fetch_json(&self, path: &str) -> Option<Value> {
        let body = match self.source.fetch(path).await {
            Ok(body) => body,
            Err(e) => {
                let err = DashboardError::Fetch { path: path.to_string(), reason: e.to_string() };
                self.diagnostics.debug(&err.to_string());
                return None;
            }
        };
        match serde_json::from_str(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                let reason = format!("malformed JSON: {e}");
                let err = DashboardError::Fetch { path: path.to_string(), reason };
                self.diagnostics.warn(&err.to_string());
                None
            }
        }
    }

    /// The diagnostic sink shared with components built on this store.
    #[must_use]
    pub fn diagnostics(&self) -> &Arc<dyn DiagnosticSink> {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemorySink, MemorySource};

    fn store(source: MemorySource) -> (SnapshotStore, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        (SnapshotStore::new(Arc::new(source), sink.clone()), sink)
    }

    #[tokio::test]
    async fn fetches_and_parses_snapshot() {
        let source = MemorySource::new()
            .with("data/acme/app/latest.json", r#"{"generated_at":"2025-01-01T00:00:00Z"}"#);
        let (store, _) = store(source);
        let snapshot = store.fetch("data/acme/app/latest.json").await.unwrap();
        assert_eq!(snapshot.generated_at(), Some("2025-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn missing_document_is_none() {
        let (store, sink) = store(MemorySource::new());
        assert!(store.fetch("data/acme/app/latest.json").await.is_none());
        assert!(sink.contains(
            "fetch failed for data/acme/app/latest.json: 404 Not Found: data/acme/app/latest.json"
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_none() {
        let source = MemorySource::new().with("data/a/b/latest.json", "{not json");
        let (store, sink) = store(source);
        assert!(store.fetch("data/a/b/latest.json").await.is_none());
        assert!(sink.contains("fetch failed for data/a/b/latest.json: malformed JSON"));
    }

    #[tokio::test]
    async fn non_object_snapshot_is_none() {
        let source = MemorySource::new().with("data/a/b/latest.json", "[1,2,3]");
        let (store, _) = store(source);
        assert!(store.fetch("data/a/b/latest.json").await.is_none());
        assert!(store.fetch_json("data/a/b/latest.json").await.is_some());
    }
}
