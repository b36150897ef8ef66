//! Service context bundling the injected ports.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::{DirectorySource, HttpSource, LogSink};
use crate::adapters::recording::RecordingSource;
use crate::adapters::replaying::ReplayingSource;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::{Settings, SourceSpec};
use crate::ports::diagnostics::DiagnosticSink;
use crate::ports::source::DocumentSource;
use crate::store::SnapshotStore;

/// Bundles the document source and diagnostic sink.
///
/// Constructors wire up different source adapters (live, recording,
/// replaying). The UI and chart backend are supplied per command.
pub struct ServiceContext {
    /// Where documents are fetched from.
    pub source: Arc<dyn DocumentSource>,
    /// Where pipeline diagnostics go.
    pub diagnostics: Arc<dyn DiagnosticSink>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context with injected ports.
    #[must_use]
    pub fn new(source: Arc<dyn DocumentSource>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { source, diagnostics, recorder: None }
    }

    /// Creates a live context for the configured data source.
    #[must_use]
    pub fn live(settings: &Settings) -> Self {
        let source = live_source(&settings.source);
        match &settings.record {
            Some(path) => Self::recording(source, path),
            None => Self::new(Arc::from(source), Arc::new(LogSink)),
        }
    }

    /// Creates a context that records every fetch made through `inner`.
    ///
    /// The cassette is written to `path` when this context is dropped.
    /// This is the developer-only mechanism for capturing cassettes via
    /// the `SNAPDASH_RECORD` env var.
    #[must_use]
    pub fn recording(inner: Box<dyn DocumentSource>, path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            "snapdash-session",
            inner.describe(),
        )));
        let source = RecordingSource::new(inner, Arc::clone(&recorder));
        Self { source: Arc::new(source), diagnostics: Arc::new(LogSink), recorder: Some(recorder) }
    }

    /// Creates a context serving fetches from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::new(Arc::new(ReplayingSource::new(&cassette)), Arc::new(LogSink)))
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// A snapshot store over this context's ports.
    #[must_use]
    pub fn store(&self) -> SnapshotStore {
        SnapshotStore::new(Arc::clone(&self.source), Arc::clone(&self.diagnostics))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        let Ok(recorder) = recorder.lock() else {
            return;
        };
        match recorder.write() {
            Ok(path) => log::info!("recorded {} fetches to {}", recorder.len(), path.display()),
            Err(e) => log::warn!("failed to write cassette: {e}"),
        }
    }
}

fn live_source(spec: &SourceSpec) -> Box<dyn DocumentSource> {
    match spec {
        SourceSpec::Http(url) => Box::new(HttpSource::new(url)),
        SourceSpec::Directory(root) => Box::new(DirectorySource::new(root)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::memory::{MemorySink, MemorySource};

    #[tokio::test]
    async fn replaying_serves_recorded_fetches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fetches.cassette.yaml");
        let mut recorder = CassetteRecorder::new(&path, "test", "memory");
        recorder.record("source", "fetch", json!({"path": "a.json"}), json!({"ok": "{}"}));
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();

        assert_eq!(ctx.source.fetch("a.json").await.unwrap(), "{}");
        assert!(ctx.source.fetch("b.json").await.is_err());
    }

    #[tokio::test]
    async fn recording_writes_cassette_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/session.cassette.yaml");
        let inner = Box::new(MemorySource::new().with("data/x.json", "[1]"));

        let ctx = ServiceContext::recording(inner, &path);
        assert_eq!(ctx.source.fetch("data/x.json").await.unwrap(), "[1]");
        assert!(!path.exists());
        drop(ctx);

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].input, json!({"path": "data/x.json"}));
        assert_eq!(cassette.source, "memory (1 documents)");
    }

    #[test]
    fn live_context_reads_configured_directory() {
        let settings =
            Settings { source: SourceSpec::Directory("/srv/site".into()), record: None };
        let ctx = ServiceContext::live(&settings)
            .with_diagnostics(Arc::new(MemorySink::default()));
        assert_eq!(ctx.source.describe(), "/srv/site");
    }
}
