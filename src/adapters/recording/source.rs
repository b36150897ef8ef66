//! Recording adapter for the `DocumentSource` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::source::{DocumentSource, FetchFuture};

/// Records document fetches while delegating to an inner source.
pub struct RecordingSource {
    inner: Box<dyn DocumentSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn DocumentSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct FetchInput<'a> {
    path: &'a str,
}

impl DocumentSource for RecordingSource {
    fn fetch(&self, path: &str) -> FetchFuture<'_> {
        let path = path.to_string();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.fetch(&path).await;
            record_result(&recorder, "source", "fetch", &FetchInput { path: &path }, &result);
            result
        })
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::memory::MemorySource;

    #[tokio::test]
    async fn records_successes_and_failures() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            dir.path().join("fetches.cassette.yaml"),
            "test",
            "memory",
        )));
        let inner = MemorySource::new().with("data/acme/app/latest.json", "{}");
        let source = RecordingSource::new(Box::new(inner), Arc::clone(&recorder));

        assert!(source.fetch("data/acme/app/latest.json").await.is_ok());
        assert!(source.fetch("data/acme/app/index.json").await.is_err());
        drop(source);

        let cassette = recorder.lock().unwrap().to_cassette();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input, json!({"path": "data/acme/app/latest.json"}));
        assert_eq!(cassette.interactions[0].output, json!({"ok": "{}"}));
        assert!(cassette.interactions[1].output["err"].as_str().unwrap().contains("404"));
    }
}
