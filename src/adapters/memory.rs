//! In-memory document source and diagnostic sink.

use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

use crate::ports::diagnostics::{DiagnosticSink, Level};
use crate::ports::source::{DocumentSource, FetchFuture};

/// Serves documents from a fixed map and remembers every requested path.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    /// Creates an empty source; every fetch fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document at `path`.
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.documents.insert(path.into(), body.into());
        self
    }

    /// Paths fetched so far, in request order.
    ///
    /// # Panics
    ///
    /// Panics if the request log lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log lock poisoned").clone()
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, path: &str) -> FetchFuture<'_> {
        self.requests.lock().expect("request log lock poisoned").push(path.to_string());
        let result: Result<String, Box<dyn Error + Send + Sync>> = self
            .documents
            .get(path)
            .cloned()
            .ok_or_else(|| format!("404 Not Found: {path}").into());
        Box::pin(async move { result })
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}

/// Captures diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    /// All captured messages in emission order.
    ///
    /// # Panics
    ///
    /// Panics if the message lock is poisoned.
    #[must_use]
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().expect("sink lock poisoned").clone()
    }

    /// Whether any captured message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|(_, message)| message.contains(needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, level: Level, message: &str) {
        self.messages.lock().expect("sink lock poisoned").push((level, message.to_string()));
    }
}
