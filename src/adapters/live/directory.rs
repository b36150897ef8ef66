//! Live document source reading a published site from disk.

use std::path::PathBuf;

use crate::ports::source::{DocumentSource, FetchFuture};

/// Reads documents from a local checkout of the published site.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`; paths resolve beneath it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, path: &str) -> FetchFuture<'_> {
        let full = self.root.join(path);
        Box::pin(async move {
            tokio::fs::read_to_string(&full).await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to read {}: {e}", full.display()).into()
                },
            )
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
