//! Live document source over HTTP(S).

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

use crate::ports::source::{DocumentSource, FetchFuture};

/// Fetches documents relative to a base URL, bypassing caches.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Creates a source rooted at `base_url` (e.g. `https://example.github.io/metrics`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { client: Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Full URL of a document path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, path: &str) -> FetchFuture<'_> {
        let url = self.url_for(path);

        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache")
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("GET {url} failed: {e}").into()
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(format!("GET {url} returned {}", status.as_u16()).into());
            }

            response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                format!("Failed to read body of {url}: {e}").into()
            })
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
