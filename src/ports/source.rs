//! Document source port for fetching published metric documents.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`DocumentSource`] to keep the trait dyn-compatible.
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Fetches documents by path relative to the data root.
///
/// Paths look like `data/acme/app/latest.json`. Implementations must
/// bypass any response cache and must not retry.
pub trait DocumentSource: Send + Sync {
    /// Fetches the body of the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// missing document.
    fn fetch(&self, path: &str) -> FetchFuture<'_>;

    /// Human-readable description of where documents come from.
    fn describe(&self) -> String;
}
