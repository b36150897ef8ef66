//! Runtime settings resolved from flags and the environment.

use std::path::PathBuf;

/// Environment variable naming the data source when `--source` is absent.
pub const SOURCE_ENV: &str = "SNAPDASH_SOURCE";

/// Environment variable naming a cassette file to record fetches into.
pub const RECORD_ENV: &str = "SNAPDASH_RECORD";

/// Where the published metric documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// A site served over HTTP(S), by base URL.
    Http(String),
    /// A local checkout of the site.
    Directory(PathBuf),
}

impl SourceSpec {
    /// Interprets `value` as a URL if it has an HTTP scheme, else as a directory.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Http(value.to_string())
        } else {
            Self::Directory(PathBuf::from(value))
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Data source root.
    pub source: SourceSpec,
    /// Cassette file to record fetches into, if any.
    pub record: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings: `--source`, then `SNAPDASH_SOURCE`, then the
    /// current directory. Recording is enabled by `SNAPDASH_RECORD`.
    #[must_use]
    pub fn resolve(source_flag: Option<&str>) -> Self {
        Self::resolve_with(source_flag, |key| std::env::var(key).ok())
    }

    /// [`Settings::resolve`] with an explicit environment lookup.
    pub fn resolve_with(source_flag: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Self {
        let source = source_flag
            .map(str::to_string)
            .or_else(|| env(SOURCE_ENV))
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| SourceSpec::Directory(PathBuf::from(".")), |v| SourceSpec::parse(&v));
        let record = env(RECORD_ENV).filter(|value| !value.is_empty()).map(PathBuf::from);
        Self { source, record }
    }
}
