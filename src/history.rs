//! History resolution: latest snapshot plus the recent trend window.

use futures::future::join_all;

use crate::error::DashboardError;
use crate::model::{HistoryIndex, RepoId, Snapshot};
use crate::store::SnapshotStore;

/// Number of most recent index entries fetched for the trend.
pub const HISTORY_WINDOW: usize = 12;

/// Everything a load needs to render one repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHistory {
    /// The most recent snapshot.
    pub latest: Snapshot,
    /// Snapshots in ascending `generated_at` order.
    pub series: Vec<Snapshot>,
    /// History documents listed in the window that could not be fetched.
    pub skipped: usize,
}

/// Resolves a repository to its latest snapshot and recent history.
pub struct HistoryResolver {
    store: SnapshotStore,
}

impl HistoryResolver {
    /// Creates a resolver on top of `store`.
    #[must_use]
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Fetches `latest.json`, then the history window.
    ///
    /// History documents are fetched concurrently; individual failures are
    /// dropped and counted in [`ResolvedHistory::skipped`]. A missing or
    /// empty index degrades to a one-point series of the latest snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::LatestSnapshotUnavailable`] if the latest
    /// snapshot cannot be fetched or parsed.
    pub async fn resolve(&self, repo: &RepoId) -> Result<ResolvedHistory, DashboardError> {
        let diagnostics = self.store.diagnostics();
        let latest_path = repo.latest_path();
        let latest = self.store.fetch(&latest_path).await.ok_or_else(|| {
            DashboardError::LatestSnapshotUnavailable { repo: repo.clone(), path: latest_path }
        })?;

        let index = self.load_index(repo).await;
        let Some(index) = index.filter(|index| !index.history.is_empty()) else {
            let degraded = DashboardError::HistoryUnavailable { repo: repo.clone() };
            diagnostics.info(&format!("{degraded}; trend shows the latest snapshot only"));
            return Ok(ResolvedHistory { series: vec![latest.clone()], latest, skipped: 0 });
        };

        let window = index.most_recent(HISTORY_WINDOW);
        let (names, rejected): (Vec<&String>, Vec<&String>) =
            window.iter().partition(|name| is_plain_file_name(name));
        for name in rejected {
            diagnostics.warn(&format!("{repo}: ignoring history entry {name:?}"));
        }
        let paths: Vec<String> = names.iter().map(|name| repo.history_path(name)).collect();
        diagnostics.debug(&format!("{repo}: fetching {} history documents", paths.len()));

        let fetched = join_all(paths.iter().map(|path| self.store.fetch(path))).await;
        let requested = window.len();
        let mut series: Vec<Snapshot> = fetched.into_iter().flatten().collect();
        let skipped = requested - series.len();
        if skipped > 0 {
            diagnostics
                .warn(&format!("{repo}: skipped {skipped} of {requested} history documents"));
        }

        sort_chronologically(&mut series);
        Ok(ResolvedHistory { latest, series, skipped })
    }

    async fn load_index(&self, repo: &RepoId) -> Option<HistoryIndex> {
        let document = self.store.fetch_json(&repo.index_path()).await?;
        HistoryIndex::from_value(&document)
    }
}

/// Index entries must name a file directly inside the repository directory.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}

/// Sorts snapshots ascending by `generated_at`.
///
/// Timestamps share one canonical ISO-8601 format, so string order is
/// time order. The sort is stable and snapshots without a timestamp sort
/// first, keeping their relative order.
pub fn sort_chronologically(series: &mut [Snapshot]) {
    series.sort_by(|a, b| a.generated_at().cmp(&b.generated_at()));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::adapters::memory::{MemorySink, MemorySource};

    fn snapshot_body(generated_at: &str) -> String {
        json!({ "generated_at": generated_at, "language": { "java_file_ratio": 0.5 } })
            .to_string()
    }

    fn resolver(source: MemorySource) -> (HistoryResolver, Arc<MemorySource>) {
        let source = Arc::new(source);
        let store = SnapshotStore::new(source.clone(), Arc::new(MemorySink::default()));
        (HistoryResolver::new(store), source)
    }

    fn repo() -> RepoId {
        "acme/app".parse().unwrap()
    }

    #[tokio::test]
    async fn missing_latest_is_fatal() {
        let (resolver, _) = resolver(MemorySource::new());
        let err = resolver.resolve(&repo()).await.unwrap_err();
        assert_eq!(
            err,
            DashboardError::LatestSnapshotUnavailable {
                repo: repo(),
                path: "data/acme/app/latest.json".into(),
            }
        );
    }

    #[tokio::test]
    async fn missing_index_degrades_to_latest() {
        let source = MemorySource::new()
            .with("data/acme/app/latest.json", snapshot_body("2025-09-04T06:00:00Z"));
        let (resolver, _) = resolver(source);
        let resolved = resolver.resolve(&repo()).await.unwrap();
        assert_eq!(resolved.series, vec![resolved.latest.clone()]);
        assert_eq!(resolved.skipped, 0);
    }

    #[tokio::test]
    async fn empty_index_degrades_to_latest() {
        let source = MemorySource::new()
            .with("data/acme/app/latest.json", snapshot_body("2025-09-04T06:00:00Z"))
            .with("data/acme/app/index.json", r#"{"history":[]}"#);
        let (resolver, _) = resolver(source);
        assert_eq!(resolver.resolve(&repo()).await.unwrap().series.len(), 1);
    }

    #[tokio::test]
    async fn fetches_only_the_last_twelve_entries() {
        let names: Vec<String> = (1..=20).map(|day| format!("2025-01-{day:02}.json")).collect();
        let mut source = MemorySource::new()
            .with("data/acme/app/latest.json", snapshot_body("2025-01-20T00:00:00Z"))
            .with("data/acme/app/index.json", json!({ "history": names }).to_string());
        for day in 1..=20 {
            source = source.with(
                format!("data/acme/app/2025-01-{day:02}.json"),
                snapshot_body(&format!("2025-01-{day:02}T00:00:00Z")),
            );
        }
        let (resolver, source) = resolver(source);

        let resolved = resolver.resolve(&repo()).await.unwrap();

        assert_eq!(resolved.series.len(), HISTORY_WINDOW);
        assert_eq!(resolved.series[0].generated_at(), Some("2025-01-09T00:00:00Z"));
        assert_eq!(resolved.series[11].generated_at(), Some("2025-01-20T00:00:00Z"));
        let requested = source.requests();
        assert!(!requested.contains(&"data/acme/app/2025-01-08.json".to_string()));
        assert!(requested.contains(&"data/acme/app/2025-01-09.json".to_string()));
    }

    #[tokio::test]
    async fn partial_failures_are_dropped_and_counted() {
        let source = MemorySource::new()
            .with("data/acme/app/latest.json", snapshot_body("2025-03-01T00:00:00Z"))
            .with("data/acme/app/index.json", r#"{"history":["a.json","b.json","c.json"]}"#)
            .with("data/acme/app/a.json", snapshot_body("2025-01-01T00:00:00Z"))
            .with("data/acme/app/c.json", "{truncated");
        let (resolver, _) = resolver(source);

        let resolved = resolver.resolve(&repo()).await.unwrap();

        assert_eq!(resolved.series.len(), 1);
        assert_eq!(resolved.skipped, 2);
    }

    #[tokio::test]
    async fn entries_outside_the_repository_are_never_fetched() {
        let source = MemorySource::new()
            .with("data/acme/app/latest.json", snapshot_body("2025-03-01T00:00:00Z"))
            .with(
                "data/acme/app/index.json",
                r#"{"history":["../../_registry.json","nested/a.json","..","ok.json"]}"#,
            )
            .with("data/_registry.json", snapshot_body("2025-01-01T00:00:00Z"))
            .with("data/acme/app/ok.json", snapshot_body("2025-02-01T00:00:00Z"));
        let (resolver, source) = resolver(source);

        let resolved = resolver.resolve(&repo()).await.unwrap();

        assert_eq!(resolved.series.len(), 1);
        assert_eq!(resolved.series[0].generated_at(), Some("2025-02-01T00:00:00Z"));
        assert_eq!(resolved.skipped, 3);
        assert_eq!(
            source.requests(),
            ["data/acme/app/latest.json", "data/acme/app/index.json", "data/acme/app/ok.json"]
        );
    }

    #[tokio::test]
    async fn series_is_sorted_by_timestamp_not_index_order() {
        let source = MemorySource::new()
            .with("data/acme/app/latest.json", snapshot_body("2025-03-01T00:00:00Z"))
            .with("data/acme/app/index.json", r#"{"history":["x.json","y.json","z.json"]}"#)
            .with("data/acme/app/x.json", snapshot_body("2025-03-01T00:00:00Z"))
            .with("data/acme/app/y.json", snapshot_body("2025-01-01T00:00:00Z"))
            .with("data/acme/app/z.json", snapshot_body("2025-02-01T00:00:00Z"));
        let (resolver, _) = resolver(source);

        let resolved = resolver.resolve(&repo()).await.unwrap();

        let stamps: Vec<_> = resolved.series.iter().map(Snapshot::generated_at).collect();
        assert_eq!(
            stamps,
            [
                Some("2025-01-01T00:00:00Z"),
                Some("2025-02-01T00:00:00Z"),
                Some("2025-03-01T00:00:00Z")
            ]
        );
    }

    #[test]
    fn snapshots_without_timestamp_sort_first_and_stay_stable() {
        let mut series: Vec<Snapshot> = [
            json!({"generated_at": "2025-02-01T00:00:00Z"}),
            json!({"id": "first-undated"}),
            json!({"generated_at": "2025-01-01T00:00:00Z"}),
            json!({"id": "second-undated"}),
        ]
        .into_iter()
        .filter_map(Snapshot::from_value)
        .collect();

        sort_chronologically(&mut series);

        assert_eq!(series[0].raw()["id"], "first-undated");
        assert_eq!(series[1].raw()["id"], "second-undated");
        assert_eq!(series[2].generated_at(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(series[3].generated_at(), Some("2025-02-01T00:00:00Z"));
    }
}
