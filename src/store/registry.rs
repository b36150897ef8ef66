//! Registry of known repository identifiers.

use serde_json::Value;

use super::SnapshotStore;
use crate::model::RepoId;

/// Path of the registry document.
pub const REGISTRY_PATH: &str = "data/_registry.json";

/// Older sites publish the registry here instead.
pub const LEGACY_REGISTRY_PATH: &str = "data/registry.json";

/// Loads the list of repositories the site publishes.
pub struct RegistryLoader {
    store: SnapshotStore,
}

impl RegistryLoader {
    /// Creates a loader on top of `store`.
    #[must_use]
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Returns the registered repositories, or an empty list.
    ///
    /// A missing or malformed registry is a supported mode (manual entry),
    /// so this never fails. Invalid entries are skipped.
    pub async fn load(&self) -> Vec<RepoId> {
        for path in [REGISTRY_PATH, LEGACY_REGISTRY_PATH] {
            let Some(document) = self.store.fetch_json(path).await else {
                continue;
            };
            let Some(entries) = document.get("repos").and_then(Value::as_array) else {
                self.store.diagnostics().warn(&format!("{path}: `repos` is not a list"));
                return Vec::new();
            };
            return self.parse_entries(path, entries);
        }
        self.store.diagnostics().info("no repository registry; falling back to manual entry");
        Vec::new()
    }

    fn parse_entries(&self, path: &str, entries: &[Value]) -> Vec<RepoId> {
        let mut repos = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry.as_str().map(str::parse::<RepoId>) {
                Some(Ok(repo)) => repos.push(repo),
                _ => self.store.diagnostics().warn(&format!("{path}: skipping entry {entry}")),
            }
        }
        repos
    }
}
