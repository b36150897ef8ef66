//! Snapshot documents and history indexes.

use serde_json::{Map, Value};

use super::coerce::coerce_value;

/// The nested groups a snapshot may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricGroup {
    /// `files`: source file counts per language.
    Files,
    /// `language`: language mix ratios.
    Language,
    /// `ui`: UI framework usage.
    Ui,
    /// `events`: reactive-stream and event-bus imports.
    Events,
    /// `buildsys`: build tool plugin usage.
    BuildSys,
    /// `legacy`: deprecated framework API usage.
    Legacy,
    /// `supportlib`: support-library references.
    SupportLib,
}

impl MetricGroup {
    /// The JSON key of this group.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Language => "language",
            Self::Ui => "ui",
            Self::Events => "events",
            Self::BuildSys => "buildsys",
            Self::Legacy => "legacy",
            Self::SupportLib => "supportlib",
        }
    }
}

/// One point-in-time metrics document for a repository.
///
/// The raw document is kept intact for display. Field access goes through
/// [`Snapshot::metric`], which never fails: a missing group, a group that
/// is not an object, or a non-numeric field all read as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    raw: Map<String, Value>,
}

impl Snapshot {
    /// Wraps a parsed JSON value. Returns `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(raw) => Some(Self { raw }),
            _ => None,
        }
    }

    /// Parses a snapshot from a JSON document body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON or not a JSON object.
    pub fn parse(body: &str) -> Result<Self, String> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| format!("invalid snapshot JSON: {e}"))?;
        Self::from_value(value).ok_or_else(|| "snapshot document is not an object".to_string())
    }

    /// The `generated_at` timestamp, if present as a string.
    #[must_use]
    pub fn generated_at(&self) -> Option<&str> {
        self.raw.get("generated_at").and_then(Value::as_str)
    }

    /// Reads `group.field` with the coercion rule applied.
    #[must_use]
    pub fn metric(&self, group: MetricGroup, field: &str) -> f64 {
        coerce_value(self.raw.get(group.key()).and_then(|g| g.get(field)))
    }

    /// `language.java_file_ratio`, coerced.
    #[must_use]
    pub fn java_file_ratio(&self) -> f64 {
        self.metric(MetricGroup::Language, "java_file_ratio")
    }

    /// The document as it was received.
    #[must_use]
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Pretty-printed JSON of the raw document.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_default()
    }
}

/// Ordered manifest of snapshot file names for one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryIndex {
    /// File names, oldest first by the producer's convention.
    pub history: Vec<String>,
}

impl HistoryIndex {
    /// Extracts the index from a JSON document.
    ///
    /// Returns `None` when `history` is missing or not a list. Non-string
    /// entries are dropped.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let entries = value.get("history")?.as_array()?;
        let history = entries.iter().filter_map(Value::as_str).map(str::to_string).collect();
        Some(Self { history })
    }

    /// The last `window` entries, in index order.
    #[must_use]
    pub fn most_recent(&self, window: usize) -> &[String] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }
}
