//! Point-in-time summary of a single snapshot.

use serde::Serialize;

use crate::model::{MetricGroup, Snapshot};
use crate::trend::LEGACY_COUNTERS;

/// Bar labels matching [`LEGACY_COUNTERS`] position by position.
pub const LEGACY_LABELS: [&str; 7] = [
    "AsyncTask",
    "Loader",
    "FW Fragment",
    "Support Fragment",
    "<fragment>",
    "support.*(code)",
    "com.android.support:(dep)",
];

/// One summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    /// Card group, e.g. `"UI"`.
    pub section: &'static str,
    /// What is measured.
    pub key: &'static str,
    /// Formatted value.
    pub value: String,
}

impl SummaryRecord {
    fn new(section: &'static str, key: &'static str, value: String) -> Self {
        Self { section, key, value }
    }
}

/// Projects a snapshot onto the ten summary cards.
#[must_use]
pub fn project(snapshot: &Snapshot) -> Vec<SummaryRecord> {
    use MetricGroup::{BuildSys, Events, Files, SupportLib, Ui};

    let count = |group, field| format_count(snapshot.metric(group, field));
    let pair = |group, a, b| format!("{} / {}", count(group, a), count(group, b));

    vec![
        SummaryRecord::new("Language", "Java ratio", format_percent(snapshot.java_file_ratio())),
        SummaryRecord::new(
            "Language",
            "Kotlin / Java",
            format!("{} / {}", count(Files, "kotlin"), count(Files, "java")),
        ),
        SummaryRecord::new("UI", "Compose functions", count(Ui, "composable_functions")),
        SummaryRecord::new("UI", "View-like files", count(Ui, "kotlin_view_like_files")),
        SummaryRecord::new(
            "UI",
            "XML / DataBinding XML",
            pair(Ui, "xml_layout_files", "databinding_layout_files"),
        ),
        SummaryRecord::new(
            "Events",
            "Flow / LiveData",
            pair(Events, "flow_imports", "livedata_imports"),
        ),
        SummaryRecord::new(
            "Events",
            "Rx / EventBus",
            pair(Events, "rx_imports", "eventbus_imports"),
        ),
        SummaryRecord::new(
            "Build",
            "kapt / ksp",
            pair(BuildSys, "kapt_deps_count", "ksp_plugins_count"),
        ),
        SummaryRecord::new(
            "Build",
            "DataBinding modules",
            count(BuildSys, "dataBinding_enabled_modules"),
        ),
        SummaryRecord::new(
            "Support",
            "Support refs (code / dep)",
            pair(SupportLib, "support_code_refs", "support_dep_refs"),
        ),
    ]
}

/// The seven legacy and support counters of one snapshot, for the bar chart.
#[must_use]
pub fn legacy_vector(snapshot: &Snapshot) -> [f64; 7] {
    LEGACY_COUNTERS.map(|(group, field)| snapshot.metric(group, field))
}

/// Formats a `[0, 1]` ratio as a percentage with one decimal.
///
/// Rounds half away from zero on the value's shortest decimal form, so
/// `0.2345` renders as `23.5%`.
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    let tenths = (ratio * 100.0 * 10.0).round() / 10.0;
    format!("{tenths:.1}%")
}

/// Formats a count, dropping the fraction when it is integral.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
