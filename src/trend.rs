//! Trend points derived from a snapshot series.

use serde::Serialize;

use crate::history::sort_chronologically;
use crate::model::{MetricGroup, Snapshot};

/// Label used for snapshots without a `generated_at` timestamp.
pub const MISSING_LABEL: &str = "—";

/// The seven legacy and support-library counters, as `(group, field)`.
///
/// Their unweighted sum is the legacy-usage index charted over time.
pub const LEGACY_COUNTERS: [(MetricGroup, &str); 7] = [
    (MetricGroup::Legacy, "asyncTask_usages"),
    (MetricGroup::Legacy, "loader_usages"),
    (MetricGroup::Legacy, "frameworkFragment_usages"),
    (MetricGroup::Legacy, "supportFragment_usages"),
    (MetricGroup::Legacy, "fragmentXml_tags"),
    (MetricGroup::SupportLib, "support_code_refs"),
    (MetricGroup::SupportLib, "support_dep_refs"),
];

/// One display-ready point of the trend charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// The snapshot's `generated_at`, or [`MISSING_LABEL`].
    pub label: String,
    /// `language.java_file_ratio` as a percentage.
    pub java_ratio_percent: f64,
    /// Sum of the seven [`LEGACY_COUNTERS`].
    pub legacy_total: f64,
}

impl TrendPoint {
    /// Derives the point for one snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            label: snapshot.generated_at().unwrap_or(MISSING_LABEL).to_string(),
            java_ratio_percent: snapshot.java_file_ratio() * 100.0,
            legacy_total: legacy_total(snapshot),
        }
    }
}

/// Sum of the seven legacy and support counters, each coerced independently.
#[must_use]
pub fn legacy_total(snapshot: &Snapshot) -> f64 {
    LEGACY_COUNTERS.iter().map(|&(group, field)| snapshot.metric(group, field)).sum()
}

/// Derives trend points in ascending `generated_at` order.
///
/// The input is re-sorted, so any order of snapshots yields an ordered
/// trend.
#[must_use]
pub fn aggregate(series: &[Snapshot]) -> Vec<TrendPoint> {
    let mut ordered = series.to_vec();
    sort_chronologically(&mut ordered);
    ordered.iter().map(TrendPoint::from_snapshot).collect()
}

/// X-axis labels of a trend.
#[must_use]
pub fn labels(points: &[TrendPoint]) -> Vec<String> {
    points.iter().map(|p| p.label.clone()).collect()
}

/// Java ratio column of a trend.
#[must_use]
pub fn ratio_series(points: &[TrendPoint]) -> Vec<f64> {
    points.iter().map(|p| p.java_ratio_percent).collect()
}

/// Legacy total column of a trend.
#[must_use]
pub fn legacy_series(points: &[TrendPoint]) -> Vec<f64> {
    points.iter().map(|p| p.legacy_total).collect()
}
