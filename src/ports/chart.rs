//! Chart rendering port.
//!
//! The rendering library is an external collaborator. The core only asks
//! it to create a chart on a named surface and later to swap that chart's
//! data; [`crate::chart::ChartManager`] decides which of the two happens.

use std::error::Error;

/// The chart types the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Categorical comparison.
    Bar,
    /// Time-ordered trend.
    Line,
}

/// Static configuration of a chart, fixed at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Chart type.
    pub kind: ChartKind,
    /// Label of the single dataset.
    pub series_label: String,
    /// Pins the y-axis floor at zero.
    pub begin_at_zero: bool,
    /// Whether a legend naming the dataset is drawn.
    pub show_legend: bool,
}

impl ChartConfig {
    /// A legend-less bar chart.
    #[must_use]
    pub fn bar(series_label: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Bar,
            series_label: series_label.into(),
            begin_at_zero: false,
            show_legend: false,
        }
    }

    /// A legend-less line chart with its y-axis floor at zero.
    #[must_use]
    pub fn line(series_label: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Line,
            series_label: series_label.into(),
            begin_at_zero: true,
            show_legend: false,
        }
    }
}

/// Labels and values of a chart's single dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// Category or x-axis labels.
    pub labels: Vec<String>,
    /// One value per label.
    pub values: Vec<f64>,
}

impl ChartData {
    /// Pairs labels with values.
    #[must_use]
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }
}

/// A live chart instance bound to one drawing surface.
pub trait ChartHandle {
    /// Replaces the dataset in place.
    fn set_data(&mut self, data: &ChartData);

    /// Requests a redraw with the current dataset.
    fn redraw(&mut self);

    /// Releases the instance and its surface binding.
    fn destroy(self: Box<Self>);
}

/// Creates chart instances on named surfaces.
pub trait ChartBackend {
    /// Constructs a chart on `surface` and draws `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface does not exist or cannot be drawn on.
    fn create(
        &self,
        surface: &str,
        config: &ChartConfig,
        data: &ChartData,
    ) -> Result<Box<dyn ChartHandle>, Box<dyn Error + Send + Sync>>;
}
