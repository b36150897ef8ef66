//! Text chart backend drawing bar and line charts as terminal lines.

use std::error::Error;

use super::console::Console;
use crate::ports::chart::{ChartBackend, ChartConfig, ChartData, ChartHandle, ChartKind};
use crate::summary::format_count;

const BAR_WIDTH: usize = 32;
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Draws charts onto a [`Console`].
pub struct TextChartBackend {
    console: Console,
}

impl TextChartBackend {
    /// Creates a backend drawing onto `console`.
    #[must_use]
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl ChartBackend for TextChartBackend {
    fn create(
        &self,
        surface: &str,
        config: &ChartConfig,
        data: &ChartData,
    ) -> Result<Box<dyn ChartHandle>, Box<dyn Error + Send + Sync>> {
        if surface.trim().is_empty() {
            return Err("chart surface name is empty".into());
        }
        let mut chart = TextChart {
            surface: surface.to_string(),
            config: config.clone(),
            data: data.clone(),
            console: self.console.clone(),
        };
        chart.redraw();
        Ok(Box::new(chart))
    }
}

struct TextChart {
    surface: String,
    config: ChartConfig,
    data: ChartData,
    console: Console,
}

impl ChartHandle for TextChart {
    fn set_data(&mut self, data: &ChartData) {
        self.data = data.clone();
    }

    fn redraw(&mut self) {
        let kind = match self.config.kind {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        };
        self.console.line(&format!("┌ {} ({kind}, {})", self.surface, self.config.series_label));
        if self.config.show_legend {
            self.console.line(&format!("│ ■ {}", self.config.series_label));
        }
        for line in render_rows(&self.data) {
            self.console.line(&line);
        }
        if self.config.kind == ChartKind::Line && self.data.values.len() > 1 {
            let spark = sparkline(&self.data.values, self.config.begin_at_zero);
            self.console.line(&format!("└ {spark}"));
        }
    }

    fn destroy(self: Box<Self>) {}
}

/// One `label  bar value` row per data point, bars scaled to the largest value.
///
/// Bars always grow from zero; only the sparkline honours the axis setting.
fn render_rows(data: &ChartData) -> Vec<String> {
    if data.values.is_empty() {
        return vec!["│ (no data)".to_string()];
    }
    let width = data.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let floor = axis_floor(&data.values, true);
    let peak = data.values.iter().copied().fold(floor, f64::max);
    data.labels
        .iter()
        .zip(&data.values)
        .map(|(label, &value)| {
            let bar = "█".repeat(scaled(value - floor, peak - floor, BAR_WIDTH));
            format!("│ {label:<width$}  {bar} {}", format_value(value))
        })
        .collect()
}

/// Compact one-line rendering of a series.
fn sparkline(values: &[f64], begin_at_zero: bool) -> String {
    let floor = axis_floor(values, begin_at_zero);
    let peak = values.iter().copied().fold(floor, f64::max);
    values.iter().map(|&v| SPARKS[scaled(v - floor, peak - floor, SPARKS.len() - 1)]).collect()
}

fn axis_floor(values: &[f64], begin_at_zero: bool) -> f64 {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    if !min.is_finite() {
        0.0
    } else if begin_at_zero {
        min.min(0.0)
    } else {
        min
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scaled(value: f64, span: f64, steps: usize) -> usize {
    if span <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value / span) * steps as f64).round().clamp(0.0, steps as f64) as usize
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format_count(value)
    } else {
        format!("{value:.1}")
    }
}
