//! Chart lifecycle management.
//!
//! Each chart identifier is either absent or bound to exactly one live
//! handle. Rendering an identifier that is already present swaps the data
//! on the existing handle; a second instance is never constructed on the
//! same surface.

use std::collections::BTreeMap;
use std::error::Error;

use crate::ports::chart::{ChartBackend, ChartConfig, ChartData, ChartHandle, ChartKind};

/// What a call to [`ChartManager::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No chart existed for the identifier; one was constructed.
    Created,
    /// The existing chart was updated in place.
    Updated,
    /// The existing chart had a different kind and was rebuilt.
    Replaced,
}

struct ManagedChart {
    kind: ChartKind,
    handle: Box<dyn ChartHandle>,
}

/// Owns every live chart handle, keyed by chart identifier.
pub struct ChartManager {
    backend: Box<dyn ChartBackend>,
    charts: BTreeMap<String, ManagedChart>,
}

impl ChartManager {
    /// Creates a manager with no live charts.
    #[must_use]
    pub fn new(backend: Box<dyn ChartBackend>) -> Self {
        Self { backend, charts: BTreeMap::new() }
    }

    /// Creates or updates the chart bound to `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot construct a chart on the
    /// surface. The identifier is then left absent.
    pub fn render(
        &mut self,
        id: &str,
        config: &ChartConfig,
        data: &ChartData,
    ) -> Result<RenderOutcome, Box<dyn Error + Send + Sync>> {
        if let Some(chart) = self.charts.get_mut(id).filter(|chart| chart.kind == config.kind) {
            chart.handle.set_data(data);
            chart.handle.redraw();
            return Ok(RenderOutcome::Updated);
        }

        let replaced = match self.charts.remove(id) {
            Some(stale) => {
                stale.handle.destroy();
                true
            }
            None => false,
        };

        let handle = self.backend.create(id, config, data)?;
        self.charts.insert(id.to_string(), ManagedChart { kind: config.kind, handle });
        Ok(if replaced { RenderOutcome::Replaced } else { RenderOutcome::Created })
    }

    /// Whether `id` currently has a live chart.
    #[must_use]
    pub fn is_present(&self, id: &str) -> bool {
        self.charts.contains_key(id)
    }

    /// Number of live charts.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.charts.len()
    }

    /// Destroys every live chart.
    pub fn clear(&mut self) {
        for (_, chart) in std::mem::take(&mut self.charts) {
            chart.handle.destroy();
        }
    }
}

impl Drop for ChartManager {
    fn drop(&mut self) {
        self.clear();
    }
}
