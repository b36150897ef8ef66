//! Dashboard controller: selection, loading, and both render paths.
//!
//! The controller owns the chart state and talks to the front-end only
//! through [`DashboardUi`]. Loads may overlap when driven concurrently; a
//! sequence number makes the most recently issued load the only one that
//! renders.

use std::cell::{Cell, RefCell};

use crate::chart::ChartManager;
use crate::error::DashboardError;
use crate::history::{HistoryResolver, ResolvedHistory};
use crate::model::RepoId;
use crate::ports::chart::{ChartBackend, ChartConfig, ChartData};
use crate::ports::ui::DashboardUi;
use crate::store::{RegistryLoader, SnapshotStore};
use crate::summary::{self, LEGACY_LABELS};
use crate::trend;

/// Surface of the legacy/support bar chart for the latest snapshot.
pub const LEGACY_CHART: &str = "legacy-chart";
/// Surface of the Java ratio trend.
pub const RATIO_CHART: &str = "ratio-chart";
/// Surface of the legacy total trend.
pub const LEGACY_TREND_CHART: &str = "legacy-trend-chart";

/// Result of a load that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The repository was rendered.
    Rendered {
        /// Repository shown.
        repo: RepoId,
        /// Trend points drawn.
        points: usize,
        /// History documents that could not be fetched.
        skipped: usize,
    },
    /// A newer load was issued while this one was in flight; nothing was rendered.
    Stale,
}

/// Orchestrates the registry, history resolution and rendering.
pub struct DashboardController {
    ui: Box<dyn DashboardUi>,
    registry: RegistryLoader,
    resolver: HistoryResolver,
    store: SnapshotStore,
    charts: RefCell<ChartManager>,
    issued: Cell<u64>,
}

impl DashboardController {
    /// Wires a controller to its front-end and chart backend.
    #[must_use]
    pub fn new(
        store: SnapshotStore,
        ui: Box<dyn DashboardUi>,
        charts: Box<dyn ChartBackend>,
    ) -> Self {
        Self {
            ui,
            registry: RegistryLoader::new(store.clone()),
            resolver: HistoryResolver::new(store.clone()),
            store,
            charts: RefCell::new(ChartManager::new(charts)),
            issued: Cell::new(0),
        }
    }

    /// Populates the picker and, when a registry exists, loads its first entry.
    ///
    /// Without a registry the UI switches to free-text entry and nothing is
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns the error of the automatic first load, if it fails.
    pub async fn start(&self) -> Result<Option<LoadOutcome>, DashboardError> {
        let repos = self.registry.load().await;
        let Some(first) = repos.first().cloned() else {
            self.store.diagnostics().info(&DashboardError::RegistryUnavailable.to_string());
            self.ui.show_manual_entry();
            return Ok(None);
        };
        self.ui.show_selector(&repos);
        self.load(&first).await.map(Some)
    }

    /// Serves load requests until the front-end closes.
    ///
    /// Failures are already reported through the UI, so they do not end
    /// the loop.
    pub async fn run(&self) {
        while self.ui.wait_for_load_request() {
            if let Err(e) = self.request_load().await {
                self.store.diagnostics().debug(&format!("load request failed: {e}"));
            }
        }
    }

    /// Loads whatever the picker currently holds.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidIdentifier`] without fetching
    /// anything if the input is not `org/repo`, or the load's error.
    pub async fn request_load(&self) -> Result<LoadOutcome, DashboardError> {
        let state = self.ui.selector_state();
        let repo = match state.value().trim().parse::<RepoId>() {
            Ok(repo) => repo,
            Err(e) => {
                let err = DashboardError::from(e);
                self.ui.alert(&err.to_string());
                return Err(err);
            }
        };
        self.load(&repo).await
    }

    /// Resolves and renders one repository.
    ///
    /// Nothing is rendered until resolution succeeds, so a failed load
    /// leaves the previous summary and charts in place.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::LatestSnapshotUnavailable`] when the
    /// repository has no readable `latest.json`.
    pub async fn load(&self, repo: &RepoId) -> Result<LoadOutcome, DashboardError> {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        self.ui.set_status(&format!("Loading… {repo}"));

        let resolved = self.resolver.resolve(repo).await;

        if ticket != self.issued.get() {
            self.store.diagnostics().debug(&format!("{repo}: discarding superseded load"));
            return Ok(LoadOutcome::Stale);
        }

        match resolved {
            Ok(history) => Ok(self.render(repo, &history)),
            Err(err) => {
                if let DashboardError::LatestSnapshotUnavailable { path, .. } = &err {
                    self.ui.set_status(&format!("Failed to load: {repo} ({path})"));
                    self.ui.alert(&format!("latest.json not found: {path}"));
                }
                Err(err)
            }
        }
    }

    /// Number of live chart instances.
    #[must_use]
    pub fn live_charts(&self) -> usize {
        self.charts.borrow().live_count()
    }

    fn render(&self, repo: &RepoId, history: &ResolvedHistory) -> LoadOutcome {
        let latest = &history.latest;
        self.ui.render_summary(&summary::project(latest));
        self.ui.render_raw_document(&latest.to_pretty_json());

        let points = trend::aggregate(&history.series);
        let labels = trend::labels(&points);
        let legacy = ChartData::new(
            LEGACY_LABELS.iter().map(ToString::to_string).collect(),
            summary::legacy_vector(latest).to_vec(),
        );
        let ratio = ChartData::new(labels.clone(), trend::ratio_series(&points));
        let legacy_trend = ChartData::new(labels, trend::legacy_series(&points));

        self.draw(LEGACY_CHART, &ChartConfig::bar("count"), &legacy);
        self.draw(RATIO_CHART, &ChartConfig::line("%"), &ratio);
        self.draw(LEGACY_TREND_CHART, &ChartConfig::line("count"), &legacy_trend);

        let mut status =
            format!("Loaded: {repo} / {}", latest.generated_at().unwrap_or(trend::MISSING_LABEL));
        if history.skipped > 0 {
            status.push_str(&format!(" ({} history entries skipped)", history.skipped));
        }
        self.ui.set_status(&status);

        LoadOutcome::Rendered { repo: repo.clone(), points: points.len(), skipped: history.skipped }
    }

    fn draw(&self, id: &str, config: &ChartConfig, data: &ChartData) {
        let outcome = self.charts.borrow_mut().render(id, config, data);
        match outcome {
            Ok(outcome) => self.store.diagnostics().debug(&format!("{id}: {outcome:?}")),
            Err(e) => self.store.diagnostics().warn(&format!("{id}: cannot draw chart: {e}")),
        }
    }
}
