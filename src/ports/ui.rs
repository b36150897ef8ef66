//! Dashboard UI port.
//!
//! Everything the controller shows or reads goes through this trait; the
//! concrete front-end owns its widgets.

use crate::model::RepoId;
use crate::summary::SummaryRecord;

/// What the repository picker currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    /// A registry entry chosen from the selector.
    Selected(String),
    /// Free text typed into the manual entry field.
    Manual(String),
}

impl SelectorState {
    /// The chosen or typed value, untrimmed.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Selected(value) | Self::Manual(value) => value,
        }
    }
}

/// The capabilities the dashboard needs from its front-end.
pub trait DashboardUi {
    /// Shows the repository selector populated with `repos`.
    fn show_selector(&self, repos: &[RepoId]);

    /// Hides the selector and shows free-text `org/repo` entry.
    fn show_manual_entry(&self);

    /// Reads the current picker value.
    fn selector_state(&self) -> SelectorState;

    /// Blocks until the user asks for a load.
    ///
    /// Returns `false` once the user has closed the dashboard.
    fn wait_for_load_request(&self) -> bool;

    /// Replaces the status line.
    fn set_status(&self, text: &str);

    /// Replaces the summary card list.
    fn render_summary(&self, records: &[SummaryRecord]);

    /// Replaces the raw document viewer contents.
    fn render_raw_document(&self, json: &str);

    /// Shows a blocking message the user must acknowledge.
    fn alert(&self, message: &str);
}
