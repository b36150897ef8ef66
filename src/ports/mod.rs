//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the dashboard core and an
//! external system (document hosting, diagnostics output, the front-end,
//! the charting library). Implementations live in `src/adapters/`.

pub mod chart;
pub mod diagnostics;
pub mod source;
pub mod ui;

pub use chart::{ChartBackend, ChartConfig, ChartData, ChartHandle, ChartKind};
pub use diagnostics::{DiagnosticSink, Level};
pub use source::{DocumentSource, FetchFuture};
pub use ui::{DashboardUi, SelectorState};
