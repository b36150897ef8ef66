//! `snapdash watch` command.

use super::block_on;
use crate::adapters::live::{Console, TerminalUi, TextChartBackend};
use crate::context::ServiceContext;
use crate::dashboard::DashboardController;
use crate::ports::ui::DashboardUi;

/// Execute the `watch` command.
///
/// Starts the interactive dashboard on stdin: the first registry entry is
/// loaded automatically, then each entered line triggers a load.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot be started.
pub fn run(ctx: &ServiceContext, console: &Console, raw: bool) -> Result<(), String> {
    run_with_ui(ctx, console, Box::new(TerminalUi::stdio(console.clone(), raw)))
}

/// Runs the dashboard loop against an arbitrary front-end.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot be started.
pub fn run_with_ui(
    ctx: &ServiceContext,
    console: &Console,
    ui: Box<dyn DashboardUi>,
) -> Result<(), String> {
    let controller = DashboardController::new(
        ctx.store(),
        ui,
        Box::new(TextChartBackend::new(console.clone())),
    );
    block_on(async {
        if let Err(e) = controller.start().await {
            log::debug!("initial load failed: {e}");
        }
        controller.run().await;
    })
}
