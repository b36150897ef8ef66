//! `snapdash show` command.

use std::io;

use super::{block_on, parse_repo};
use crate::adapters::live::{Console, TerminalUi, TextChartBackend};
use crate::context::ServiceContext;
use crate::dashboard::DashboardController;

/// Execute the `show` command.
///
/// Loads one repository through the dashboard pipeline and prints its
/// status, summary and charts. With `raw`, the latest snapshot is also
/// printed as JSON.
///
/// # Errors
///
/// Returns an error string if the identifier is malformed or the latest
/// snapshot cannot be loaded.
pub fn run(ctx: &ServiceContext, console: &Console, repo: &str, raw: bool) -> Result<(), String> {
    let repo = parse_repo(repo)?;
    let ui = TerminalUi::new(Box::new(io::empty()), console.clone(), raw);
    let controller = DashboardController::new(
        ctx.store(),
        Box::new(ui),
        Box::new(TextChartBackend::new(console.clone())),
    );
    block_on(controller.load(&repo))?.map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::live::Capture;
    use crate::adapters::memory::{MemorySink, MemorySource};

    const LATEST: &str = r#"{
        "generated_at": "2025-09-04T06:00:00Z",
        "files": {"java": 1, "kotlin": 3},
        "language": {"java_file_ratio": 0.25},
        "legacy": {"asyncTask_usages": 2}
    }"#;

    fn context(source: MemorySource) -> ServiceContext {
        ServiceContext::new(Arc::new(source), Arc::new(MemorySink::default()))
    }

    #[test]
    fn shows_summary_and_charts() {
        let ctx = context(MemorySource::new().with("data/acme/app/latest.json", LATEST));
        let capture = Capture::default();

        run(&ctx, &capture.console(), "acme/app", false).unwrap();

        let out = capture.contents();
        assert!(out.contains("» Loaded: acme/app / 2025-09-04T06:00:00Z"));
        assert!(out.contains("25.0%"));
        assert!(out.contains("┌ legacy-chart (bar, count)"));
        assert!(out.contains("┌ ratio-chart (line, %)"));
        assert!(out.contains("┌ legacy-trend-chart (line, count)"));
        assert!(!out.contains("\"generated_at\""));
    }

    #[test]
    fn raw_flag_prints_document() {
        let ctx = context(MemorySource::new().with("data/acme/app/latest.json", LATEST));
        let capture = Capture::default();
        run(&ctx, &capture.console(), "acme/app", true).unwrap();
        assert!(capture.contents().contains("\"generated_at\": \"2025-09-04T06:00:00Z\""));
    }

    #[test]
    fn missing_latest_is_an_error() {
        let ctx = context(MemorySource::new());
        let capture = Capture::default();
        let err = run(&ctx, &capture.console(), "acme/app", false).unwrap_err();
        assert_eq!(err, "latest snapshot not found for acme/app: data/acme/app/latest.json");
        assert!(capture.contents().contains("! latest.json not found: data/acme/app/latest.json"));
    }

    #[test]
    fn malformed_identifier_fetches_nothing() {
        let source = Arc::new(MemorySource::new());
        let ctx = ServiceContext::new(source.clone(), Arc::new(MemorySink::default()));
        assert!(run(&ctx, &Capture::default().console(), "acme", false).is_err());
        assert!(source.requests().is_empty());
    }
}
