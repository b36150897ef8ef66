//! Diagnostic sink forwarding to the `log` facade.

use crate::ports::diagnostics::{DiagnosticSink, Level};

/// Sends diagnostics to whichever `log` backend `main` installed.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Debug => log::debug!(target: "snapdash", "{message}"),
            Level::Info => log::info!(target: "snapdash", "{message}"),
            Level::Warn => log::warn!(target: "snapdash", "{message}"),
        }
    }
}
