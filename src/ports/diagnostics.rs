//! Diagnostic sink port for pipeline observations.

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Fine-grained pipeline tracing.
    Debug,
    /// Normal progress.
    Info,
    /// Degraded but recoverable conditions.
    Warn,
}

/// Receives diagnostics from the loading pipeline.
///
/// The core never prints; it reports here and the injected sink decides
/// where messages go.
pub trait DiagnosticSink: Send + Sync {
    /// Records one message.
    fn emit(&self, level: Level, message: &str);

    /// Shorthand for [`Level::Debug`].
    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    /// Shorthand for [`Level::Info`].
    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Shorthand for [`Level::Warn`].
    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }
}
