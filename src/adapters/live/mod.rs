//! Live adapters for real external interactions.

pub mod console;
pub mod directory;
pub mod http;
pub mod log_sink;
pub mod terminal;
pub mod text_chart;

pub use console::{Capture, Console};
pub use directory::DirectorySource;
pub use http::HttpSource;
pub use log_sink::LogSink;
pub use terminal::TerminalUi;
pub use text_chart::TextChartBackend;
