//! Core library entry for the `snapdash` CLI.
//!
//! Resolves a repository to its published metric snapshots, derives the
//! trend series, and renders a summary plus charts through pluggable
//! front-end and chart ports.

pub mod adapters;
pub mod cassette;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod model;
pub mod ports;
pub mod store;
pub mod summary;
pub mod trend;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
