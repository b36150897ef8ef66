//! Command dispatch and handlers.

pub mod repos;
pub mod show;
pub mod trend;
pub mod watch;

use std::future::Future;

use crate::adapters::live::Console;
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::DashboardError;
use crate::model::RepoId;

/// Dispatch a parsed command to its handler.
///
/// The data source comes from `--source` or `SNAPDASH_SOURCE`. When
/// `SNAPDASH_RECORD` names a file, every fetch is recorded into a cassette
/// written there once the command finishes.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let settings = Settings::resolve(cli.source.as_deref());
    let ctx = ServiceContext::live(&settings);
    log::debug!("reading documents from {}", ctx.source.describe());
    dispatch_with_context(&cli.command, &ctx, &Console::stdout())
}

/// Dispatch a command with the given service context and output console.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    console: &Console,
) -> Result<(), String> {
    match command {
        Command::Repos => repos::run(ctx, console),
        Command::Show { repo, raw } => show::run(ctx, console, repo, *raw),
        Command::Trend { repo, format } => trend::run(ctx, console, repo, *format),
        Command::Watch { raw } => watch::run(ctx, console, *raw),
    }
}

/// Drives `future` to completion on a single-threaded runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    Ok(runtime.block_on(future))
}

fn parse_repo(input: &str) -> Result<RepoId, String> {
    input.trim().parse::<RepoId>().map_err(|e| DashboardError::from(e).to_string())
}
