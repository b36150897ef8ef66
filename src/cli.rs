//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `snapdash`.
#[derive(Debug, Parser)]
#[command(name = "snapdash", version, about = "Browse code-metric snapshots and their trends")]
pub struct Cli {
    /// Data source: a directory containing `data/`, or the site's base URL.
    #[arg(long, global = true)]
    pub source: Option<String>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the repositories in the registry.
    Repos,
    /// Show the summary and charts for one repository.
    Show {
        /// Repository as org/repo.
        repo: String,
        /// Also print the raw latest.json document.
        #[arg(long)]
        raw: bool,
    },
    /// Print the trend points for one repository.
    Trend {
        /// Repository as org/repo.
        repo: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Interactive dashboard: pick repositories and reload them.
    Watch {
        /// Also print the raw latest.json document on each load.
        #[arg(long)]
        raw: bool,
    },
}

/// Output format for tabular commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns.
    Table,
    /// Pretty-printed JSON.
    Json,
}
