//! `snapdash trend` command.

use super::{block_on, parse_repo};
use crate::adapters::live::Console;
use crate::cli::OutputFormat;
use crate::context::ServiceContext;
use crate::history::HistoryResolver;
use crate::summary::format_count;
use crate::trend::{self, TrendPoint};

/// Execute the `trend` command.
///
/// Prints the chronological trend points of one repository, either as a
/// table or as a JSON array.
///
/// # Errors
///
/// Returns an error string if the identifier is malformed or the latest
/// snapshot cannot be loaded.
pub fn run(
    ctx: &ServiceContext,
    console: &Console,
    repo: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let repo = parse_repo(repo)?;
    let history =
        block_on(HistoryResolver::new(ctx.store()).resolve(&repo))?.map_err(|e| e.to_string())?;
    let points = trend::aggregate(&history.series);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&points)
                .map_err(|e| format!("failed to encode trend: {e}"))?;
            console.line(&json);
        }
        OutputFormat::Table => print_table(console, &points, history.skipped),
    }
    Ok(())
}

fn print_table(console: &Console, points: &[TrendPoint], skipped: usize) {
    let rows: Vec<(&str, String, String)> = points
        .iter()
        .map(|p| {
            (p.label.as_str(), format!("{:.1}", p.java_ratio_percent), format_count(p.legacy_total))
        })
        .collect();

    let label_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(12).max(12);
    let ratio_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(6).max(6);
    let legacy_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(6).max(6);

    console.line(&format!(
        "{:<label_width$}  {:>ratio_width$}  {:>legacy_width$}",
        "GENERATED_AT", "JAVA %", "LEGACY",
    ));
    console.line(&format!("{:-<label_width$}  {:->ratio_width$}  {:->legacy_width$}", "", "", ""));
    for (label, ratio, legacy) in &rows {
        console.line(&format!(
            "{label:<label_width$}  {ratio:>ratio_width$}  {legacy:>legacy_width$}"
        ));
    }

    console.line(&format!("\n{} point(s) total.", rows.len()));
    if skipped > 0 {
        console.line(&format!("{skipped} history entries skipped."));
    }
}
