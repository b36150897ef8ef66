//! `snapdash repos` command.

use super::block_on;
use crate::adapters::live::Console;
use crate::context::ServiceContext;
use crate::store::RegistryLoader;

/// Execute the `repos` command.
///
/// Prints the registry as an `ORG  REPO` table, in registry order.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot be started.
pub fn run(ctx: &ServiceContext, console: &Console) -> Result<(), String> {
    let repos = block_on(RegistryLoader::new(ctx.store()).load())?;
    if repos.is_empty() {
        console.line(&format!("No repository registry found in {}.", ctx.source.describe()));
        return Ok(());
    }

    let org_width = repos.iter().map(|r| r.org().len()).max().unwrap_or(3).max(3);
    let repo_width = repos.iter().map(|r| r.repo().len()).max().unwrap_or(4).max(4);

    console.line(&format!("{:<org_width$}  {:<repo_width$}", "ORG", "REPO"));
    console.line(&format!("{:-<org_width$}  {:-<repo_width$}", "", ""));
    for repo in &repos {
        console.line(&format!("{:<org_width$}  {:<repo_width$}", repo.org(), repo.repo()));
    }

    console.line(&format!("\n{} repo(s) total.", repos.len()));
    Ok(())
}
