use std::path::PathBuf;

use colored::Colorize;

use crate::cli::Cli;
use crate::error::{LaunchpadError, Result};
use crate::scaffold::{self, ScaffoldStatus};

use super::resolve_project_root;

/// Write the example integration spec into the project.
pub async fn run(cli: &Cli, path: Option<PathBuf>) -> Result<()> {
    let project_root = resolve_project_root(path)?;
    let files = scaffold::scaffold_integration(&project_root)?;

    if cli.json {
        let rendered = serde_json::to_string_pretty(&files)
            .map_err(|e| LaunchpadError::Other(format!("failed to render scaffold result: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    for file in &files {
        let marker = match file.status {
            ScaffoldStatus::Valid => "✓".green(),
            ScaffoldStatus::Skipped => "◇".dimmed(),
            ScaffoldStatus::Error => "✗".red(),
        };
        println!("  {}  {}", marker, file.file.relative);
    }

    Ok(())
}
