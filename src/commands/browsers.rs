use colored::Colorize;

use crate::browser::{detect, BrowserSet};
use crate::cli::Cli;
use crate::error::{LaunchpadError, Result};

/// List detected browsers with their relevant properties.
pub async fn run(cli: &Cli) -> Result<()> {
    let set = BrowserSet::new(detect::detect_browsers());

    if cli.json {
        let rendered = serde_json::to_string_pretty(set.browsers())
            .map_err(|e| LaunchpadError::Other(format!("failed to render browser list: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    if set.is_empty() {
        println!("  {}  No supported browsers detected.", "■".yellow());
        println!(
            "  {}  Consider installing Chrome, Edge, or Firefox.",
            "│".dimmed()
        );
        return Ok(());
    }

    for browser in set.browsers() {
        let marker = if browser.is_selected {
            "◆".cyan()
        } else {
            "◇".dimmed()
        };
        let version = if browser.version.is_empty() {
            String::new()
        } else {
            format!(" v{}", browser.version)
        };
        let state = if browser.disabled {
            " (unsupported)".yellow().to_string()
        } else {
            String::new()
        };

        println!(
            "  {}  {}{}{}  {}",
            marker,
            browser.display_name,
            version,
            state,
            browser.path.display().to_string().dimmed()
        );
    }

    Ok(())
}
