use std::path::PathBuf;

use colored::Colorize;
use dialoguer::Select;

use crate::browser::{
    self, detect, BrowserSelector, BrowserSet, BrowserWarning, FoundBrowser, TestingType,
};
use crate::cli::Cli;
use crate::config::{Config, Preferences};
use crate::error::{LaunchpadError, Result};
use crate::project;

use super::resolve_project_root;
use super::theme::prompt_theme;

/// Open a project: detect browsers, honor the `--browser` selector and any
/// saved preferences, offer interactive re-selection, then launch.
pub async fn run(cli: &Cli, path: Option<PathBuf>, mode_flag: Option<TestingType>) -> Result<()> {
    let project_root = resolve_project_root(path)?;
    let root_key = project_root.display().to_string();
    let title = project::title_from_root(&project_root);

    let mut config = Config::load()?;
    let saved = config.preferences(&root_key).cloned().unwrap_or_default();

    let testing_type = mode_flag.or(saved.testing_type).unwrap_or(TestingType::E2e);

    let detected = detect::detect_browsers();
    if detected.is_empty() {
        return Err(LaunchpadError::BrowserError(
            "no supported browsers were detected on this system".to_string(),
        ));
    }
    let mut set = BrowserSet::new(detected);

    if let Some(raw) = cli.browser.as_deref() {
        let selector = BrowserSelector::parse(raw);
        if let Some(warning) = set.apply_selector(&selector, |p| detect::identify_at_path(p)) {
            print_warning(cli, &warning);
        }
    } else if let Some(preferred) = preferred_browser(&config, &saved) {
        // A stale preference silently falls back to the default selection.
        let selector = BrowserSelector::parse(&preferred);
        let _ = set.apply_selector(&selector, |p| detect::identify_at_path(p));
    }

    if !cli.json && console::user_attended() {
        offer_selection(&mut set)?;
    }

    let selected = set
        .selected()
        .cloned()
        .ok_or_else(|| LaunchpadError::BrowserError("no browser is selected".to_string()))?;
    let request = set.launch_request(testing_type)?;

    config.set_preferences(
        &root_key,
        Preferences {
            testing_type: Some(testing_type),
            last_browser: Some(selected.name.clone()),
        },
    );
    if let Err(e) = config.save() {
        tracing::warn!("failed to persist project preferences: {}", e);
    }

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "project": title,
                "browser": selected.name,
                "launch": request,
            })
        );
    } else {
        println!(
            "  {}  Launching {} ({})",
            "◆".cyan(),
            selected.display_name,
            testing_type
        );
    }

    let mut child = browser::launch(&request).await?;
    let status = child.wait().await?;
    tracing::debug!(code = ?status.code(), "browser exited");

    Ok(())
}

/// The browser to preselect when no `--browser` flag is given: the
/// project's last-used browser, else the configured executable.
fn preferred_browser(config: &Config, saved: &Preferences) -> Option<String> {
    saved
        .last_browser
        .clone()
        .or_else(|| config.browser.executable.clone())
}

fn offer_selection(set: &mut BrowserSet) -> Result<()> {
    let enabled: Vec<(String, String)> = set
        .browsers()
        .iter()
        .filter(|b| !b.disabled)
        .map(|b| (b.id.clone(), browser_label(b)))
        .collect();

    if enabled.len() <= 1 {
        return Ok(());
    }

    let default = enabled
        .iter()
        .position(|(id, _)| set.selected().is_some_and(|b| b.id == *id))
        .unwrap_or(0);
    let labels: Vec<&str> = enabled.iter().map(|(_, label)| label.as_str()).collect();

    let choice = Select::with_theme(&prompt_theme())
        .with_prompt(" Choose a browser")
        .items(&labels)
        .default(default)
        .report(false)
        .interact()
        .map_err(|e| LaunchpadError::Other(format!("prompt failed: {e}")))?;

    set.select(&enabled[choice].0)?;
    Ok(())
}

fn browser_label(browser: &FoundBrowser) -> String {
    match browser.major_version {
        Some(major) => format!("{} v{}.x", browser.display_name, major),
        None => browser.display_name.clone(),
    }
}

fn print_warning(cli: &Cli, warning: &BrowserWarning) {
    if cli.json {
        eprintln!(
            "{}",
            serde_json::json!({
                "warning": {
                    "title": warning.title,
                    "message": warning.message,
                    "helpLink": warning.help_link,
                }
            })
        );
        return;
    }

    eprintln!();
    eprintln!("  {}  {}", "■".yellow(), warning.title.yellow().bold());
    for line in warning.message.lines() {
        eprintln!("  {}  {}", "│".dimmed(), line);
    }
    eprintln!("  {}  {}", "│".dimmed(), warning.help_link.dimmed());
    eprintln!();
}
