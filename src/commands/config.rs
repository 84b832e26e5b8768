use crate::cli::Cli;
use crate::config::Config;
use crate::error::{LaunchpadError, Result};

/// Print the resolved configuration.
pub async fn show(cli: &Cli) -> Result<()> {
    let config = Config::load()?;

    if cli.json {
        let rendered = serde_json::to_string_pretty(&config)
            .map_err(|e| LaunchpadError::Other(format!("failed to render config: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    let rendered =
        toml::to_string_pretty(&config).map_err(|e| LaunchpadError::ConfigError(e.to_string()))?;
    print!("{rendered}");
    Ok(())
}
