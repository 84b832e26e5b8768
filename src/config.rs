//! Configuration loading and persistence.
//!
//! Settings come from the config file merged with `LAUNCHPAD_CONFIG_*`
//! environment variables. Per-project preferences (testing type, last
//! browser) are keyed by project root and re-applied on the next open.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::browser::TestingType;
use crate::error::{LaunchpadError, Result};

/// Browser-related settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Preferred browser executable; applied as a path selector when no
    /// `--browser` flag is given.
    pub executable: Option<String>,
}

/// Preferences remembered per project root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub testing_type: Option<TestingType>,
    pub last_browser: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Per-project preferences, keyed by project root.
    #[serde(default)]
    pub preferences: BTreeMap<String, Preferences>,
}

impl Config {
    /// Resolve the on-disk config file location.
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("launchpad").join("config.toml"))
            .ok_or_else(|| {
                LaunchpadError::ConfigError("could not resolve config directory".to_string())
            })
    }

    /// Load configuration from the config file and `LAUNCHPAD_CONFIG_*`
    /// environment variables, falling back to defaults.
    pub fn load() -> Result<Config> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Ok(path) = Self::path() {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("LAUNCHPAD_CONFIG_").split("__"))
            .extract()
            .map_err(|e| LaunchpadError::ConfigError(e.to_string()))
    }

    /// Persist the configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let rendered =
            toml::to_string_pretty(self).map_err(|e| LaunchpadError::ConfigError(e.to_string()))?;
        fs::write(path, rendered)?;
        Ok(())
    }

    /// Preferences recorded for a project root, if any.
    pub fn preferences(&self, project_root: &str) -> Option<&Preferences> {
        self.preferences.get(project_root)
    }

    /// Record preferences for a project root.
    pub fn set_preferences(&mut self, project_root: &str, preferences: Preferences) {
        self.preferences.insert(project_root.to_string(), preferences);
    }
}
