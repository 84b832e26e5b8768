use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::browser::TestingType;
use crate::commands;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "launchpad", version, about = "Pick a browser and launch a test session")]
pub struct Cli {
    /// Browser to preselect, by name (e.g. "chrome", "edge") or executable path
    #[arg(long, global = true, value_name = "NAME|PATH", env = "LAUNCHPAD_BROWSER")]
    pub browser: Option<String>,

    /// Emit machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a project and launch a browser test session
    Open {
        /// Project root (defaults to the current directory)
        path: Option<PathBuf>,

        /// Run in end-to-end testing mode
        #[arg(long, conflicts_with = "component")]
        e2e: bool,

        /// Run in component testing mode
        #[arg(long)]
        component: bool,
    },

    /// List browsers detected on this system
    Browsers,

    /// Scaffold an example integration spec into a project
    Scaffold {
        /// Project root (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration
    Show,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match &self.command {
            Commands::Open {
                path,
                e2e,
                component,
            } => {
                let mode = testing_type_from_flags(*e2e, *component);
                commands::open::run(&self, path.clone(), mode).await
            }
            Commands::Browsers => commands::browsers::run(&self).await,
            Commands::Scaffold { path } => commands::scaffold::run(&self, path.clone()).await,
            Commands::Config { command } => match command {
                ConfigCommands::Show => commands::config::show(&self).await,
            },
        }
    }
}

/// Map the mode flags to a testing type; `None` means no flag was given and
/// the project's saved preference (or the e2e default) applies.
fn testing_type_from_flags(e2e: bool, component: bool) -> Option<TestingType> {
    match (e2e, component) {
        (true, _) => Some(TestingType::E2e),
        (_, true) => Some(TestingType::Component),
        _ => None,
    }
}
