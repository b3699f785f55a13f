use crate::application::env::EnvironmentConfig;
use crate::primitives::{ColorMode, ConfigError};
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// modgraph CLI - module dependency graph resolution
#[derive(Debug, Clone, Parser)]
#[command(name = "modgraph")]
#[command(about = "Resolve multi-module dependency declarations into a build order")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// modgraph commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments.
    ///
    /// `.env` files are loaded first so clap's env fallback sees them, then
    /// color conventions (NO_COLOR and friends) are applied on top.
    pub fn load() -> Result<Self, ConfigError> {
        AppConfig::load_env_files()?;

        let cli = Cli::parse();

        let mut app_config = cli.config;
        // Standard color conventions apply only when nothing pinned the mode
        if app_config.color == ColorMode::Auto {
            let env_config = EnvironmentConfig::load()?;
            app_config.color = env_config.apply_color_config(app_config.color);
        }
        app_config.validate()?;

        Ok(Self {
            app_config,
            command: cli.command,
        })
    }
}

/// Available modgraph commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show version information
    Version,

    /// List declared modules with descriptions and publication flags
    Modules {
        /// Emit the listing as JSON
        #[arg(long, help = "Emit the module listing as JSON")]
        json: bool,
    },

    /// Compute the full build order
    Order {
        /// Emit the order as JSON
        #[arg(long, help = "Emit the build order as a JSON array")]
        json: bool,
    },

    /// Show the effective dependency set of a module
    Resolve {
        /// Module to resolve
        #[arg(help = "Name of the module to resolve")]
        module: String,

        /// Include test-scoped dependencies
        #[arg(long, help = "Resolve the test view instead of the production view")]
        test: bool,

        /// Emit the set as JSON
        #[arg(long, help = "Emit the effective dependency set as JSON")]
        json: bool,
    },

    /// Validate the manifest: malformed declarations, cycles, publication leaks
    Check,
}

impl Commands {
    /// Check if command needs a module manifest to operate on
    pub fn requires_manifest(&self) -> bool {
        match self {
            Commands::Version => false,
            Commands::Modules { .. } => true,
            Commands::Order { .. } => true,
            Commands::Resolve { .. } => true,
            Commands::Check => true,
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    include!("cli.test.rs");
}
