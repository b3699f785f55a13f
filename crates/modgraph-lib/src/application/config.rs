//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const MANIFEST: &str = "modules.toml";
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;
    use std::str::FromStr;

    pub fn manifest() -> PathBuf {
        PathBuf::from(defaults::MANIFEST)
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap()
    }

    pub fn log_format() -> LogFormat {
        LogFormat::from_str(defaults::LOG_FORMAT).unwrap()
    }

    pub fn log_output() -> LogOutput {
        LogOutput::from_str(defaults::LOG_OUTPUT).unwrap()
    }

    pub fn color() -> ColorMode {
        ColorMode::from_str(defaults::COLOR).unwrap()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Working directory the manifest is resolved against
    #[arg(short, long, env = "MODGRAPH_WORKDIR")]
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Module manifest file name or path
    #[arg(short, long, env = "MODGRAPH_MANIFEST", default_value = defaults::MANIFEST)]
    #[serde(default = "default_fns::manifest")]
    pub manifest: PathBuf,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "MODGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "MODGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "MODGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "MODGRAPH_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorMode,
}

impl AppConfig {
    /// Validate the configuration after all sources are merged
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(workdir) = &self.workdir {
            if !workdir.is_dir() {
                return Err(ConfigError::InvalidWorkDir {
                    path: workdir.display().to_string(),
                });
            }
        }

        if self.manifest.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "manifest path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// The working directory resolution happens against
    pub fn effective_workdir(&self) -> Result<PathBuf, ConfigError> {
        match &self.workdir {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Absolute-ish path of the module manifest
    pub fn manifest_path(&self) -> Result<PathBuf, ConfigError> {
        if self.manifest.is_absolute() {
            return Ok(self.manifest.clone());
        }
        Ok(self.effective_workdir()?.join(&self.manifest))
    }

    /// Logger configuration derived from this application config
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color,
        }
    }

    /// Overlay CLI-provided configuration (highest precedence)
    pub fn merge_with(mut self, cli: AppConfig) -> AppConfig {
        if cli.workdir.is_some() {
            self.workdir = cli.workdir;
        }
        self.manifest = cli.manifest;
        self.log_level = cli.log_level;
        self.log_format = cli.log_format;
        self.log_output = cli.log_output;
        self.color = cli.color;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            manifest: default_fns::manifest(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}
