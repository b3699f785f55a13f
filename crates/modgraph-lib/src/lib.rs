//! # modgraph Library
//!
//! Module dependency graph resolution for multi-module builds.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, scopes, errors, and shared coordination
//! - [`graph`] - Declarations, scope resolution, graph assembly, build ordering
//! - [`logger`] - Structured logging configuration
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! // Initialize and run modgraph
//! modgraph_lib::main().unwrap();
//! ```

pub mod application;
pub mod graph;
pub mod logger;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::{
    DeclarationSet, GraphError, Manifest, ManifestError, ModuleGraph, Scope, ScopeResolver,
};
pub use logger::Logger;
pub use primitives::{ColorMode, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Bring up logging before any command work happens
    match Logger::init(config.app_config.logger_config()) {
        Ok(_) | Err(LoggerError::AlreadyInitialized) => {}
        Err(e) => return Err(e.into()),
    }

    // Execute the command
    execute_command(config)
}
