use crate::primitives::*;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Logger implementation using tracing with configurable format and output
#[derive(Debug)]
pub struct Logger {
    _guard: (),
}

/// Build the default env-filter directive for a log level.
/// `RUST_LOG` still takes precedence when set.
fn env_filter_directive(level: LogLevel) -> String {
    let level_str = match level {
        LogLevel::Error => "error",
        LogLevel::Warning => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    format!("modgraph={level_str},{level_str}")
}

/// Resolve the color intent against the selected output stream
fn ansi_enabled(color: ColorMode, output: LogOutput) -> bool {
    match color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => match output {
            LogOutput::Stderr => console::colors_enabled_stderr(),
            LogOutput::Stdout => console::colors_enabled(),
        },
    }
}

impl Logger {
    /// Initialize the global logger with the application's configuration
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(env_filter_directive(config.level)));

        let ansi = ansi_enabled(config.color, config.output);

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Pretty) => fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        let logger = Logger { _guard: () };

        GLOBAL_LOGGER
            .set(logger)
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            "Logger initialized"
        );

        Ok(GLOBAL_LOGGER.get().ok_or(LoggerError::InitializationFailed {
            reason: "logger vanished after initialization".to_string(),
        })?)
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    // Convenience methods for structured logging
    // These delegate to tracing macros for consistency

    /// Log an error message with optional context
    pub fn error(&self, message: &str, context: Option<LogContext>) {
        if let Some(ctx) = context {
            tracing::error!(operation = %ctx.operation, module = ctx.module.as_deref(), "{}", message);
        } else {
            tracing::error!("{}", message);
        }
    }

    /// Log a warning message with optional context
    pub fn warn(&self, message: &str, context: Option<LogContext>) {
        if let Some(ctx) = context {
            tracing::warn!(operation = %ctx.operation, module = ctx.module.as_deref(), "{}", message);
        } else {
            tracing::warn!("{}", message);
        }
    }

    /// Log an info message with optional context
    pub fn info(&self, message: &str, context: Option<LogContext>) {
        if let Some(ctx) = context {
            tracing::info!(operation = %ctx.operation, module = ctx.module.as_deref(), "{}", message);
        } else {
            tracing::info!("{}", message);
        }
    }

    /// Log a debug message with optional context
    pub fn debug(&self, message: &str, context: Option<LogContext>) {
        if let Some(ctx) = context {
            tracing::debug!(operation = %ctx.operation, module = ctx.module.as_deref(), "{}", message);
        } else {
            tracing::debug!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
