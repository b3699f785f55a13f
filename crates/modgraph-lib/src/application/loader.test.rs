// Tests for configuration merging and validation

use super::*;
use crate::primitives::{ColorMode, LogFormat, LogLevel, LogOutput};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert!(config.workdir.is_none());
    assert_eq!(config.manifest.to_str(), Some("modules.toml"));
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorMode::Auto);
}

#[test]
fn test_merge_cli_overrides_scalars() {
    let base = AppConfig::default();
    let cli = AppConfig {
        workdir: None,
        manifest: PathBuf::from("other.toml"),
        log_level: 3,
        log_format: LogFormat::Json,
        log_output: LogOutput::Stdout,
        color: ColorMode::Never,
    };

    let merged = base.merge_with(cli);
    assert!(merged.workdir.is_none());
    assert_eq!(merged.manifest.to_str(), Some("other.toml"));
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.log_output, LogOutput::Stdout);
    assert_eq!(merged.color, ColorMode::Never);
}

#[test]
fn test_merge_keeps_existing_workdir_when_cli_has_none() {
    let temp_dir = TempDir::new().unwrap();
    let mut base = AppConfig::default();
    base.workdir = Some(temp_dir.path().to_path_buf());

    let merged = base.merge_with(AppConfig::default());
    assert_eq!(merged.workdir.as_deref(), Some(temp_dir.path()));
}

#[test]
fn test_validate_rejects_missing_workdir() {
    let mut config = AppConfig::default();
    config.workdir = Some(PathBuf::from("/definitely/not/a/real/directory"));

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWorkDir { .. }));
}

#[test]
fn test_validate_accepts_existing_workdir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.workdir = Some(temp_dir.path().to_path_buf());

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_manifest() {
    let mut config = AppConfig::default();
    config.manifest = PathBuf::new();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_manifest_path_joins_workdir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.workdir = Some(temp_dir.path().to_path_buf());

    let path = config.manifest_path().unwrap();
    assert_eq!(path, temp_dir.path().join("modules.toml"));
}

#[test]
fn test_absolute_manifest_path_ignores_workdir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.workdir = Some(temp_dir.path().to_path_buf());
    config.manifest = PathBuf::from("/somewhere/modules.toml");

    let path = config.manifest_path().unwrap();
    assert_eq!(path, PathBuf::from("/somewhere/modules.toml"));
}

#[test]
fn test_logger_config_derivation() {
    let mut config = AppConfig::default();
    config.log_level = 2;
    config.log_format = LogFormat::Json;

    let logger = config.logger_config();
    assert_eq!(logger.level, LogLevel::Info);
    assert_eq!(logger.format, LogFormat::Json);
    assert_eq!(logger.output, LogOutput::Stderr);
}
