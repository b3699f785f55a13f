// Tests for command handlers against real manifest files

use std::fs;
use tempfile::TempDir;

const SAMPLE_MANIFEST: &str = r#"
[modules.base-services]
description = "Foundational utilities"
published = true

[modules.logging]
published = true
dependencies = [
    { module = "base-services", scope = "api" },
]

[modules.core]
dependencies = [
    { module = "base-services", scope = "api" },
    { module = "logging", scope = "implementation" },
]
"#;

const CYCLIC_MANIFEST: &str = r#"
[modules.a]
dependencies = [{ module = "b", scope = "implementation" }]

[modules.b]
dependencies = [{ module = "a", scope = "implementation" }]
"#;

fn config_for(manifest: &str) -> (TempDir, AppConfig) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("modules.toml"), manifest).unwrap();

    let mut config = AppConfig::default();
    config.workdir = Some(temp_dir.path().to_path_buf());
    (temp_dir, config)
}

#[test]
fn test_version_needs_no_manifest() {
    assert!(handle_version().is_ok());
}

#[test]
fn test_order_succeeds_on_acyclic_manifest() {
    let (_dir, config) = config_for(SAMPLE_MANIFEST);
    assert!(handle_order(&config, false).is_ok());
    assert!(handle_order(&config, true).is_ok());
}

#[test]
fn test_order_fails_on_cycle() {
    let (_dir, config) = config_for(CYCLIC_MANIFEST);
    let err = handle_order(&config, false).unwrap_err();
    assert!(err.to_string().contains("Cyclic dependency"));
}

#[test]
fn test_order_fails_without_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.workdir = Some(temp_dir.path().to_path_buf());

    let err = handle_order(&config, false).unwrap_err();
    assert!(err.to_string().contains("failed to load module manifest"));
}

#[test]
fn test_resolve_known_module() {
    let (_dir, config) = config_for(SAMPLE_MANIFEST);
    assert!(handle_resolve(&config, "core", false, false).is_ok());
    assert!(handle_resolve(&config, "core", true, true).is_ok());
}

#[test]
fn test_resolve_unknown_module_fails() {
    let (_dir, config) = config_for(SAMPLE_MANIFEST);
    let err = handle_resolve(&config, "ghost", false, false).unwrap_err();
    assert!(err.to_string().contains("unknown module 'ghost'"));
}

#[test]
fn test_check_passes_clean_manifest() {
    let (_dir, config) = config_for(SAMPLE_MANIFEST);
    assert!(handle_check(&config).is_ok());
}

#[test]
fn test_check_reports_cycle() {
    let (_dir, config) = config_for(CYCLIC_MANIFEST);
    let err = handle_check(&config).unwrap_err();
    assert!(err.to_string().contains("problem(s) found"));
}

#[test]
fn test_check_reports_publication_leak() {
    let leaky = r#"
[modules.internal]

[modules.pub-lib]
published = true
dependencies = [{ module = "internal", scope = "api" }]
"#;
    let (_dir, config) = config_for(leaky);
    let err = handle_check(&config).unwrap_err();
    assert!(err.to_string().contains("problem(s) found"));
}

#[test]
fn test_modules_listing() {
    let (_dir, config) = config_for(SAMPLE_MANIFEST);
    assert!(handle_modules(&config, false).is_ok());
    assert!(handle_modules(&config, true).is_ok());
}

#[test]
fn test_execute_dispatches() {
    let (_dir, config) = config_for(SAMPLE_MANIFEST);
    assert!(execute(&config, Commands::Version).is_ok());
    assert!(execute(&config, Commands::Order { json: true }).is_ok());
    assert!(execute(&config, Commands::Check).is_ok());
}

#[test]
fn test_malformed_manifest_surfaces_context() {
    let malformed = r#"
[modules.core]
dependencies = [{ module = "ghost", scope = "implementation" }]
"#;
    let (_dir, config) = config_for(malformed);
    let err = handle_check(&config).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("failed to load module manifest"));
    assert!(chain.contains("ghost"));
}
