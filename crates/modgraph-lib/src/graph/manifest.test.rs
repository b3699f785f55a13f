// Tests for manifest parsing

use std::fs;
use tempfile::TempDir;

const BASIC_MANIFEST: &str = r#"
[modules.base-services]
description = "Foundational utilities"
published = true

[modules.logging]
dependencies = [
    { module = "base-services", scope = "api" },
]

[modules.core]
description = "Build orchestration core"
dependencies = [
    { module = "base-services", scope = "api" },
    { module = "logging", scope = "implementation", because = "structured output" },
]
"#;

#[test]
fn test_parse_basic_manifest() {
    let set = Manifest::parse(BASIC_MANIFEST).unwrap();

    assert_eq!(set.len(), 3);
    assert!(set.contains("base-services"));
    assert!(set.contains("logging"));
    assert!(set.contains("core"));

    let base = set.get("base-services").unwrap();
    assert!(base.published);
    assert_eq!(base.description.as_deref(), Some("Foundational utilities"));

    let core = set.get("core").unwrap();
    assert!(!core.published);
    assert_eq!(core.dependencies.len(), 2);
    assert_eq!(core.dependencies[0].target, "base-services");
    assert_eq!(core.dependencies[0].scope, Scope::Api);
    assert_eq!(
        core.dependencies[1].because.as_deref(),
        Some("structured output")
    );
}

#[test]
fn test_parse_fixtures_dependency() {
    let manifest = r#"
[modules.native]

[modules.core]
dependencies = [
    { module = "native", scope = "test-implementation", fixtures = true },
]
"#;

    let set = Manifest::parse(manifest).unwrap();
    let core = set.get("core").unwrap();
    assert!(core.dependencies[0].fixtures);
    assert_eq!(core.dependencies[0].scope, Scope::TestImplementation);
}

#[test]
fn test_parse_empty_manifest() {
    let set = Manifest::parse("").unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_unrecognized_scope_is_malformed_declaration() {
    let manifest = r#"
[modules.logging]

[modules.core]
dependencies = [
    { module = "logging", scope = "testCompile" },
]
"#;

    let err = Manifest::parse(manifest).unwrap_err();
    match err {
        ManifestError::Declaration(DeclarationError::MalformedDeclaration { module, reason }) => {
            assert_eq!(module, "core");
            assert!(reason.contains("testCompile"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_target_is_malformed_declaration() {
    let manifest = r#"
[modules.core]
dependencies = [
    { module = "ghost", scope = "implementation" },
]
"#;

    let err = Manifest::parse(manifest).unwrap_err();
    assert!(matches!(
        err,
        ManifestError::Declaration(DeclarationError::MalformedDeclaration { .. })
    ));
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let err = Manifest::parse("[modules.core\n").unwrap_err();
    assert!(matches!(err, ManifestError::Toml { .. }));
}

#[test]
fn test_unknown_manifest_key_is_rejected() {
    let manifest = r#"
[modules.core]
publish = true
"#;

    let err = Manifest::parse(manifest).unwrap_err();
    assert!(matches!(err, ManifestError::Toml { .. }));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(MANIFEST_FILENAME);
    fs::write(&path, BASIC_MANIFEST).unwrap();

    let set = Manifest::load(&path).unwrap();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_load_missing_file_reports_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let err = Manifest::load(&path).unwrap_err();
    match err {
        ManifestError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}
