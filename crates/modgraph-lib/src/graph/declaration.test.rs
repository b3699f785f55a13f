// Tests for declaration validation

fn module(name: &str) -> ModuleDeclaration {
    ModuleDeclaration::new(name)
}

#[test]
fn test_empty_set() {
    let set = DeclarationSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.validate().is_ok());
}

#[test]
fn test_insert_and_lookup() {
    let mut set = DeclarationSet::new();
    set.insert(module("core").with_description("Build orchestration core"))
        .unwrap();

    assert!(set.contains("core"));
    assert_eq!(set.len(), 1);
    assert_eq!(
        set.get("core").unwrap().description.as_deref(),
        Some("Build orchestration core")
    );
}

#[test]
fn test_duplicate_module_rejected() {
    let mut set = DeclarationSet::new();
    set.insert(module("core")).unwrap();

    let err = set.insert(module("core")).unwrap_err();
    assert!(matches!(err, DeclarationError::DuplicateModule { module } if module == "core"));
}

#[test]
fn test_names_are_sorted() {
    let mut set = DeclarationSet::new();
    set.insert(module("logging")).unwrap();
    set.insert(module("base-services")).unwrap();
    set.insert(module("core")).unwrap();

    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["base-services", "core", "logging"]);
}

#[test]
fn test_validate_accepts_known_targets() {
    let mut set = DeclarationSet::new();
    set.insert(module("base-services")).unwrap();
    set.insert(
        module("core")
            .depends_on(DependencyDeclaration::new("base-services", Scope::Api))
            .depends_on(
                DependencyDeclaration::new("base-services", Scope::TestImplementation)
                    .on_fixtures(),
            ),
    )
    .unwrap();

    assert!(set.validate().is_ok());
}

#[test]
fn test_validate_rejects_unknown_target() {
    let mut set = DeclarationSet::new();
    set.insert(module("core").depends_on(DependencyDeclaration::new(
        "nonexistent",
        Scope::Implementation,
    )))
    .unwrap();

    let err = set.validate().unwrap_err();
    match err {
        DeclarationError::MalformedDeclaration { module, reason } => {
            assert_eq!(module, "core");
            assert!(reason.contains("nonexistent"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validate_rejects_self_edge() {
    let mut set = DeclarationSet::new();
    set.insert(module("core").depends_on(DependencyDeclaration::new("core", Scope::Api)))
        .unwrap();

    let err = set.validate().unwrap_err();
    assert!(matches!(
        err,
        DeclarationError::MalformedDeclaration { .. }
    ));
    assert!(err.to_string().contains("itself"));
}

#[test]
fn test_validate_rejects_duplicate_triple() {
    let mut set = DeclarationSet::new();
    set.insert(module("logging")).unwrap();
    set.insert(
        module("core")
            .depends_on(DependencyDeclaration::new("logging", Scope::Implementation))
            .depends_on(
                DependencyDeclaration::new("logging", Scope::Implementation)
                    .because("declared twice by mistake"),
            ),
    )
    .unwrap();

    let err = set.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate dependency"));
}

#[test]
fn test_same_target_different_scope_is_allowed() {
    let mut set = DeclarationSet::new();
    set.insert(module("logging")).unwrap();
    set.insert(
        module("core")
            .depends_on(DependencyDeclaration::new("logging", Scope::Implementation))
            .depends_on(DependencyDeclaration::new(
                "logging",
                Scope::TestImplementation,
            )),
    )
    .unwrap();

    assert!(set.validate().is_ok());
}

#[test]
fn test_validate_rejects_fixtures_outside_test_scopes() {
    let mut set = DeclarationSet::new();
    set.insert(module("native")).unwrap();
    set.insert(
        module("core")
            .depends_on(DependencyDeclaration::new("native", Scope::Implementation).on_fixtures()),
    )
    .unwrap();

    let err = set.validate().unwrap_err();
    assert!(err.to_string().contains("requires a test scope"));
}
