// Tests for scope primitives

#[test]
fn test_parse_known_scopes() {
    assert_eq!(Scope::parse("api").unwrap(), Scope::Api);
    assert_eq!(Scope::parse("implementation").unwrap(), Scope::Implementation);
    assert_eq!(Scope::parse("compile-only").unwrap(), Scope::CompileOnly);
    assert_eq!(
        Scope::parse("test-fixtures-api").unwrap(),
        Scope::TestFixturesApi
    );
}

#[test]
fn test_parse_is_case_insensitive_and_trims() {
    assert_eq!(Scope::parse(" API ").unwrap(), Scope::Api);
    assert_eq!(
        Scope::parse("Test-Implementation").unwrap(),
        Scope::TestImplementation
    );
}

#[test]
fn test_parse_unknown_scope_fails() {
    let err = Scope::parse("testCompile").unwrap_err();
    assert!(matches!(err, ScopeParseError::UnknownScope(_)));
    assert!(err.to_string().contains("testCompile"));
}

#[test]
fn test_only_api_scopes_propagate() {
    for scope in Scope::ALL {
        let expected = matches!(scope, Scope::Api | Scope::TestFixturesApi);
        assert_eq!(scope.propagates(), expected, "scope: {scope}");
    }
}

#[test]
fn test_test_scopes_are_flagged() {
    assert!(!Scope::Api.is_test());
    assert!(!Scope::Implementation.is_test());
    assert!(!Scope::RuntimeOnly.is_test());
    assert!(Scope::TestImplementation.is_test());
    assert!(Scope::TestRuntimeOnly.is_test());
    assert!(Scope::TestFixturesApi.is_test());
    assert!(Scope::TestFixturesImplementation.is_test());
}

#[test]
fn test_visibility_ranks_are_distinct() {
    let mut ranks: Vec<u8> = Scope::ALL.iter().map(|s| s.visibility_rank()).collect();
    ranks.sort_unstable();
    ranks.dedup();
    assert_eq!(ranks.len(), Scope::ALL.len());
}

#[test]
fn test_api_outranks_everything() {
    for scope in Scope::ALL {
        if scope != Scope::Api {
            assert!(Scope::Api.visibility_rank() > scope.visibility_rank());
        }
    }
}

#[test]
fn test_display_matches_parse() {
    for scope in Scope::ALL {
        assert_eq!(Scope::parse(&scope.to_string()).unwrap(), scope);
    }
}
