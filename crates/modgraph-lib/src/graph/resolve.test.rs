// Tests for scope resolution

use crate::graph::declaration::ModuleDeclaration;

fn declare(specs: Vec<ModuleDeclaration>) -> DeclarationSet {
    let mut set = DeclarationSet::new();
    for spec in specs {
        set.insert(spec).unwrap();
    }
    set.validate().unwrap();
    set
}

fn dep(target: &str, scope: Scope) -> DependencyDeclaration {
    DependencyDeclaration::new(target, scope)
}

#[test]
fn test_propagating_edge_exposes_target_closure() {
    // a -> b (api, propagating), b -> c (implementation, local)
    let set = declare(vec![
        ModuleDeclaration::new("a").depends_on(dep("b", Scope::Api)),
        ModuleDeclaration::new("b").depends_on(dep("c", Scope::Implementation)),
        ModuleDeclaration::new("c"),
    ]);
    let resolver = ScopeResolver::new(&set);

    let effective = resolver.resolve("a").unwrap();
    let names: Vec<&str> = effective.main.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "c"]);

    assert!(effective.main["b"].direct);
    assert_eq!(effective.main["b"].scope, Scope::Api);
    assert!(!effective.main["c"].direct);
    assert_eq!(effective.main["c"].scope, Scope::Implementation);
}

#[test]
fn test_local_edge_exposes_target_only() {
    // a -> b (implementation), b -> c (implementation)
    let set = declare(vec![
        ModuleDeclaration::new("a").depends_on(dep("b", Scope::Implementation)),
        ModuleDeclaration::new("b").depends_on(dep("c", Scope::Implementation)),
        ModuleDeclaration::new("c"),
    ]);
    let resolver = ScopeResolver::new(&set);

    let effective = resolver.resolve("a").unwrap();
    let names: Vec<&str> = effective.main.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b"]);
}

#[test]
fn test_propagation_chains_through_api_edges() {
    // a -> b (api), b -> c (api), c -> d (implementation)
    let set = declare(vec![
        ModuleDeclaration::new("a").depends_on(dep("b", Scope::Api)),
        ModuleDeclaration::new("b").depends_on(dep("c", Scope::Api)),
        ModuleDeclaration::new("c").depends_on(dep("d", Scope::Implementation)),
        ModuleDeclaration::new("d"),
    ]);
    let resolver = ScopeResolver::new(&set);

    let effective = resolver.resolve("a").unwrap();
    let names: Vec<&str> = effective.main.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "c", "d"]);
}

#[test]
fn test_propagating_path_wins_tie_break() {
    // d is direct via implementation, and reachable via api through b
    let set = declare(vec![
        ModuleDeclaration::new("a")
            .depends_on(dep("d", Scope::Implementation))
            .depends_on(dep("b", Scope::Api)),
        ModuleDeclaration::new("b").depends_on(dep("d", Scope::Api)),
        ModuleDeclaration::new("d"),
    ]);
    let resolver = ScopeResolver::new(&set);

    let effective = resolver.resolve("a").unwrap();
    let entry = &effective.main["d"];
    assert_eq!(entry.scope, Scope::Api, "propagating scope wins");
    assert!(entry.direct, "direct declaration is preserved");
}

#[test]
fn test_diamond_records_each_target_once() {
    let set = declare(vec![
        ModuleDeclaration::new("a")
            .depends_on(dep("b", Scope::Api))
            .depends_on(dep("c", Scope::Api)),
        ModuleDeclaration::new("b").depends_on(dep("d", Scope::Implementation)),
        ModuleDeclaration::new("c").depends_on(dep("d", Scope::Implementation)),
        ModuleDeclaration::new("d"),
    ]);
    let resolver = ScopeResolver::new(&set);

    let effective = resolver.resolve("a").unwrap();
    assert_eq!(effective.main.len(), 3);
}

#[test]
fn test_test_edges_feed_test_view_only() {
    let set = declare(vec![
        ModuleDeclaration::new("core")
            .depends_on(dep("base", Scope::Implementation))
            .depends_on(dep("harness", Scope::TestImplementation)),
        ModuleDeclaration::new("base"),
        ModuleDeclaration::new("harness").depends_on(dep("base", Scope::Implementation)),
    ]);
    let resolver = ScopeResolver::new(&set);

    let effective = resolver.resolve("core").unwrap();
    assert!(!effective.main.contains_key("harness"));
    assert!(effective.test.contains_key("harness"));
    // test-implementation is local, so harness's own deps stay out
    assert_eq!(effective.test["harness"].scope, Scope::TestImplementation);
}

#[test]
fn test_test_fixtures_api_propagates_into_test_view() {
    let set = declare(vec![
        ModuleDeclaration::new("core")
            .depends_on(dep("fixtures", Scope::TestFixturesApi).on_fixtures()),
        ModuleDeclaration::new("fixtures").depends_on(dep("asserts", Scope::Api)),
        ModuleDeclaration::new("asserts"),
    ]);
    let resolver = ScopeResolver::new(&set);

    let effective = resolver.resolve("core").unwrap();
    assert!(effective.main.is_empty());
    assert!(effective.test.contains_key("fixtures"));
    assert!(effective.test["fixtures"].fixtures);
    assert!(effective.test.contains_key("asserts"));
}

#[test]
fn test_resolve_unknown_module() {
    let set = declare(vec![ModuleDeclaration::new("a")]);
    let resolver = ScopeResolver::new(&set);
    assert!(resolver.resolve("ghost").is_none());
}

#[test]
fn test_resolution_terminates_on_cyclic_input() {
    // Cycle detection is the orderer's job; resolution must not hang
    let mut set = DeclarationSet::new();
    set.insert(ModuleDeclaration::new("a").depends_on(dep("b", Scope::Api)))
        .unwrap();
    set.insert(ModuleDeclaration::new("b").depends_on(dep("a", Scope::Api)))
        .unwrap();

    let resolver = ScopeResolver::new(&set);
    let effective = resolver.resolve("a").unwrap();
    assert!(effective.main.contains_key("b"));
    assert!(!effective.main.contains_key("a"));
}

#[test]
fn test_exported_covers_api_targets_and_their_closure() {
    let set = declare(vec![
        ModuleDeclaration::new("a")
            .depends_on(dep("b", Scope::Api))
            .depends_on(dep("c", Scope::Implementation)),
        ModuleDeclaration::new("b").depends_on(dep("d", Scope::Implementation)),
        ModuleDeclaration::new("c"),
        ModuleDeclaration::new("d"),
    ]);
    let resolver = ScopeResolver::new(&set);

    let exported = resolver.exported("a").unwrap();
    let names: Vec<&str> = exported.iter().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "d"], "implementation dep c is not exported");
}

#[test]
fn test_publication_leak_detected() {
    let set = declare(vec![
        ModuleDeclaration::new("base").published(),
        ModuleDeclaration::new("internal"),
        ModuleDeclaration::new("pub-lib")
            .published()
            .depends_on(dep("base", Scope::Api))
            .depends_on(dep("internal", Scope::Api)),
    ]);
    let resolver = ScopeResolver::new(&set);

    let leaks = resolver.check_publication();
    assert_eq!(leaks.len(), 1);
    assert_eq!(leaks[0].module, "pub-lib");
    assert_eq!(leaks[0].exposed, "internal");
}

#[test]
fn test_no_leak_for_implementation_edges_or_internal_modules() {
    let set = declare(vec![
        ModuleDeclaration::new("internal"),
        // implementation edges don't expose the target
        ModuleDeclaration::new("pub-lib")
            .published()
            .depends_on(dep("internal", Scope::Implementation)),
        // unpublished modules may expose whatever they like
        ModuleDeclaration::new("app").depends_on(dep("internal", Scope::Api)),
    ]);
    let resolver = ScopeResolver::new(&set);

    assert!(resolver.check_publication().is_empty());
}
