// Tests for graph assembly and ordering

use crate::graph::declaration::{DependencyDeclaration, ModuleDeclaration};
use std::collections::HashMap;

fn declare(specs: Vec<ModuleDeclaration>) -> DeclarationSet {
    let mut set = DeclarationSet::new();
    for spec in specs {
        set.insert(spec).unwrap();
    }
    set
}

fn dep(target: &str, scope: Scope) -> DependencyDeclaration {
    DependencyDeclaration::new(target, scope)
}

fn positions(order: &[ModuleNode]) -> HashMap<String, usize> {
    order
        .iter()
        .enumerate()
        .map(|(i, node)| (node.name.clone(), i))
        .collect()
}

#[test]
fn test_new_graph_is_empty() {
    let graph = ModuleGraph::new();
    assert_eq!(graph.module_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_module_is_idempotent() {
    let mut graph = ModuleGraph::new();
    let idx1 = graph.add_module(ModuleNode::new("core"));
    let idx2 = graph.add_module(ModuleNode::new("core"));

    assert_eq!(idx1, idx2);
    assert_eq!(graph.module_count(), 1);
    assert!(graph.contains("core"));
}

#[test]
fn test_add_dependency_edge() {
    let mut graph = ModuleGraph::new();
    graph.add_module(ModuleNode::new("core"));
    graph.add_module(ModuleNode::new("base"));

    graph
        .add_dependency("core", "base", Scope::Implementation)
        .unwrap();

    assert_eq!(graph.module_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_dependency_on_unknown_module() {
    let mut graph = ModuleGraph::new();
    graph.add_module(ModuleNode::new("core"));

    let result = graph.add_dependency("core", "ghost", Scope::Implementation);
    match result.unwrap_err() {
        GraphError::UnknownModule { module, required_by } => {
            assert_eq!(module, "ghost");
            assert_eq!(required_by, "core");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_spec_example_order() {
    // a -> b (api, propagating), b -> c (implementation, local):
    // effective(a) = {b, c}; build order is [c, b, a]
    let set = declare(vec![
        ModuleDeclaration::new("a").depends_on(dep("b", Scope::Api)),
        ModuleDeclaration::new("b").depends_on(dep("c", Scope::Implementation)),
        ModuleDeclaration::new("c"),
    ]);
    let resolver = ScopeResolver::new(&set);
    let graph = ModuleGraph::build(&set, &resolver).unwrap();

    assert!(!graph.has_cycles());

    let order = graph.topological_sort().unwrap();
    let names: Vec<&str> = order.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}

#[test]
fn test_diamond_order() {
    // a depends on b and c, both depend on d
    let set = declare(vec![
        ModuleDeclaration::new("a")
            .depends_on(dep("b", Scope::Implementation))
            .depends_on(dep("c", Scope::Implementation)),
        ModuleDeclaration::new("b").depends_on(dep("d", Scope::Implementation)),
        ModuleDeclaration::new("c").depends_on(dep("d", Scope::Implementation)),
        ModuleDeclaration::new("d"),
    ]);
    let resolver = ScopeResolver::new(&set);
    let graph = ModuleGraph::build(&set, &resolver).unwrap();

    let order = graph.topological_sort().unwrap();
    assert_eq!(order.len(), 4);

    let pos = positions(&order);
    assert!(pos["d"] < pos["b"]);
    assert!(pos["d"] < pos["c"]);
    assert!(pos["b"] < pos["a"]);
    assert!(pos["c"] < pos["a"]);
}

#[test]
fn test_test_edges_participate_in_order() {
    let set = declare(vec![
        ModuleDeclaration::new("core").depends_on(dep("harness", Scope::TestImplementation)),
        ModuleDeclaration::new("harness"),
    ]);
    let resolver = ScopeResolver::new(&set);
    let graph = ModuleGraph::build(&set, &resolver).unwrap();

    let order = graph.topological_sort().unwrap();
    let pos = positions(&order);
    assert!(pos["harness"] < pos["core"]);
}

#[test]
fn test_two_module_cycle_names_full_path() {
    let set = declare(vec![
        ModuleDeclaration::new("a").depends_on(dep("b", Scope::Implementation)),
        ModuleDeclaration::new("b").depends_on(dep("a", Scope::Implementation)),
    ]);
    let resolver = ScopeResolver::new(&set);
    let graph = ModuleGraph::build(&set, &resolver).unwrap();

    assert!(graph.has_cycles());

    match graph.topological_sort().unwrap_err() {
        GraphError::CyclicDependency { cycle } => {
            assert_eq!(cycle, vec!["a", "b", "a"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_three_module_cycle_detection() {
    let mut graph = ModuleGraph::new();
    graph.add_module(ModuleNode::new("a"));
    graph.add_module(ModuleNode::new("b"));
    graph.add_module(ModuleNode::new("c"));

    graph.add_dependency("a", "b", Scope::Implementation).unwrap();
    graph.add_dependency("b", "c", Scope::Implementation).unwrap();
    graph.add_dependency("c", "a", Scope::Implementation).unwrap();

    let cycle = graph.detect_cycle().unwrap();
    assert_eq!(cycle.len(), 4);
    assert_eq!(cycle.first(), cycle.last());
    for name in ["a", "b", "c"] {
        assert!(cycle.contains(&name.to_string()), "missing {name}");
    }
}

#[test]
fn test_acyclic_graph_has_no_cycle() {
    let mut graph = ModuleGraph::new();
    graph.add_module(ModuleNode::new("a"));
    graph.add_module(ModuleNode::new("b"));
    graph.add_dependency("a", "b", Scope::Api).unwrap();

    assert!(!graph.has_cycles());
    assert!(graph.detect_cycle().is_none());
}

#[test]
fn test_order_is_deterministic() {
    let specs = || {
        vec![
            ModuleDeclaration::new("file-collections")
                .depends_on(dep("base-services", Scope::Api)),
            ModuleDeclaration::new("core")
                .depends_on(dep("base-services", Scope::Api))
                .depends_on(dep("logging", Scope::Implementation))
                .depends_on(dep("file-collections", Scope::Implementation)),
            ModuleDeclaration::new("logging").depends_on(dep("base-services", Scope::Api)),
            ModuleDeclaration::new("base-services"),
        ]
    };

    let set_a = declare(specs());
    let resolver_a = ScopeResolver::new(&set_a);
    let order_a = ModuleGraph::build(&set_a, &resolver_a)
        .unwrap()
        .topological_sort()
        .unwrap();

    let set_b = declare(specs());
    let resolver_b = ScopeResolver::new(&set_b);
    let order_b = ModuleGraph::build(&set_b, &resolver_b)
        .unwrap()
        .topological_sort()
        .unwrap();

    let names_a: Vec<&str> = order_a.iter().map(|n| n.name.as_str()).collect();
    let names_b: Vec<&str> = order_b.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names_a, names_b);
}

#[test]
fn test_dependencies_of() {
    let set = declare(vec![
        ModuleDeclaration::new("core")
            .depends_on(dep("base", Scope::Api))
            .depends_on(dep("logging", Scope::Implementation)),
        ModuleDeclaration::new("base"),
        ModuleDeclaration::new("logging"),
    ]);
    let resolver = ScopeResolver::new(&set);
    let graph = ModuleGraph::build(&set, &resolver).unwrap();

    let deps = graph.dependencies_of("core").unwrap();
    assert_eq!(deps.len(), 2);

    let api_count = deps.iter().filter(|(_, s)| *s == Scope::Api).count();
    assert_eq!(api_count, 1);

    assert!(graph.dependencies_of("ghost").is_none());
}

#[test]
fn test_dependents_of() {
    let set = declare(vec![
        ModuleDeclaration::new("core").depends_on(dep("base", Scope::Api)),
        ModuleDeclaration::new("logging").depends_on(dep("base", Scope::Implementation)),
        ModuleDeclaration::new("base"),
    ]);
    let resolver = ScopeResolver::new(&set);
    let graph = ModuleGraph::build(&set, &resolver).unwrap();

    let dependents = graph.dependents_of("base").unwrap();
    let mut names: Vec<String> = dependents.into_iter().map(|n| n.name).collect();
    names.sort();
    assert_eq!(names, vec!["core", "logging"]);
}

#[test]
fn test_get_module_carries_declaration_metadata() {
    let set = declare(vec![
        ModuleDeclaration::new("base")
            .with_description("Foundational utilities")
            .published(),
    ]);
    let resolver = ScopeResolver::new(&set);
    let graph = ModuleGraph::build(&set, &resolver).unwrap();

    let node = graph.get_module("base").unwrap();
    assert_eq!(node.description.as_deref(), Some("Foundational utilities"));
    assert!(node.published);
    assert!(graph.get_module("ghost").is_none());
}
