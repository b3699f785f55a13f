//! Library-level resolution tests
//!
//! Exercises the full manifest -> resolver -> graph pipeline through the
//! library API, without going through the CLI.

use anyhow::Result;
use modgraph_lib::graph::{GraphError, Manifest, ModuleGraph, ScopeResolver};
use modgraph_tests::fixtures::{CHAIN_MANIFEST, CYCLIC_MANIFEST, WORKSPACE_MANIFEST};

#[test]
fn chain_manifest_resolves_per_spec() -> Result<()> {
    let declarations = Manifest::parse(CHAIN_MANIFEST)?;
    let resolver = ScopeResolver::new(&declarations);

    // a -> b (api, propagating), b -> c (implementation, local)
    let effective = resolver.resolve("a").expect("a is declared");
    let names: Vec<&str> = effective.main.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["b", "c"]);

    let graph = ModuleGraph::build(&declarations, &resolver)?;
    let order: Vec<String> = graph
        .topological_sort()?
        .into_iter()
        .map(|n| n.name)
        .collect();
    assert_eq!(order, vec!["c", "b", "a"]);

    Ok(())
}

#[test]
fn workspace_manifest_orders_every_module_after_its_dependencies() -> Result<()> {
    let declarations = Manifest::parse(WORKSPACE_MANIFEST)?;
    let resolver = ScopeResolver::new(&declarations);
    let graph = ModuleGraph::build(&declarations, &resolver)?;

    let order: Vec<String> = graph
        .topological_sort()?
        .into_iter()
        .map(|n| n.name)
        .collect();
    assert_eq!(order.len(), declarations.len());

    // Validity: no module appears before something it effectively depends on
    for name in declarations.names() {
        let position = order.iter().position(|n| n == name).expect("in order");
        let effective = resolver.resolve(name).expect("declared");
        for dep in effective.test.keys() {
            let dep_position = order.iter().position(|n| n == dep).expect("in order");
            assert!(
                dep_position < position,
                "{dep} must precede {name} in the build order"
            );
        }
    }

    Ok(())
}

#[test]
fn resolving_twice_is_identical() -> Result<()> {
    let declarations = Manifest::parse(WORKSPACE_MANIFEST)?;
    let resolver = ScopeResolver::new(&declarations);

    let first = ModuleGraph::build(&declarations, &resolver)?.topological_sort()?;
    let second = ModuleGraph::build(&declarations, &resolver)?.topological_sort()?;

    let first_names: Vec<String> = first.into_iter().map(|n| n.name).collect();
    let second_names: Vec<String> = second.into_iter().map(|n| n.name).collect();
    assert_eq!(first_names, second_names);

    Ok(())
}

#[test]
fn cyclic_manifest_names_the_cycle() -> Result<()> {
    let declarations = Manifest::parse(CYCLIC_MANIFEST)?;
    let resolver = ScopeResolver::new(&declarations);
    let graph = ModuleGraph::build(&declarations, &resolver)?;

    match graph.topological_sort() {
        Err(GraphError::CyclicDependency { cycle }) => {
            assert_eq!(cycle, vec!["a", "b", "a"]);
        }
        other => panic!("expected cyclic dependency error, got {other:?}"),
    }

    Ok(())
}
