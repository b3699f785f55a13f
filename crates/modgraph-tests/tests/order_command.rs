//! E2E tests for the order command
//!
//! Drives the modgraph binary against real manifests on a real filesystem
//! and asserts on the produced build order.

use anyhow::Result;
use modgraph_tests::fixtures::{CHAIN_MANIFEST, CYCLIC_MANIFEST, WORKSPACE_MANIFEST};
use modgraph_tests::test_env::{TestEnvironment, output_positions};
use predicates::prelude::*;

#[test]
fn e2e_order_puts_dependencies_first() -> Result<()> {
    let env = TestEnvironment::with_manifest(WORKSPACE_MANIFEST)?;

    let output = env.modgraph()?.arg("order").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let positions = output_positions(
        &stdout,
        &["base-services", "logging", "file-collections", "core"],
    );
    let base = positions[0].expect("base-services missing from order");
    let logging = positions[1].expect("logging missing from order");
    let file_collections = positions[2].expect("file-collections missing from order");
    let core = positions[3].expect("core missing from order");

    assert!(base < logging);
    assert!(base < file_collections);
    assert!(logging < core);
    assert!(file_collections < core);

    Ok(())
}

#[test]
fn e2e_order_json_spec_chain() -> Result<()> {
    // a -> b (api), b -> c (implementation): order must be [c, b, a]
    let env = TestEnvironment::with_manifest(CHAIN_MANIFEST)?;

    let output = env.modgraph()?.args(["order", "--json"]).output()?;
    assert!(output.status.success());

    let order: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(order, vec!["c", "b", "a"]);

    Ok(())
}

#[test]
fn e2e_order_is_deterministic() -> Result<()> {
    let env = TestEnvironment::with_manifest(WORKSPACE_MANIFEST)?;

    let first = env.modgraph()?.args(["order", "--json"]).output()?;
    let second = env.modgraph()?.args(["order", "--json"]).output()?;

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn e2e_order_fails_on_cycle() -> Result<()> {
    let env = TestEnvironment::with_manifest(CYCLIC_MANIFEST)?;

    env.modgraph()?
        .arg("order")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cyclic dependency detected: a -> b -> a",
        ));

    Ok(())
}

#[test]
fn e2e_order_without_manifest_fails() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.modgraph()?
        .arg("order")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load module manifest"));

    Ok(())
}
