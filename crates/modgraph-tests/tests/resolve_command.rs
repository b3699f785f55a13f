//! E2E tests for the resolve command

use anyhow::Result;
use modgraph_tests::fixtures::{CHAIN_MANIFEST, WORKSPACE_MANIFEST};
use modgraph_tests::test_env::TestEnvironment;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn e2e_resolve_exposes_propagated_closure() -> Result<()> {
    // a -> b (api) pulls in b's effective set, so a sees both b and c
    let env = TestEnvironment::with_manifest(CHAIN_MANIFEST)?;

    env.modgraph()?
        .args(["resolve", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b"))
        .stdout(predicate::str::contains("c"))
        .stdout(predicate::str::contains("inherited"));

    Ok(())
}

#[test]
fn e2e_resolve_json_records_scope_and_origin() -> Result<()> {
    let env = TestEnvironment::with_manifest(CHAIN_MANIFEST)?;

    let output = env.modgraph()?.args(["resolve", "a", "--json"]).output()?;
    assert!(output.status.success());

    let entries: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(entries.len(), 2);

    let b = entries
        .iter()
        .find(|e| e["module"] == "b")
        .expect("entry for b");
    assert_eq!(b["scope"], "api");
    assert_eq!(b["direct"], true);

    let c = entries
        .iter()
        .find(|e| e["module"] == "c")
        .expect("entry for c");
    assert_eq!(c["scope"], "implementation");
    assert_eq!(c["direct"], false);

    Ok(())
}

#[test]
fn e2e_resolve_local_dependency_stays_shallow() -> Result<()> {
    // b -> c is implementation scoped, so resolving b yields c only
    let env = TestEnvironment::with_manifest(CHAIN_MANIFEST)?;

    let output = env.modgraph()?.args(["resolve", "b", "--json"]).output()?;
    let entries: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["module"], "c");

    Ok(())
}

#[test]
fn e2e_resolve_test_view_includes_test_edges() -> Result<()> {
    let env = TestEnvironment::with_manifest(WORKSPACE_MANIFEST)?;

    // Production view of core has no test harness wiring
    let main = env.modgraph()?.args(["resolve", "core", "--json"]).output()?;
    let main_entries: Vec<Value> = serde_json::from_slice(&main.stdout)?;
    assert!(main_entries.iter().all(|e| e["module"] != "native"));

    // Test view picks up the fixtures edge
    let test = env
        .modgraph()?
        .args(["resolve", "core", "--test", "--json"])
        .output()?;
    let test_entries: Vec<Value> = serde_json::from_slice(&test.stdout)?;
    let native = test_entries
        .iter()
        .find(|e| e["module"] == "native")
        .expect("native in test view");
    assert_eq!(native["scope"], "test-implementation");
    assert_eq!(native["fixtures"], true);

    Ok(())
}

#[test]
fn e2e_resolve_unknown_module_fails() -> Result<()> {
    let env = TestEnvironment::with_manifest(CHAIN_MANIFEST)?;

    env.modgraph()?
        .args(["resolve", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown module 'ghost'"));

    Ok(())
}
