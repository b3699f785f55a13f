//! E2E tests for the modules listing and version commands

use anyhow::Result;
use modgraph_tests::fixtures::WORKSPACE_MANIFEST;
use modgraph_tests::test_env::TestEnvironment;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn e2e_modules_lists_declarations() -> Result<()> {
    let env = TestEnvironment::with_manifest(WORKSPACE_MANIFEST)?;

    env.modgraph()?
        .arg("modules")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-services"))
        .stdout(predicate::str::contains("[published]"))
        .stdout(predicate::str::contains("Build orchestration core"));

    Ok(())
}

#[test]
fn e2e_modules_json_carries_metadata() -> Result<()> {
    let env = TestEnvironment::with_manifest(WORKSPACE_MANIFEST)?;

    let output = env.modgraph()?.args(["modules", "--json"]).output()?;
    assert!(output.status.success());

    let listing: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listing.len(), 5);

    let core = listing
        .iter()
        .find(|m| m["name"] == "core")
        .expect("core in listing");
    assert_eq!(core["published"], false);
    assert_eq!(core["dependencies"], 4);

    let base = listing
        .iter()
        .find(|m| m["name"] == "base-services")
        .expect("base-services in listing");
    assert_eq!(base["published"], true);

    Ok(())
}

#[test]
fn e2e_version_prints_crate_version() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.modgraph()?
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modgraph"));

    Ok(())
}

#[test]
fn e2e_no_command_prints_hint() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.modgraph()?
        .assert()
        .success()
        .stdout(predicate::str::contains("modgraph --help"));

    Ok(())
}
