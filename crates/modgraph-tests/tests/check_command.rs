//! E2E tests for the check command

use anyhow::Result;
use modgraph_tests::fixtures::{
    BAD_SCOPE_MANIFEST, CYCLIC_MANIFEST, LEAKY_MANIFEST, WORKSPACE_MANIFEST,
};
use modgraph_tests::test_env::TestEnvironment;
use predicates::prelude::*;

#[test]
fn e2e_check_passes_clean_workspace() -> Result<()> {
    let env = TestEnvironment::with_manifest(WORKSPACE_MANIFEST)?;

    env.modgraph()?
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 module(s) validated"));

    Ok(())
}

#[test]
fn e2e_check_reports_cycle_path() -> Result<()> {
    let env = TestEnvironment::with_manifest(CYCLIC_MANIFEST)?;

    env.modgraph()?
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("cyclic dependency: a -> b -> a"))
        .stderr(predicate::str::contains("problem(s) found"));

    Ok(())
}

#[test]
fn e2e_check_reports_publication_leak() -> Result<()> {
    let env = TestEnvironment::with_manifest(LEAKY_MANIFEST)?;

    env.modgraph()?
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("public-lib"))
        .stdout(predicate::str::contains("internal-bits"));

    Ok(())
}

#[test]
fn e2e_check_rejects_unrecognized_scope() -> Result<()> {
    let env = TestEnvironment::with_manifest(BAD_SCOPE_MANIFEST)?;

    env.modgraph()?
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("testCompile"));

    Ok(())
}

#[test]
fn e2e_check_rejects_unknown_target() -> Result<()> {
    let env = TestEnvironment::with_manifest(
        r#"
[modules.core]
dependencies = [{ module = "ghost", scope = "implementation" }]
"#,
    )?;

    env.modgraph()?
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));

    Ok(())
}
