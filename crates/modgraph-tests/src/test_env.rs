//! Hermetic test environment for E2E testing
//!
//! Provides a TestEnvironment helper that creates an isolated working
//! directory with a module manifest, plus a preconfigured command builder
//! for driving the `modgraph` binary against it.

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated working directory holding a module manifest
pub struct TestEnvironment {
    /// Temporary directory for the test environment
    pub temp_dir: TempDir,
    /// Path to the work directory the manifest lives in
    pub work_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new empty test environment
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let work_path = temp_dir.path().join("work");
        fs::create_dir_all(&work_path)?;

        Ok(Self {
            temp_dir,
            work_path,
        })
    }

    /// Create an environment seeded with `modules.toml` content
    pub fn with_manifest(manifest: &str) -> Result<Self> {
        let env = Self::new()?;
        env.write_manifest(manifest)?;
        Ok(env)
    }

    /// Write (or replace) the environment's module manifest
    pub fn write_manifest(&self, manifest: &str) -> Result<()> {
        fs::write(self.manifest_path(), manifest)?;
        Ok(())
    }

    /// Path of the environment's module manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.work_path.join("modules.toml")
    }

    /// Command builder for the modgraph binary, pointed at this environment.
    /// Color is pinned off so assertions see plain text.
    pub fn modgraph(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("modgraph")?;
        cmd.current_dir(&self.work_path)
            .arg("--workdir")
            .arg(&self.work_path)
            .arg("--color")
            .arg("never")
            .env_remove("MODGRAPH_WORKDIR")
            .env_remove("MODGRAPH_MANIFEST");
        Ok(cmd)
    }
}

/// Index positions of module names within captured stdout, for order
/// assertions
pub fn output_positions(stdout: &str, names: &[&str]) -> Vec<Option<usize>> {
    names.iter().map(|name| stdout.find(name)).collect()
}
