//! Workspace manifest parsing
//!
//! Reads the `modules.toml` manifest that declares every module of the
//! build and its scoped dependencies, and lowers it into a validated
//! [`DeclarationSet`]. Scope tags are kept as strings in the raw form so
//! that an unrecognized tag surfaces as a malformed declaration naming the
//! module, not as an opaque deserialization failure.

use crate::graph::declaration::{
    DeclarationError, DeclarationSet, DependencyDeclaration, ModuleDeclaration,
};
use crate::primitives::Scope;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Default manifest file name, resolved against the working directory
pub const MANIFEST_FILENAME: &str = "modules.toml";

/// Manifest loading errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Declaration(#[from] DeclarationError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    modules: BTreeMap<String, RawModule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModule {
    description: Option<String>,
    #[serde(default)]
    published: bool,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDependency {
    module: String,
    scope: String,
    because: Option<String>,
    #[serde(default)]
    fixtures: bool,
}

/// Entry point for manifest loading
pub struct Manifest;

impl Manifest {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<DeclarationSet, ManifestError> {
        debug!("Loading module manifest: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parse and validate manifest content
    pub fn parse(content: &str) -> Result<DeclarationSet, ManifestError> {
        let raw: RawManifest =
            toml::from_str(content).map_err(|e| ManifestError::Toml { source: e })?;

        let mut set = DeclarationSet::new();

        for (name, raw_module) in raw.modules {
            trace!("Declaring module: {}", name);

            let mut module = ModuleDeclaration::new(name.clone());
            module.description = raw_module.description;
            module.published = raw_module.published;

            for raw_dep in raw_module.dependencies {
                let scope = Scope::parse(&raw_dep.scope).map_err(|e| {
                    DeclarationError::MalformedDeclaration {
                        module: name.clone(),
                        reason: e.to_string(),
                    }
                })?;

                let mut dep = DependencyDeclaration::new(raw_dep.module, scope);
                dep.because = raw_dep.because;
                dep.fixtures = raw_dep.fixtures;
                module.dependencies.push(dep);
            }

            set.insert(module)?;
        }

        set.validate()?;

        debug!(
            modules = set.len(),
            "Module manifest loaded and validated"
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    include!("manifest.test.rs");
}
