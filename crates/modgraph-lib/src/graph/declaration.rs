//! Validated per-module dependency declarations
//!
//! The in-memory form of a build's configuration surface: each module names
//! its dependencies as (target, scope) pairs. `DeclarationSet::validate`
//! rejects edges that cannot form a sane graph before any resolution runs.

use crate::primitives::Scope;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use thiserror::Error;

/// Declaration loading and validation errors
#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error("Duplicate module declaration: {module}")]
    DuplicateModule { module: String },

    #[error("Malformed declaration in module '{module}': {reason}")]
    MalformedDeclaration { module: String, reason: String },
}

/// A single declared dependency edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    /// Target module name
    pub target: String,
    /// Declaration-site scope
    pub scope: Scope,
    /// Optional reason carried from the declaration site
    pub because: Option<String>,
    /// Edge targets the module's test fixtures rather than its main output
    pub fixtures: bool,
}

impl DependencyDeclaration {
    pub fn new(target: impl Into<String>, scope: Scope) -> Self {
        Self {
            target: target.into(),
            scope,
            because: None,
            fixtures: false,
        }
    }

    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.because = Some(reason.into());
        self
    }

    pub fn on_fixtures(mut self) -> Self {
        self.fixtures = true;
        self
    }
}

/// A declared module and its outgoing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    /// Unique module name
    pub name: String,
    /// Human description of what the module is for
    pub description: Option<String>,
    /// Whether the module is published as a public library
    pub published: bool,
    /// Declared dependency edges
    pub dependencies: Vec<DependencyDeclaration>,
}

impl ModuleDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            published: false,
            dependencies: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn depends_on(mut self, dependency: DependencyDeclaration) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// The full module universe for one resolution request.
///
/// Keyed by module name in a `BTreeMap` so that iteration order, and
/// therefore everything downstream of it, is deterministic.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    modules: BTreeMap<String, ModuleDeclaration>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    /// Insert a module declaration, rejecting duplicates
    pub fn insert(&mut self, module: ModuleDeclaration) -> Result<(), DeclarationError> {
        use std::collections::btree_map::Entry;

        match self.modules.entry(module.name.clone()) {
            Entry::Vacant(e) => {
                e.insert(module);
                Ok(())
            }
            Entry::Occupied(e) => Err(DeclarationError::DuplicateModule {
                module: e.key().clone(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ModuleDeclaration> {
        self.modules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Module declarations in sorted name order
    pub fn modules(&self) -> impl Iterator<Item = &ModuleDeclaration> {
        self.modules.values()
    }

    /// Validate every declared edge against the full module universe.
    ///
    /// Rejects: edges to unknown targets, self-edges, duplicate
    /// (target, scope) triples, and fixtures edges outside test scopes.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        for module in self.modules.values() {
            let mut seen: BTreeSet<(&str, Scope)> = BTreeSet::new();

            for dep in &module.dependencies {
                if !self.modules.contains_key(&dep.target) {
                    return Err(DeclarationError::MalformedDeclaration {
                        module: module.name.clone(),
                        reason: format!("unknown target module '{}'", dep.target),
                    });
                }

                if dep.target == module.name {
                    return Err(DeclarationError::MalformedDeclaration {
                        module: module.name.clone(),
                        reason: "module depends on itself".to_string(),
                    });
                }

                if !seen.insert((dep.target.as_str(), dep.scope)) {
                    return Err(DeclarationError::MalformedDeclaration {
                        module: module.name.clone(),
                        reason: format!(
                            "duplicate dependency on '{}' with scope '{}'",
                            dep.target, dep.scope
                        ),
                    });
                }

                if dep.fixtures && !dep.scope.is_test() {
                    return Err(DeclarationError::MalformedDeclaration {
                        module: module.name.clone(),
                        reason: format!(
                            "fixtures dependency on '{}' requires a test scope, found '{}'",
                            dep.target, dep.scope
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    include!("declaration.test.rs");
}
