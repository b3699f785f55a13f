//! Scope resolution: declared edges to effective dependency sets
//!
//! Expands each module's declared (target, scope) pairs into the set of
//! modules it effectively depends on. A propagating scope exposes the
//! target's entire effective set to the declaring module; a local scope
//! contributes the target alone. Test scopes feed a separate test view on
//! top of the main one.

use crate::graph::declaration::{DeclarationSet, DependencyDeclaration};
use crate::primitives::Scope;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, trace};

/// One entry of a module's effective dependency set
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EffectiveDependency {
    /// Target module name
    pub module: String,
    /// Most visible scope among all paths reaching the target
    pub scope: Scope,
    /// Whether the module declares this dependency itself
    pub direct: bool,
    /// Declaration-site reason, present on direct entries only
    pub because: Option<String>,
    /// Direct edge targets the module's test fixtures
    pub fixtures: bool,
}

/// Effective dependency sets of a single module
#[derive(Debug, Clone, Default)]
pub struct EffectiveDeps {
    /// Production view: non-test edges plus their propagated closure
    pub main: BTreeMap<String, EffectiveDependency>,
    /// Test view: the main view plus test-scoped contributions
    pub test: BTreeMap<String, EffectiveDependency>,
}

/// A published module exposing an unpublished one through its API surface
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PublicationLeak {
    /// The published module
    pub module: String,
    /// The unpublished module visible to its consumers
    pub exposed: String,
}

impl std::fmt::Display for PublicationLeak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "published module '{}' exposes unpublished module '{}'",
            self.module, self.exposed
        )
    }
}

/// Computes effective dependency sets over an immutable declaration set
pub struct ScopeResolver<'a> {
    declarations: &'a DeclarationSet,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(declarations: &'a DeclarationSet) -> Self {
        Self { declarations }
    }

    /// Resolve one module's effective dependency sets.
    ///
    /// Returns `None` when the module is not declared. Terminates on cyclic
    /// input (each module expands at most once per view); reporting the
    /// cycle itself is the orderer's job.
    pub fn resolve(&self, name: &str) -> Option<EffectiveDeps> {
        let module = self.declarations.get(name)?;
        trace!("Resolving effective dependencies: {}", name);

        let mut main = BTreeMap::new();
        let mut visited = HashSet::new();
        for dep in module.dependencies.iter().filter(|d| !d.scope.is_test()) {
            self.apply_direct(dep, name, &mut main, &mut visited);
        }

        let mut test = main.clone();
        let mut test_visited = visited;
        for dep in module.dependencies.iter().filter(|d| d.scope.is_test()) {
            self.apply_direct(dep, name, &mut test, &mut test_visited);
        }

        debug!(
            module = name,
            main = main.len(),
            test = test.len(),
            "Effective dependencies resolved"
        );

        Some(EffectiveDeps { main, test })
    }

    /// Modules a consumer sees through this module's propagating production
    /// edges: each api target plus that target's effective main set.
    pub fn exported(&self, name: &str) -> Option<BTreeSet<String>> {
        let module = self.declarations.get(name)?;

        let mut exposed = BTreeSet::new();
        for dep in &module.dependencies {
            if !dep.scope.propagates() || dep.scope.is_test() {
                continue;
            }
            exposed.insert(dep.target.clone());
            if let Some(effective) = self.resolve(&dep.target) {
                exposed.extend(effective.main.keys().cloned());
            }
        }
        exposed.remove(name);

        Some(exposed)
    }

    /// Report every published module whose exported surface contains an
    /// unpublished module
    pub fn check_publication(&self) -> Vec<PublicationLeak> {
        let mut leaks = Vec::new();

        for module in self.declarations.modules().filter(|m| m.published) {
            let Some(exposed) = self.exported(&module.name) else {
                continue;
            };

            for name in exposed {
                let unpublished = self
                    .declarations
                    .get(&name)
                    .is_some_and(|target| !target.published);
                if unpublished {
                    leaks.push(PublicationLeak {
                        module: module.name.clone(),
                        exposed: name,
                    });
                }
            }
        }

        leaks
    }

    /// Record a direct edge and, for propagating scopes, the target's
    /// expanded contribution
    fn apply_direct(
        &self,
        dep: &DependencyDeclaration,
        root: &str,
        acc: &mut BTreeMap<String, EffectiveDependency>,
        visited: &mut HashSet<String>,
    ) {
        record(
            acc,
            EffectiveDependency {
                module: dep.target.clone(),
                scope: dep.scope,
                direct: true,
                because: dep.because.clone(),
                fixtures: dep.fixtures,
            },
        );

        if dep.scope.propagates() {
            self.expand(&dep.target, root, acc, visited);
        }
    }

    /// Pull the target's effective set into the accumulator, recursing
    /// through further propagating edges
    fn expand(
        &self,
        target: &str,
        root: &str,
        acc: &mut BTreeMap<String, EffectiveDependency>,
        visited: &mut HashSet<String>,
    ) {
        if !visited.insert(target.to_string()) {
            return;
        }

        let Some(declaration) = self.declarations.get(target) else {
            return;
        };

        for dep in declaration.dependencies.iter().filter(|d| !d.scope.is_test()) {
            // A cycle back to the module being resolved is not part of its
            // own dependency set; the orderer reports the cycle.
            if dep.target == root {
                continue;
            }

            record(
                acc,
                EffectiveDependency {
                    module: dep.target.clone(),
                    scope: dep.scope,
                    direct: false,
                    because: None,
                    fixtures: false,
                },
            );

            if dep.scope.propagates() {
                self.expand(&dep.target, root, acc, visited);
            }
        }
    }
}

/// Merge a candidate entry into the accumulator. The most visible scope
/// wins; a direct declaration marks the entry direct and keeps its reason.
fn record(acc: &mut BTreeMap<String, EffectiveDependency>, candidate: EffectiveDependency) {
    use std::collections::btree_map::Entry;

    match acc.entry(candidate.module.clone()) {
        Entry::Vacant(e) => {
            e.insert(candidate);
        }
        Entry::Occupied(mut e) => {
            let existing = e.get_mut();
            if candidate.scope.visibility_rank() > existing.scope.visibility_rank() {
                existing.scope = candidate.scope;
            }
            if candidate.direct {
                existing.direct = true;
                existing.fixtures = candidate.fixtures;
                if existing.because.is_none() {
                    existing.because = candidate.because;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    include!("resolve.test.rs");
}
