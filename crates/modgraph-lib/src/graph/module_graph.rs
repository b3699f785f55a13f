//! Module graph assembly, cycle detection, and build ordering
//!
//! Assembles declared modules and their effective edges into a directed
//! graph, validates it is acyclic, and produces a topological build order.

use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, trace};

use crate::graph::declaration::DeclarationSet;
use crate::graph::resolve::ScopeResolver;
use crate::primitives::Scope;

/// Errors that can occur during graph assembly and ordering
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Cyclic dependency detected: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    #[error("Unknown module: {module} required by {required_by}")]
    UnknownModule {
        module: String,
        required_by: String,
    },
}

/// A module in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    /// Unique module name
    pub name: String,
    /// Human description carried from the declaration
    pub description: Option<String>,
    /// Whether the module is published as a public library
    pub published: bool,
}

impl ModuleNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            published: false,
        }
    }
}

/// Directed graph of modules and effective dependency edges
pub struct ModuleGraph {
    /// Directed graph: nodes = modules, edges = effective dependencies
    graph: DiGraph<ModuleNode, Scope>,
    /// Map from module name to node index for fast lookup
    node_map: HashMap<String, NodeIndex>,
}

impl ModuleGraph {
    /// Create a new empty module graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Assemble the graph from a declaration set.
    ///
    /// Modules are inserted in sorted name order and every effective edge
    /// (test view, which is a superset of the main view) is added, so two
    /// builds over the same declarations yield the same order.
    pub fn build(
        declarations: &DeclarationSet,
        resolver: &ScopeResolver<'_>,
    ) -> Result<Self, GraphError> {
        debug!(modules = declarations.len(), "Building module graph");

        let mut graph = Self::new();

        for module in declarations.modules() {
            graph.add_module(ModuleNode {
                name: module.name.clone(),
                description: module.description.clone(),
                published: module.published,
            });
        }

        for name in declarations.names() {
            let Some(effective) = resolver.resolve(name) else {
                continue;
            };
            for entry in effective.test.values() {
                graph.add_dependency(name, &entry.module, entry.scope)?;
            }
        }

        Ok(graph)
    }

    /// Add a module to the graph (idempotent - won't duplicate if already exists)
    pub fn add_module(&mut self, node: ModuleNode) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node.name) {
            trace!("Module already present: {}", node.name);
            return idx;
        }

        let name = node.name.clone();
        let idx = self.graph.add_node(node);
        self.node_map.insert(name, idx);
        idx
    }

    /// Add an effective dependency edge.
    /// Note: Edge direction is from dependency TO dependent, so topological
    /// sort returns dependencies before their dependents.
    pub fn add_dependency(
        &mut self,
        dependent: &str,
        dependency: &str,
        scope: Scope,
    ) -> Result<(), GraphError> {
        let dependent_idx =
            self.node_map
                .get(dependent)
                .ok_or_else(|| GraphError::UnknownModule {
                    module: dependent.to_string(),
                    required_by: dependency.to_string(),
                })?;

        let dependency_idx =
            self.node_map
                .get(dependency)
                .ok_or_else(|| GraphError::UnknownModule {
                    module: dependency.to_string(),
                    required_by: dependent.to_string(),
                })?;

        self.graph.add_edge(*dependency_idx, *dependent_idx, scope);
        Ok(())
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Detect and return a cycle path if one exists. The path names every
    /// module in the cycle and closes the loop: `[a, b, a]`.
    pub fn detect_cycle(&self) -> Option<Vec<String>> {
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        for node_idx in self.graph.node_indices() {
            if !visited.contains(&node_idx) {
                if let Some(cycle) = self.dfs_cycle_detect(node_idx, &mut visited, &mut stack) {
                    return Some(cycle);
                }
            }
        }

        None
    }

    /// DFS-based cycle extraction
    fn dfs_cycle_detect(
        &self,
        node: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        stack: &mut Vec<NodeIndex>,
    ) -> Option<Vec<String>> {
        visited.insert(node);
        stack.push(node);

        for neighbor in self.graph.neighbors(node) {
            if let Some(start) = stack.iter().position(|&n| n == neighbor) {
                // Back-edge: everything from the first occurrence onward is
                // the cycle; repeat the entry module to close the loop
                let mut cycle: Vec<String> = stack[start..]
                    .iter()
                    .map(|&idx| self.graph[idx].name.clone())
                    .collect();
                cycle.push(self.graph[neighbor].name.clone());
                return Some(cycle);
            }

            if !visited.contains(&neighbor) {
                if let Some(cycle) = self.dfs_cycle_detect(neighbor, visited, stack) {
                    return Some(cycle);
                }
            }
        }

        stack.pop();
        None
    }

    /// Get the topological build order (dependencies first).
    /// Returns an error naming the cycle if the graph has one.
    pub fn topological_sort(&self) -> Result<Vec<ModuleNode>, GraphError> {
        if let Some(cycle) = self.detect_cycle() {
            return Err(GraphError::CyclicDependency { cycle });
        }

        let sorted_indices = toposort(&self.graph, None).map_err(|e| {
            GraphError::CyclicDependency {
                cycle: vec![self.graph[e.node_id()].name.clone()],
            }
        })?;

        Ok(sorted_indices
            .into_iter()
            .map(|idx| self.graph[idx].clone())
            .collect())
    }

    /// Get all effective dependencies of a module as (node, scope) pairs
    pub fn dependencies_of(&self, name: &str) -> Option<Vec<(ModuleNode, Scope)>> {
        let node_idx = self.node_map.get(name)?;

        // Edges run dependency -> dependent, so what this module depends on
        // sits behind incoming edges
        let deps = self
            .graph
            .edges_directed(*node_idx, petgraph::Direction::Incoming)
            .map(|edge| {
                let source_node = &self.graph[edge.source()];
                (source_node.clone(), *edge.weight())
            })
            .collect();

        Some(deps)
    }

    /// Get all modules that depend on this one
    pub fn dependents_of(&self, name: &str) -> Option<Vec<ModuleNode>> {
        let node_idx = self.node_map.get(name)?;

        let dependents = self
            .graph
            .edges_directed(*node_idx, petgraph::Direction::Outgoing)
            .map(|edge| self.graph[edge.target()].clone())
            .collect();

        Some(dependents)
    }

    /// Get the number of modules in the graph
    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a module exists in the graph
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Get a module node by name
    pub fn get_module(&self, name: &str) -> Option<&ModuleNode> {
        let idx = self.node_map.get(name)?;
        Some(&self.graph[*idx])
    }

    /// Get an iterator over all modules in the graph
    pub fn all_modules(&self) -> impl Iterator<Item = &ModuleNode> {
        self.graph.node_weights()
    }
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    include!("module_graph.test.rs");
}
