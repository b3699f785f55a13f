pub mod declaration;
pub mod manifest;
pub mod module_graph;
pub mod resolve;

// Re-export main types for convenience
pub use declaration::{
    DeclarationError, DeclarationSet, DependencyDeclaration, ModuleDeclaration,
};
pub use manifest::{MANIFEST_FILENAME, Manifest, ManifestError};
pub use module_graph::{GraphError, ModuleGraph, ModuleNode};
pub use resolve::{EffectiveDependency, EffectiveDeps, PublicationLeak, ScopeResolver};

// Re-export primitives types for convenience
pub use crate::primitives::{Scope, ScopeParseError};
