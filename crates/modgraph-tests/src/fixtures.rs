//! Manifest fixtures for E2E tests
//!
//! Canned `modules.toml` contents modeled on a real multi-module build:
//! a foundation layer, a couple of published libraries, and an application
//! module with test-only wiring.

/// A well-formed workspace with api/implementation/test edges
pub const WORKSPACE_MANIFEST: &str = r#"
[modules.base-services]
description = "Foundational utilities shared by every module"
published = true

[modules.logging]
description = "Structured logging services"
published = true
dependencies = [
    { module = "base-services", scope = "api" },
]

[modules.file-collections]
description = "Lazy file collection primitives"
published = true
dependencies = [
    { module = "base-services", scope = "api" },
    { module = "native", scope = "implementation", because = "file watching needs platform probes" },
]

[modules.native]
description = "Platform integration"

[modules.core]
description = "Build orchestration core"
dependencies = [
    { module = "base-services", scope = "api" },
    { module = "logging", scope = "implementation" },
    { module = "file-collections", scope = "implementation" },
    { module = "native", scope = "test-implementation", fixtures = true },
]
"#;

/// Spec-shaped three-module chain: a -> b (api), b -> c (implementation)
pub const CHAIN_MANIFEST: &str = r#"
[modules.a]
dependencies = [{ module = "b", scope = "api" }]

[modules.b]
dependencies = [{ module = "c", scope = "implementation" }]

[modules.c]
"#;

/// Two modules depending on each other
pub const CYCLIC_MANIFEST: &str = r#"
[modules.a]
dependencies = [{ module = "b", scope = "implementation" }]

[modules.b]
dependencies = [{ module = "a", scope = "implementation" }]
"#;

/// A published module exposing an unpublished one through its api
pub const LEAKY_MANIFEST: &str = r#"
[modules.internal-bits]
description = "Not part of any public contract"

[modules.public-lib]
description = "Published library"
published = true
dependencies = [
    { module = "internal-bits", scope = "api" },
]
"#;

/// An edge using a scope tag the resolver does not know
pub const BAD_SCOPE_MANIFEST: &str = r#"
[modules.core]
dependencies = [{ module = "core-api", scope = "testCompile" }]

[modules.core-api]
"#;
