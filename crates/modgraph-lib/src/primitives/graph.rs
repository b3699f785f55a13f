use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Scope tag parsing errors
#[derive(Debug, Error)]
pub enum ScopeParseError {
    #[error(
        "Unrecognized dependency scope: {0}. Expected: api, implementation, compile-only, \
         runtime-only, test-implementation, test-runtime-only, test-fixtures-api, or \
         test-fixtures-implementation"
    )]
    UnknownScope(String),
}

/// Declaration-site scope of a dependency edge.
///
/// The scope controls two things: which classpath the edge feeds
/// (production vs test) and whether the target's own dependencies become
/// visible to the declaring module's consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Exposed to consumers; the target's effective dependencies propagate
    Api,
    /// Internal to the declaring module
    Implementation,
    /// Needed to compile, absent at runtime
    CompileOnly,
    /// Needed at runtime, absent at compile time
    RuntimeOnly,
    /// Internal to the module's test suite
    TestImplementation,
    /// Test runtime only
    TestRuntimeOnly,
    /// Exposed through the module's test fixtures
    TestFixturesApi,
    /// Internal to the module's test fixtures
    TestFixturesImplementation,
}

impl Scope {
    pub const ALL: [Scope; 8] = [
        Scope::Api,
        Scope::Implementation,
        Scope::CompileOnly,
        Scope::RuntimeOnly,
        Scope::TestImplementation,
        Scope::TestRuntimeOnly,
        Scope::TestFixturesApi,
        Scope::TestFixturesImplementation,
    ];

    /// Whether the target's effective dependency set becomes visible to the
    /// declaring module transitively
    pub fn propagates(&self) -> bool {
        matches!(self, Scope::Api | Scope::TestFixturesApi)
    }

    /// Whether the edge feeds only the module's test view
    pub fn is_test(&self) -> bool {
        matches!(
            self,
            Scope::TestImplementation
                | Scope::TestRuntimeOnly
                | Scope::TestFixturesApi
                | Scope::TestFixturesImplementation
        )
    }

    /// Visibility rank for effective-scope tie-breaks. Higher wins: when a
    /// target is reachable through several paths, the recorded scope is the
    /// most visible one.
    pub fn visibility_rank(&self) -> u8 {
        match self {
            Scope::Api => 7,
            Scope::Implementation => 6,
            Scope::CompileOnly => 5,
            Scope::RuntimeOnly => 4,
            Scope::TestFixturesApi => 3,
            Scope::TestImplementation => 2,
            Scope::TestRuntimeOnly => 1,
            Scope::TestFixturesImplementation => 0,
        }
    }

    pub fn parse(input: &str) -> Result<Self, ScopeParseError> {
        match input.trim().to_lowercase().as_str() {
            "api" => Ok(Scope::Api),
            "implementation" => Ok(Scope::Implementation),
            "compile-only" => Ok(Scope::CompileOnly),
            "runtime-only" => Ok(Scope::RuntimeOnly),
            "test-implementation" => Ok(Scope::TestImplementation),
            "test-runtime-only" => Ok(Scope::TestRuntimeOnly),
            "test-fixtures-api" => Ok(Scope::TestFixturesApi),
            "test-fixtures-implementation" => Ok(Scope::TestFixturesImplementation),
            _ => Err(ScopeParseError::UnknownScope(input.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Api => write!(f, "api"),
            Scope::Implementation => write!(f, "implementation"),
            Scope::CompileOnly => write!(f, "compile-only"),
            Scope::RuntimeOnly => write!(f, "runtime-only"),
            Scope::TestImplementation => write!(f, "test-implementation"),
            Scope::TestRuntimeOnly => write!(f, "test-runtime-only"),
            Scope::TestFixturesApi => write!(f, "test-fixtures-api"),
            Scope::TestFixturesImplementation => write!(f, "test-fixtures-implementation"),
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = ScopeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::parse(s)
    }
}
