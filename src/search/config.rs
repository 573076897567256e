//! Configuration for term position resolution.

use serde::{Deserialize, Serialize};

/// What to do with a version whose term runs to the end of the fragment
/// sequence without meeting a non-letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnterminatedPolicy {
    /// The end of the sequence terminates the term; the version and its
    /// end offset are recorded.
    #[default]
    ImplicitEnd,
    /// The version is left out of the resolved position.
    Drop,
}

/// Configuration for [`PositionResolver`](crate::search::PositionResolver).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Handling of terms that reach the end of the fragment sequence.
    pub unterminated: UnterminatedPolicy,
}

impl ResolverConfig {
    /// Create a configuration with the given end-of-sequence policy.
    pub fn with_unterminated(unterminated: UnterminatedPolicy) -> Self {
        ResolverConfig { unterminated }
    }
}
