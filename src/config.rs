//! Top-level configuration.
//!
//! # Example
//!
//! ```
//! use mvd_search::config::MvdConfig;
//! use mvd_search::codec::WidthThresholds;
//! use mvd_search::search::UnterminatedPolicy;
//!
//! let config = MvdConfig::from_json_str(
//!     r#"{ "codec": { "thresholds": "twos_complement" } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.codec.thresholds, WidthThresholds::TwosComplement);
//! assert_eq!(config.resolver.unterminated, UnterminatedPolicy::ImplicitEnd);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{CodecConfig, IntArrayCodec};
use crate::error::{MvdError, Result};
use crate::search::{PositionResolver, ResolverConfig};

/// Configuration for both components. Missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MvdConfig {
    /// Position resolver settings.
    pub resolver: ResolverConfig,
    /// Integer array codec settings.
    pub codec: CodecConfig,
}

impl MvdConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| MvdError::config(format!("failed to parse configuration: {e}")))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
            .map_err(|e| MvdError::config(format!("{}: {e}", path.display())))
    }

    /// Build a position resolver from this configuration.
    pub fn resolver(&self) -> PositionResolver {
        PositionResolver::new(self.resolver.clone())
    }

    /// Build an integer array codec from this configuration.
    pub fn codec(&self) -> IntArrayCodec {
        IntArrayCodec::new(self.codec.clone())
    }
}
