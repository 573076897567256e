//! # mvd-search
//!
//! Search support for multi-version documents (MVDs): several textual
//! variants of one work stored as a single sequence of shared and
//! version-specific fragments.
//!
//! ## Features
//!
//! - Term position resolution across versions, with per-version end offsets
//! - Fixed-width packing of `i32` arrays for persisted index data
//! - Checksummed streams for storing packed arrays
//! - JSON configuration and a command line tool

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod mvd;
pub mod search;
pub mod storage;

pub mod prelude {
    pub use crate::codec::{CompressedArray, IntArrayCodec};
    pub use crate::config::MvdConfig;
    pub use crate::error::{MvdError, Result};
    pub use crate::mvd::{Fragment, VersionSet};
    pub use crate::search::{Position, PositionResolver};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
