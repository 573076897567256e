//! Term positions across the versions of a multi-version document.
//!
//! # Example
//!
//! ```
//! use mvd_search::mvd::Fragment;
//! use mvd_search::search::PositionResolver;
//!
//! let fragments = vec![
//!     Fragment::with_versions("cat ", [1, 2]),
//!     Fragment::with_versions("cat!", [3]),
//! ];
//!
//! let position = PositionResolver::default()
//!     .resolve(&fragments, 0, 0, 0)
//!     .unwrap();
//! assert_eq!(position.versions().iter().collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(position.ends().iter().copied().collect::<Vec<_>>(), vec![3]);
//! ```

pub mod config;
pub mod position;
pub mod resolver;

pub use config::{ResolverConfig, UnterminatedPolicy};
pub use position::{Position, select_non_overlapping};
pub use resolver::PositionResolver;

use crate::error::Result;
use crate::mvd::Fragment;

/// Resolve a term with the default resolver.
pub fn resolve(
    fragments: &[Fragment],
    index: usize,
    offset: usize,
    start: usize,
) -> Result<Position> {
    PositionResolver::default().resolve(fragments, index, offset, start)
}

/// Check if two positions overlap.
pub fn overlaps(a: &Position, b: &Position) -> bool {
    a.overlaps(b)
}
