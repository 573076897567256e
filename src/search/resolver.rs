//! Term position resolution over a fragment sequence.
//!
//! A term found at some offset of the fragment sequence may continue
//! differently in each version that contains it. The resolver follows every
//! version forward from the start, fragment by fragment, until the term ends
//! at a non-letter, and collects the distinct end offsets.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::error::{MvdError, Result};
use crate::mvd::{self, Fragment, VersionSet};
use crate::search::config::{ResolverConfig, UnterminatedPolicy};
use crate::search::position::Position;

/// Check if a character continues a term.
pub fn is_term_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Computes [`Position`]s for terms in a fragment sequence.
#[derive(Debug, Clone, Default)]
pub struct PositionResolver {
    config: ResolverConfig,
}

impl PositionResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        PositionResolver { config }
    }

    /// Get the resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the term starting at character `offset` of `fragments[index]`,
    /// which lies at global offset `start`.
    ///
    /// Every version of the starting fragment is traced independently. The
    /// returned versions are always a subset of the starting fragment's.
    ///
    /// Fails with [`MvdError::InvalidArgument`] when `index` or `offset` is
    /// out of range or the starting fragment has no versions.
    pub fn resolve(
        &self,
        fragments: &[Fragment],
        index: usize,
        offset: usize,
        start: usize,
    ) -> Result<Position> {
        let fragment = fragments.get(index).ok_or_else(|| {
            MvdError::invalid_argument(format!(
                "fragment index {index} out of range for {} fragments",
                fragments.len()
            ))
        })?;
        let len = fragment.len();
        if offset >= len {
            return Err(MvdError::invalid_argument(format!(
                "offset {offset} out of range for fragment {index} of length {len}"
            )));
        }
        if fragment.versions.is_empty() {
            return Err(MvdError::invalid_argument(format!(
                "fragment {index} belongs to no version"
            )));
        }

        let mut versions = VersionSet::new();
        let mut ends = BTreeSet::new();
        for version in fragment.versions.iter() {
            if let Some(end) = self.trace_version(fragments, index, offset, start, version) {
                trace!("Version {version}: term at {start} ends at {end}");
                versions.insert(version);
                ends.insert(end);
            }
        }

        debug!(
            "Resolved term at {start} (fragment {index}, offset {offset}): {} versions, {} ends",
            versions.len(),
            ends.len()
        );

        Ok(Position::new(start, versions, ends))
    }

    /// Resolve the term starting at global offset `global`.
    pub fn resolve_at(&self, fragments: &[Fragment], global: usize) -> Result<Position> {
        let (index, offset) = mvd::locate(fragments, global).ok_or_else(|| {
            MvdError::invalid_argument(format!(
                "global offset {global} is past the end of the fragment sequence"
            ))
        })?;
        self.resolve(fragments, index, offset, global)
    }

    /// Follow `version` from `(index, offset)` and return where its term
    /// ends, or `None` if the version is dropped.
    fn trace_version(
        &self,
        fragments: &[Fragment],
        mut index: usize,
        mut offset: usize,
        start: usize,
        version: usize,
    ) -> Option<usize> {
        let mut end = start;
        loop {
            for c in fragments[index].chars_from(offset) {
                if !is_term_char(c) {
                    return Some(end);
                }
                end += 1;
            }

            match next_fragment(fragments, index, version) {
                Some(next) => {
                    index = next;
                    offset = 0;
                }
                None => {
                    return match self.config.unterminated {
                        UnterminatedPolicy::ImplicitEnd => Some(end),
                        UnterminatedPolicy::Drop => {
                            debug!("Version {version}: term at {start} is unterminated, dropped");
                            None
                        }
                    };
                }
            }
        }
    }
}

/// Index of the next non-empty fragment after `index` that contains `version`.
fn next_fragment(fragments: &[Fragment], index: usize, version: usize) -> Option<usize> {
    fragments
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, fragment)| fragment.contains_version(version) && !fragment.is_empty())
        .map(|(next, _)| next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends(position: &Position) -> Vec<usize> {
        position.ends().iter().copied().collect()
    }

    fn versions(position: &Position) -> Vec<usize> {
        position.versions().iter().collect()
    }

    #[test]
    fn test_term_within_one_fragment() {
        let fragments = vec![
            Fragment::with_versions("cat ", [1, 2]),
            Fragment::with_versions("cat!", [3]),
        ];

        let position = PositionResolver::default()
            .resolve(&fragments, 0, 0, 0)
            .unwrap();

        assert_eq!(position.start(), 0);
        assert_eq!(versions(&position), vec![1, 2]);
        assert_eq!(ends(&position), vec![3]);
    }

    #[test]
    fn test_versions_diverge_across_fragments() {
        // v1: "blackbird sings", v2: "black cat"
        let fragments = vec![
            Fragment::with_versions("black", [1, 2]),
            Fragment::with_versions("bird", [1]),
            Fragment::with_versions(" cat", [2]),
            Fragment::with_versions(" sings", [1]),
        ];

        let position = PositionResolver::default()
            .resolve(&fragments, 0, 0, 0)
            .unwrap();

        assert_eq!(versions(&position), vec![1, 2]);
        assert_eq!(ends(&position), vec![5, 9]);
    }

    #[test]
    fn test_start_mid_fragment() {
        let fragments = vec![
            Fragment::with_versions("the ", [0]),
            Fragment::with_versions("old dog", [0]),
        ];

        // "dog" begins at global offset 8.
        let position = PositionResolver::default()
            .resolve(&fragments, 1, 4, 8)
            .unwrap();

        assert_eq!(position.start(), 8);
        assert_eq!(ends(&position), vec![11]);
    }

    #[test]
    fn test_empty_fragments_are_skipped() {
        let fragments = vec![
            Fragment::with_versions("wa", [1]),
            Fragment::with_versions("", [1]),
            Fragment::with_versions("ter.", [1]),
        ];

        let position = PositionResolver::default()
            .resolve(&fragments, 0, 0, 0)
            .unwrap();
        assert_eq!(ends(&position), vec![5]);
    }

    #[test]
    fn test_non_letter_start_is_empty_term() {
        let fragments = vec![Fragment::with_versions(" cat", [1])];

        let position = PositionResolver::default()
            .resolve(&fragments, 0, 0, 0)
            .unwrap();
        assert_eq!(ends(&position), vec![0]);
    }

    #[test]
    fn test_unterminated_implicit_end() {
        let fragments = vec![
            Fragment::with_versions("the ", [1, 2]),
            Fragment::with_versions("end", [1, 2]),
        ];

        let position = PositionResolver::default()
            .resolve(&fragments, 1, 0, 4)
            .unwrap();
        assert_eq!(versions(&position), vec![1, 2]);
        assert_eq!(ends(&position), vec![7]);
    }

    #[test]
    fn test_unterminated_drop() {
        let fragments = vec![
            Fragment::with_versions("fin", [1, 2]),
            Fragment::with_versions("al", [1]),
            Fragment::with_versions("ish.", [2]),
        ];

        let resolver =
            PositionResolver::new(ResolverConfig::with_unterminated(UnterminatedPolicy::Drop));
        let position = resolver.resolve(&fragments, 0, 0, 0).unwrap();

        // Version 1 reads "final" and never meets a non-letter.
        assert_eq!(versions(&position), vec![2]);
        assert_eq!(ends(&position), vec![6]);
    }

    #[test]
    fn test_invalid_arguments() {
        let fragments = vec![
            Fragment::with_versions("cat ", [1]),
            Fragment::with_versions("orphan", []),
        ];
        let resolver = PositionResolver::default();

        assert!(matches!(
            resolver.resolve(&fragments, 2, 0, 0),
            Err(MvdError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolver.resolve(&fragments, 0, 4, 0),
            Err(MvdError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolver.resolve(&fragments, 1, 0, 4),
            Err(MvdError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_resolve_at_global_offset() {
        let fragments = vec![
            Fragment::with_versions("a ", [1, 2]),
            Fragment::with_versions("red", [1]),
            Fragment::with_versions("blue", [2]),
            Fragment::with_versions(" sky", [1, 2]),
        ];
        let resolver = PositionResolver::default();

        let position = resolver.resolve_at(&fragments, 5).unwrap();
        assert_eq!(versions(&position), vec![2]);
        assert_eq!(ends(&position), vec![9]);

        assert!(resolver.resolve_at(&fragments, 13).is_err());
    }
}
