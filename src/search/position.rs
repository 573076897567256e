//! Resolved term positions.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::mvd::VersionSet;

/// The full position of one term occurrence in a multi-version document.
///
/// A term has a single global start offset but may end at different offsets
/// in different versions. Versions that agree on an end share one entry in
/// `ends`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    start: usize,
    versions: VersionSet,
    ends: BTreeSet<usize>,
}

impl Position {
    /// Create a position from its parts.
    pub fn new(start: usize, versions: VersionSet, ends: BTreeSet<usize>) -> Self {
        Position {
            start,
            versions,
            ends,
        }
    }

    /// Global offset where the term begins.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Versions that share this term.
    pub fn versions(&self) -> &VersionSet {
        &self.versions
    }

    /// Distinct global offsets where the term ends, ascending.
    pub fn ends(&self) -> &BTreeSet<usize> {
        &self.ends
    }

    /// Check whether `version` contains this term.
    pub fn contains_version(&self, version: usize) -> bool {
        self.versions.contains(version)
    }

    /// The furthest end offset over all versions.
    pub fn max_end(&self) -> Option<usize> {
        self.ends.last().copied()
    }

    /// Check if some end offset lies strictly after `offset`.
    fn extends_past(&self, offset: usize) -> bool {
        self.max_end().is_some_and(|end| end > offset)
    }

    /// Check if this position overlaps another.
    ///
    /// The earlier position overlaps the later one when any of its end offsets
    /// lies strictly after the later start. When both start at the same
    /// offset they overlap if either of them is non-empty, which keeps the
    /// result independent of argument order.
    pub fn overlaps(&self, other: &Position) -> bool {
        match self.start.cmp(&other.start) {
            Ordering::Less => self.extends_past(other.start),
            Ordering::Greater => other.extends_past(self.start),
            Ordering::Equal => self.extends_past(self.start) || other.extends_past(other.start),
        }
    }
}

/// Keep the positions that do not overlap an earlier kept one.
///
/// Positions are visited in order of their start offset; ties keep their
/// input order.
pub fn select_non_overlapping(positions: &[Position]) -> Vec<&Position> {
    let mut ordered: Vec<&Position> = positions.iter().collect();
    ordered.sort_by_key(|position| position.start);

    let mut kept: Vec<&Position> = Vec::with_capacity(ordered.len());
    for position in ordered {
        if !kept.iter().any(|selected| selected.overlaps(position)) {
            kept.push(position);
        }
    }
    kept
}
