//! Multi-version document data model.
//!
//! A multi-version document (MVD) holds several variants ("versions") of a
//! text as one ordered sequence of [`Fragment`]s. Each fragment belongs to a
//! set of versions; filtering the sequence down to the fragments containing a
//! version yields that version's text in reading order.
//!
//! Global offsets count characters across the whole fragment sequence,
//! independent of any version.

pub mod fragment;
pub mod version_set;

pub use fragment::Fragment;
pub use version_set::{MAX_VERSION, VersionSet};

/// Total number of characters across all fragments.
pub fn total_len(fragments: &[Fragment]) -> usize {
    fragments.iter().map(Fragment::len).sum()
}

/// Map a global offset to a `(fragment index, character offset)` pair.
///
/// Empty fragments are skipped, so the returned offset always addresses a
/// character. Returns `None` when `global` is past the end of the sequence.
pub fn locate(fragments: &[Fragment], global: usize) -> Option<(usize, usize)> {
    let mut base = 0;
    for (index, fragment) in fragments.iter().enumerate() {
        let len = fragment.len();
        if global < base + len {
            return Some((index, global - base));
        }
        base += len;
    }
    None
}

/// Reconstruct the text of a single version.
pub fn version_text(fragments: &[Fragment], version: usize) -> String {
    fragments
        .iter()
        .filter(|fragment| fragment.contains_version(version))
        .map(|fragment| fragment.text.as_str())
        .collect()
}
