//! Version-tagged text fragments.

use serde::{Deserialize, Serialize};

use crate::mvd::version_set::VersionSet;

/// A contiguous span of text shared by a fixed set of versions.
///
/// Offsets into a fragment are counted in `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// The fragment's text.
    pub text: String,
    /// Versions that contain this fragment.
    pub versions: VersionSet,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new<S: Into<String>>(text: S, versions: VersionSet) -> Self {
        Fragment {
            text: text.into(),
            versions,
        }
    }

    /// Create a fragment from a text and a list of version identifiers.
    pub fn with_versions<S, I>(text: S, versions: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = usize>,
    {
        Fragment::new(text, versions.into_iter().collect())
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the fragment has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `version` contains this fragment.
    pub fn contains_version(&self, version: usize) -> bool {
        self.versions.contains(version)
    }

    /// Iterate over the characters starting at character `offset`.
    pub fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.text.chars().skip(offset)
    }
}
