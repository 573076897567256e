//! Bitmap-backed set of version identifiers.

use std::fmt;

use bit_vec::BitVec;
use serde::{Deserialize, Serialize};

use crate::error::{MvdError, Result};

/// Largest version identifier a [`VersionSet`] accepts.
///
/// The bitmap is sized by its largest member, so this bounds the memory a
/// single set can take (8 KiB).
pub const MAX_VERSION: usize = u16::MAX as usize;

/// A set of small non-negative version identifiers.
///
/// Membership is stored as a bitmap that grows on demand. Iteration always
/// yields members in ascending order and visits each member exactly once.
/// The set serializes as an ascending list of integers; deserializing a list
/// with a member above [`MAX_VERSION`] fails.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct VersionSet {
    bits: BitVec,
}

impl VersionSet {
    /// Create an empty version set.
    pub fn new() -> Self {
        VersionSet { bits: BitVec::new() }
    }

    /// Add a version. Returns `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `version` is greater than [`MAX_VERSION`]. Use
    /// [`VersionSet::try_insert`] for identifiers from untrusted input.
    pub fn insert(&mut self, version: usize) -> bool {
        match self.try_insert(version) {
            Ok(added) => added,
            Err(e) => panic!("{e}"),
        }
    }

    /// Add a version, failing if it is greater than [`MAX_VERSION`].
    pub fn try_insert(&mut self, version: usize) -> Result<bool> {
        if version > MAX_VERSION {
            return Err(MvdError::invalid_argument(format!(
                "version {version} exceeds the maximum of {MAX_VERSION}"
            )));
        }
        if version >= self.bits.len() {
            self.bits.grow(version + 1 - self.bits.len(), false);
        }
        let was_present = self.bits.get(version).unwrap_or(false);
        self.bits.set(version, true);
        Ok(!was_present)
    }

    /// Remove a version. Returns `true` if it was present.
    pub fn remove(&mut self, version: usize) -> bool {
        match self.bits.get(version) {
            Some(true) => {
                self.bits.set(version, false);
                true
            }
            _ => false,
        }
    }

    /// Check whether a version is a member.
    pub fn contains(&self, version: usize) -> bool {
        self.bits.get(version).unwrap_or(false)
    }

    /// Iterate over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(version, set)| set.then_some(version))
    }

    /// Number of versions in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().filter(|set| *set).count()
    }

    /// Check if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits.none()
    }

    /// Check if every member of this set is also a member of `other`.
    pub fn is_subset(&self, other: &VersionSet) -> bool {
        self.iter().all(|version| other.contains(version))
    }
}

impl PartialEq for VersionSet {
    // Trailing unset bits do not affect membership.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for VersionSet {}

impl fmt::Debug for VersionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for VersionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = VersionSet::new();
        for version in iter {
            set.insert(version);
        }
        set
    }
}

impl TryFrom<Vec<usize>> for VersionSet {
    type Error = MvdError;

    fn try_from(versions: Vec<usize>) -> Result<Self> {
        let mut set = VersionSet::new();
        for version in versions {
            set.try_insert(version)?;
        }
        Ok(set)
    }
}

impl From<VersionSet> for Vec<usize> {
    fn from(set: VersionSet) -> Self {
        set.iter().collect()
    }
}
