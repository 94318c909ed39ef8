use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over catalog or vertex indices
///
/// Uses 0-based indexing, matching catalog positions and vertex order.
/// Provides O(1) membership testing and ascending iteration, which the
/// solver relies on to keep first-fit catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitset {
    bits: BitVec,
}

impl Bitset {
    /// Create a bitset with no members
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
        }
    }

    /// Create a bitset containing every index below `len`
    pub fn all(len: usize) -> Self {
        Self {
            bits: bitvec![1; len],
        }
    }

    /// Create a bitset from member indices, ignoring indices out of range
    pub fn from_indices(indices: impl IntoIterator<Item = usize>, len: usize) -> Self {
        let mut bitset = Self::new(len);
        for index in indices {
            bitset.insert(index);
        }
        bitset
    }

    /// Capacity of the set
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Insert an index
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Remove an index
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// Test membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no indices are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count members
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Smallest member that is at least `start`
    pub fn next_from(&self, start: usize) -> Option<usize> {
        self.bits
            .get(start..)
            .and_then(|tail| tail.first_one())
            .map(|offset| start + offset)
    }

    /// Extract all members as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitset({} members: {:?})", self.count(), self.to_vec())
    }
}
