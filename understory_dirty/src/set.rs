// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty set: accumulated stale item indices.

use core::ops::Range;

use hashbrown::HashSet;
use smallvec::SmallVec;

/// Accumulated dirty indices with generation tracking.
///
/// `DirtyIndices` keeps the set of item indices whose cached appearance is
/// stale, along with a generation counter that increments on every mutation.
///
/// Indices are plain `usize` positions into an owner-defined strip of items.
/// The set does not know how many items exist; marks beyond the current
/// item count are kept until cleared and are expected to be filtered by the
/// consumer (for example by intersecting with a visible row range).
///
/// # Example
///
/// ```
/// use understory_dirty::DirtyIndices;
///
/// let mut dirty = DirtyIndices::new();
/// assert!(dirty.mark(7));
/// assert!(!dirty.mark(7));
/// assert!(dirty.contains(7));
///
/// let drained: Vec<_> = dirty.drain().collect();
/// assert_eq!(drained, [7]);
/// assert!(dirty.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DirtyIndices {
    /// Stale indices.
    keys: HashSet<usize>,
    /// Generation counter, incremented on each mutation.
    generation: u64,
}

impl DirtyIndices {
    /// Creates a new empty dirty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current generation.
    ///
    /// The generation is incremented on every mutation (mark, remove, clear,
    /// drain). This can be used to detect whether the dirty set has changed
    /// since a previous observation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks an index as dirty.
    ///
    /// Returns `true` if the index was newly inserted, `false` if it was already dirty.
    pub fn mark(&mut self, index: usize) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.keys.insert(index)
    }

    /// Returns `true` if the index is dirty.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.keys.contains(&index)
    }

    /// Returns `true` if any index in the half-open `range` is dirty.
    #[must_use]
    pub fn any_in(&self, range: Range<usize>) -> bool {
        if range.start >= range.end {
            return false;
        }
        // Probe whichever side is smaller.
        if range.len() <= self.keys.len() {
            (range.start..range.end).any(|i| self.keys.contains(&i))
        } else {
            self.keys.iter().any(|i| range.contains(i))
        }
    }

    /// Returns the dirty indices inside `range`, in ascending order.
    #[must_use]
    pub fn sorted_in(&self, range: Range<usize>) -> SmallVec<[usize; 16]> {
        let mut out: SmallVec<[usize; 16]> = self
            .keys
            .iter()
            .copied()
            .filter(|i| range.contains(i))
            .collect();
        out.sort_unstable();
        out
    }

    /// Returns `true` if there are no dirty indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of dirty indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns an iterator over the dirty indices in arbitrary order.
    ///
    /// This does not clear the dirty state. Use [`drain`](Self::drain) to
    /// consume and clear.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.keys.iter().copied()
    }

    /// Drains and returns the dirty indices in arbitrary order.
    pub fn drain(&mut self) -> impl Iterator<Item = usize> + '_ {
        self.generation = self.generation.wrapping_add(1);
        self.keys.drain()
    }

    /// Removes a single index.
    ///
    /// Returns `true` if it was dirty.
    pub fn remove(&mut self, index: usize) -> bool {
        let removed = self.keys.remove(&index);
        if removed {
            self.generation = self.generation.wrapping_add(1);
        }
        removed
    }

    /// Clears all dirty indices.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.keys.clear();
    }
}
