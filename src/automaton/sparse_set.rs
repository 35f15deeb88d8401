//! Integer sets with constant-time insert, remove, lookup and clear.
//!
//! The dense/sparse pair from https://research.swtch.com/sparse. Memberships
//! are validated by the round trip `dense[sparse[x]] == x`, so neither array
//! is ever zeroed after construction. Iteration walks the dense array, which
//! is insertion order until a removal moves the last member into the gap.
//!
//! The automaton builders use these sets to track NFA state ids while
//! computing epsilon closures, and to track visited DFA states while walking
//! the minimized automaton.

use std::ops::Index;

/// A set of small integers with a fixed upper bound.
///
/// A set built with capacity `n` admits every value in `0..=n`.
#[derive(Clone, Debug)]
pub struct SparseSet {
    len: usize,
    /// Largest admissible value.
    max: usize,
    /// Members, in `0..len`. Slots past `len` are stale.
    dense: Vec<usize>,
    /// Value -> slot in `dense`; only meaningful when the slot points back.
    sparse: Vec<usize>,
}

impl SparseSet {
    /// An empty set admitting values in `0..=capacity`.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        SparseSet {
            len: 0,
            max: capacity,
            dense: vec![0; capacity + 1],
            sparse: vec![0; capacity + 1],
        }
    }

    /// The largest admissible value.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add `id`, returning false if it was already a member.
    ///
    /// Panics if `id` exceeds the capacity.
    #[inline]
    pub fn insert(&mut self, id: usize) -> bool {
        self.check_bounds(id);
        if self.contains(id) {
            return false;
        }
        self.dense[self.len] = id;
        self.sparse[id] = self.len;
        self.len += 1;
        true
    }

    /// Drop `id`, returning false if it was not a member. The last member
    /// moves into the freed slot.
    ///
    /// Panics if `id` exceeds the capacity.
    #[inline]
    pub fn remove(&mut self, id: usize) -> bool {
        self.check_bounds(id);
        if !self.contains(id) {
            return false;
        }
        let slot = self.sparse[id];
        let last = self.dense[self.len - 1];
        self.dense[slot] = last;
        self.sparse[last] = slot;
        self.len -= 1;
        true
    }

    /// Values beyond the capacity are never members.
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        if id > self.max {
            return false;
        }
        let slot = self.sparse[id];
        slot < self.len && self.dense[slot] == id
    }

    /// Where `id` sits in iteration order, if it is a member.
    #[inline]
    pub fn index_of(&self, id: usize) -> Option<usize> {
        if self.contains(id) {
            Some(self.sparse[id])
        } else {
            None
        }
    }

    /// The member at iteration position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        if index < self.len {
            Some(self.dense[index])
        } else {
            None
        }
    }

    /// Forget every member without touching either array.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense[..self.len].iter().cloned()
    }

    #[inline]
    fn check_bounds(&self, id: usize) {
        assert!(
            id <= self.max,
            "SparseSet value out of range: id={}, capacity={}",
            id,
            self.max
        );
    }
}

impl Index<usize> for SparseSet {
    type Output = usize;

    /// Panics if index >= len.
    fn index(&self, index: usize) -> &usize {
        assert!(
            index < self.len,
            "SparseSet index out of bounds: index={}, len={}",
            index,
            self.len
        );
        &self.dense[index]
    }
}

/// Current and next state sets for stepping an NFA one character at a time.
#[derive(Clone, Debug)]
pub struct SparseSets {
    pub set1: SparseSet,
    pub set2: SparseSet,
}

impl SparseSets {
    #[inline]
    pub fn new(capacity: usize) -> Self {
        SparseSets {
            set1: SparseSet::new(capacity),
            set2: SparseSet::new(capacity),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.set1.clear();
        self.set2.clear();
    }

    /// Make the next set current.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.set1, &mut self.set2);
    }
}
