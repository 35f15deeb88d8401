//! Forced-transition analysis of a minimized DFA.
//!
//! A matcher can skip ahead when every accepted string is known to carry a
//! particular character class at a fixed position. `chain` finds the forced
//! prefix from the root, `offset` the deepest forced position before the
//! first accepting state, and `offsets` repeats the offset walk from every
//! branch of every true fork.

use std::collections::BTreeMap;

use super::char_range::CharRange;
use super::dfa::Dfa;
use super::nfa::StateId;
use super::sparse_set::SparseSet;

/// Every string accepted from the state this was computed for has a
/// character in `range` at position `depth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub depth: usize,
    pub range: CharRange,
}

/// How a forced run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunEnd {
    Accepting,
    Fork(StateId),
    /// A non-accepting state with no way out, or a revisited state.
    Stuck,
}

impl Dfa {
    /// The ranges of the single-transition path from the root.
    ///
    /// The walk stops at a state with more than one transition, even when
    /// they all lead to the same place, and before stepping onto an
    /// accepting state that can still be left.
    pub fn chain(&self) -> Vec<CharRange> {
        let mut chain = Vec::new();
        if self.is_empty() {
            return chain;
        }
        let mut visited = SparseSet::new(self.len());
        let mut current = self.root();
        visited.insert(current.index());

        while let [(range, next)] = self.transitions(current) {
            let next = *next;
            if self.is_accepting(next) && !self.transitions(next).is_empty() {
                break;
            }
            chain.push(*range);
            if !visited.insert(next.index()) {
                break;
            }
            current = next;
        }
        chain
    }

    /// The last forced position before the first accepting state, if the
    /// path from the root there has no true fork.
    pub fn offset(&self) -> Option<Offset> {
        if self.is_empty() {
            return None;
        }
        match self.forced_run(self.root()) {
            (last, RunEnd::Accepting) => last,
            _ => None,
        }
    }

    /// One offset per forced run, keyed by the state the run starts from.
    ///
    /// Runs start at the root and at each distinct destination of every true
    /// fork a run ends on. Runs that cross no edge are left out.
    pub fn offsets(&self) -> BTreeMap<StateId, Offset> {
        let mut offsets = BTreeMap::new();
        if self.is_empty() {
            return offsets;
        }
        let mut started = SparseSet::new(self.len());
        let mut pending = vec![self.root()];
        started.insert(self.root().index());

        while let Some(start) = pending.pop() {
            let (last, end) = self.forced_run(start);
            if let Some(offset) = last {
                offsets.insert(start, offset);
            }
            if let RunEnd::Fork(fork) = end {
                // reversed so the lowest destination is walked first
                for dest in self.state(fork).destinations().into_iter().rev() {
                    if started.insert(dest.index()) {
                        pending.push(dest);
                    }
                }
            }
        }
        offsets
    }

    /// Follow single-destination states from `start` until an accepting
    /// state or a true fork, returning the last position passed and why the
    /// walk stopped.
    fn forced_run(&self, start: StateId) -> (Option<Offset>, RunEnd) {
        let mut visited = SparseSet::new(self.len());
        let mut current = start;
        let mut last = None;
        let mut depth = 0;

        loop {
            if self.is_accepting(current) {
                return (last, RunEnd::Accepting);
            }
            if !visited.insert(current.index()) {
                return (last, RunEnd::Stuck);
            }
            let state = self.state(current);
            let destinations = state.destinations();
            let (next, range) = match (destinations.as_slice(), state.span()) {
                ([next], Some(range)) => (*next, range),
                ([], _) | (_, None) => return (last, RunEnd::Stuck),
                _ => return (last, RunEnd::Fork(current)),
            };
            last = Some(Offset { depth, range });
            depth += 1;
            current = next;
        }
    }
}
