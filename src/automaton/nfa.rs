//! Arena-based epsilon-NFA.
//!
//! States live in one `Vec` and refer to each other by `StateId`, so the
//! loops built for `*` are plain index cycles with no ownership issues. The
//! arena owns every state and frees them together when dropped.

use smallvec::SmallVec;

use super::char_range::CharRange;
use super::sparse_set::{SparseSet, SparseSets};

/// A state identifier - just an index into an automaton's arena.
///
/// This can be freely copied and allows cyclic references.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "state id overflow: {}", index);
        StateId(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A state in the epsilon-NFA.
#[derive(Clone, Debug, Default)]
pub struct NfaState {
    pub accepting: bool,
    /// Character transitions. Ranges may overlap, within and across states.
    pub transitions: SmallVec<[(CharRange, StateId); 2]>,
    /// Epsilon transitions (taken without consuming input)
    pub epsilons: SmallVec<[StateId; 2]>,
}

/// An epsilon-NFA owning all of its states.
#[derive(Clone, Debug, Default)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
}

impl Nfa {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new state, returning its ID. IDs increase monotonically.
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(NfaState {
            accepting,
            ..NfaState::default()
        });
        id
    }

    pub fn add_transition(&mut self, from: StateId, range: CharRange, to: StateId) {
        self.states[from.index()].transitions.push((range, to));
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        let epsilons = &mut self.states[from.index()].epsilons;
        if !epsilons.contains(&to) {
            epsilons.push(to);
        }
    }

    pub fn set_start(&mut self, start: StateId) {
        self.start = start;
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// A set sized to hold any state id of this automaton.
    pub fn state_set(&self) -> SparseSet {
        SparseSet::new(self.states.len())
    }

    /// Extend `set` with every state reachable from its current members by
    /// epsilon transitions.
    ///
    /// `stack` is scratch space; it is left empty.
    pub fn epsilon_closure(&self, set: &mut SparseSet, stack: &mut Vec<StateId>) {
        stack.clear();
        stack.extend(set.iter().map(StateId::new));
        while let Some(current) = stack.pop() {
            for &eps in &self.states[current.index()].epsilons {
                if set.insert(eps.index()) {
                    stack.push(eps);
                }
            }
        }
    }

    /// Add to `next` every state reachable from a member of `current` on `c`.
    pub fn step(&self, current: &SparseSet, c: char, next: &mut SparseSet) {
        for id in current.iter() {
            for (range, target) in &self.states[id].transitions {
                if range.contains(c) {
                    next.insert(target.index());
                }
            }
        }
    }

    /// True if any member of `set` is accepting.
    pub fn any_accepting(&self, set: &SparseSet) -> bool {
        set.iter().any(|id| self.states[id].accepting)
    }

    /// Simulate the NFA over the whole of `input`.
    ///
    /// This is slow compared to the DFA, and serves as its reference.
    pub fn matches(&self, input: &str) -> bool {
        if self.states.is_empty() {
            return false;
        }
        let mut sets = SparseSets::new(self.states.len());
        let mut stack = Vec::new();

        sets.set1.insert(self.start.index());
        self.epsilon_closure(&mut sets.set1, &mut stack);

        for c in input.chars() {
            sets.set2.clear();
            self.step(&sets.set1, c, &mut sets.set2);
            self.epsilon_closure(&mut sets.set2, &mut stack);
            sets.swap();
            if sets.set1.is_empty() {
                return false;
            }
        }
        self.any_accepting(&sets.set1)
    }
}
