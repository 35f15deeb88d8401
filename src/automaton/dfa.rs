//! Arena DFA and subset construction.
//!
//! Each DFA state stands for one distinct epsilon-closure of NFA states.
//! Outgoing ranges are split with `CharRange::minimal_covering` so every
//! range leaving a state is disjoint and maps to exactly one target.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::char_range::CharRange;
use super::nfa::{Nfa, StateId};
use super::sparse_set::SparseSet;

/// A state in the DFA.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DfaState {
    pub accepting: bool,
    /// Disjoint ranges, sorted by start.
    pub transitions: Vec<(CharRange, StateId)>,
}

impl DfaState {
    /// The distinct targets of this state's transitions, sorted.
    ///
    /// More than one entry means the state is a true fork; several ranges
    /// into one target are not.
    pub fn destinations(&self) -> Vec<StateId> {
        let mut targets: Vec<StateId> = self.transitions.iter().map(|&(_, t)| t).collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }

    /// The smallest range covering every transition, if there are any.
    pub fn span(&self) -> Option<CharRange> {
        let (first, _) = self.transitions.first()?;
        let (last, _) = self.transitions.last()?;
        Some(first.span(last))
    }
}

/// A deterministic automaton. State 0 is the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<DfaState>,
}

impl Dfa {
    /// Subset construction over `nfa`.
    ///
    /// States are numbered in discovery order, breadth first from the
    /// closure of the NFA start, which becomes state 0.
    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        let mut set = nfa.state_set();
        let mut stack = Vec::new();

        set.insert(nfa.start().index());
        nfa.epsilon_closure(&mut set, &mut stack);

        let mut states = vec![DfaState {
            accepting: nfa.any_accepting(&set),
            transitions: Vec::new(),
        }];
        let mut closures = vec![closure_key(&set)];
        let mut ids: FxHashMap<Vec<usize>, StateId> = FxHashMap::default();
        ids.insert(closures[0].clone(), StateId::new(0));

        let mut pending = VecDeque::from([StateId::new(0)]);
        let mut ranges = Vec::new();

        while let Some(current) = pending.pop_front() {
            ranges.clear();
            for &id in &closures[current.index()] {
                ranges.extend(nfa.state(StateId::new(id)).transitions.iter().map(|&(r, _)| r));
            }

            let mut transitions = Vec::new();
            for range in CharRange::minimal_covering(&ranges) {
                // Any character of a covering range reaches the same set.
                let representative = range.start();
                set.clear();
                for &id in &closures[current.index()] {
                    for &(r, target) in &nfa.state(StateId::new(id)).transitions {
                        if r.contains(representative) {
                            set.insert(target.index());
                        }
                    }
                }
                if set.is_empty() {
                    continue;
                }
                nfa.epsilon_closure(&mut set, &mut stack);

                let key = closure_key(&set);
                let target = match ids.get(&key) {
                    Some(&id) => id,
                    None => {
                        let id = StateId::new(states.len());
                        states.push(DfaState {
                            accepting: nfa.any_accepting(&set),
                            transitions: Vec::new(),
                        });
                        closures.push(key.clone());
                        ids.insert(key, id);
                        pending.push_back(id);
                        id
                    }
                };
                transitions.push((range, target));
            }
            states[current.index()].transitions = transitions;
        }

        Dfa { states }
    }

    pub(crate) fn from_states(states: Vec<DfaState>) -> Dfa {
        debug_assert!(!states.is_empty(), "a DFA needs a root state");
        Dfa { states }
    }

    #[inline]
    pub fn root(&self) -> StateId {
        StateId::new(0)
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &DfaState {
        &self.states[id.index()]
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.states[id.index()].accepting
    }

    #[inline]
    pub fn transitions(&self, id: StateId) -> &[(CharRange, StateId)] {
        &self.states[id.index()].transitions
    }

    /// The state reached from `id` on `c`, or `None` if `c` is rejected.
    pub fn next_state(&self, id: StateId, c: char) -> Option<StateId> {
        let transitions = &self.states[id.index()].transitions;
        let i = transitions.partition_point(|(r, _)| r.end() < c);
        match transitions.get(i) {
            Some(&(range, target)) if range.contains(c) => Some(target),
            _ => None,
        }
    }

    /// True if the automaton accepts the whole of `input`.
    pub fn matches(&self, input: &str) -> bool {
        let mut state = self.root();
        for c in input.chars() {
            match self.next_state(state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }
}

fn closure_key(set: &SparseSet) -> Vec<usize> {
    let mut key: Vec<usize> = set.iter().collect();
    key.sort_unstable();
    key
}
