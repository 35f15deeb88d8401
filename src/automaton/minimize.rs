//! DFA minimization by partition refinement.
//!
//! Start from the accepting / non-accepting split and repeatedly split every
//! class whose members disagree on which class some character leads to,
//! until a round splits nothing. Each surviving class becomes one state.

use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashMap;

use super::char_range::CharRange;
use super::dfa::{Dfa, DfaState};
use super::nfa::StateId;

/// A state's behaviour under the current partition: its own class and, per
/// character, the class it moves to.
type Signature = (usize, Vec<(CharRange, usize)>);

/// Produce the minimal DFA accepting the same language as `dfa`.
///
/// Classes are numbered breadth first from the root's class, so the root is
/// state 0 again. A merged state keeps the transition ranges of its lowest
/// numbered member.
pub fn minimize(dfa: &Dfa) -> Dfa {
    let n = dfa.len();
    if n == 0 {
        return dfa.clone();
    }

    let mut class: Vec<usize> = dfa.states().iter().map(|s| usize::from(s.accepting)).collect();
    let mut count = renumber(&mut class);
    let mut round = 0;

    loop {
        round += 1;
        let mut signatures: FxHashMap<Signature, usize> = FxHashMap::default();
        let mut refined = Vec::with_capacity(n);
        for (id, state) in dfa.states().iter().enumerate() {
            let signature = (class[id], signature(state, &class));
            let next = signatures.len();
            refined.push(*signatures.entry(signature).or_insert(next));
        }

        let refined_count = signatures.len();
        trace!("minimize round {}: {} -> {} classes", round, count, refined_count);
        class = refined;
        if refined_count == count {
            break;
        }
        count = refined_count;
    }

    rebuild(dfa, &class, count)
}

/// Number the classes in order of first appearance; returns how many there
/// are.
fn renumber(class: &mut [usize]) -> usize {
    let mut seen: FxHashMap<usize, usize> = FxHashMap::default();
    for c in class.iter_mut() {
        let next = seen.len();
        *c = *seen.entry(*c).or_insert(next);
    }
    seen.len()
}

/// Transitions with targets replaced by their class. Neighbouring ranges that
/// lead to the same class are merged so that states which split the alphabet
/// differently but behave the same compare equal.
fn signature(state: &DfaState, class: &[usize]) -> Vec<(CharRange, usize)> {
    let mut out: Vec<(CharRange, usize)> = Vec::with_capacity(state.transitions.len());
    for &(range, target) in &state.transitions {
        let target = class[target.index()];
        if let Some((last, last_target)) = out.last_mut() {
            if *last_target == target && adjacent(*last, range) {
                *last = last.span(&range);
                continue;
            }
        }
        out.push((range, target));
    }
    out
}

fn adjacent(left: CharRange, right: CharRange) -> bool {
    match char::from_u32(left.end() as u32 + 1) {
        Some(next) => next == right.start(),
        // Only the surrogate gap lies between '\u{D7FF}' and '\u{E000}'.
        None => left.end() == '\u{D7FF}' && right.start() == '\u{E000}',
    }
}

fn rebuild(dfa: &Dfa, class: &[usize], count: usize) -> Dfa {
    let mut representative = vec![usize::MAX; count];
    for (id, &c) in class.iter().enumerate() {
        if representative[c] == usize::MAX {
            representative[c] = id;
        }
    }

    // Breadth first over classes from the root's.
    let mut order = vec![usize::MAX; count];
    let mut queue = VecDeque::from([class[dfa.root().index()]]);
    let mut next_id = 0;
    order[class[dfa.root().index()]] = next_id;
    next_id += 1;
    while let Some(c) = queue.pop_front() {
        for &(_, target) in dfa.transitions(StateId::new(representative[c])) {
            let tc = class[target.index()];
            if order[tc] == usize::MAX {
                order[tc] = next_id;
                next_id += 1;
                queue.push_back(tc);
            }
        }
    }

    let mut states = vec![DfaState::default(); next_id];
    for c in 0..count {
        if order[c] == usize::MAX {
            continue;
        }
        let rep = dfa.state(StateId::new(representative[c]));
        states[order[c]] = DfaState {
            accepting: rep.accepting,
            transitions: rep
                .transitions
                .iter()
                .map(|&(range, target)| (range, StateId::new(order[class[target.index()]])))
                .collect(),
        };
    }
    Dfa::from_states(states)
}
