//! Thompson construction of an epsilon-NFA from a parsed regexp.
//!
//! Each node becomes a fragment: a start state plus the list of terminal
//! states that the enclosing node wires onward with epsilon transitions.
//! Nothing is simplified here; the subset construction and minimizer remove
//! the redundant epsilon chains this produces.

use crate::regexp::Node;

use super::char_range::CharRange;
use super::nfa::{Nfa, StateId};

/// A partially wired piece of NFA.
struct Fragment {
    start: StateId,
    /// States that reach the end of the fragment. They carry no outgoing
    /// wiring yet.
    terminals: Vec<StateId>,
}

/// Build an epsilon-NFA accepting exactly the strings `node` matches.
///
/// Every terminal of the top-level fragment is wired to a single accepting
/// state, which is the only accepting state of the result.
pub fn build_nfa(node: &Node) -> Nfa {
    let mut builder = NfaBuilder { nfa: Nfa::new() };
    let fragment = builder.build(node);
    let accept = builder.nfa.add_state(true);
    builder.wire(&fragment.terminals, accept);
    builder.nfa.set_start(fragment.start);
    builder.nfa
}

struct NfaBuilder {
    nfa: Nfa,
}

impl NfaBuilder {
    fn build(&mut self, node: &Node) -> Fragment {
        match node {
            Node::Literal(s) => self.literal(s),
            Node::CharRangeSet(ranges) => self.ranges(ranges),
            Node::Concatenation(head, tail) => {
                let head = self.build(head);
                let tail = self.build(tail);
                self.wire(&head.terminals, tail.start);
                Fragment {
                    start: head.start,
                    terminals: tail.terminals,
                }
            }
            Node::Alternation(left, right) => {
                let branch = self.nfa.add_state(false);
                let left = self.build(left);
                let right = self.build(right);
                let end = self.nfa.add_state(false);
                self.nfa.add_epsilon(branch, left.start);
                self.nfa.add_epsilon(branch, right.start);
                self.wire(&left.terminals, end);
                self.wire(&right.terminals, end);
                Fragment {
                    start: branch,
                    terminals: vec![end],
                }
            }
            Node::Repetition(child) => {
                let child = self.build(child);
                let end = self.nfa.add_state(false);
                for &terminal in &child.terminals {
                    self.nfa.add_epsilon(terminal, child.start);
                    self.nfa.add_epsilon(terminal, end);
                }
                self.nfa.add_epsilon(child.start, end);
                Fragment {
                    start: child.start,
                    terminals: vec![end],
                }
            }
            Node::CountedRepetition { node, min, max } => self.counted(node, *min, *max),
        }
    }

    /// One state per character, linked in order. The empty literal is a
    /// single state that is both start and terminal.
    fn literal(&mut self, s: &str) -> Fragment {
        let start = self.nfa.add_state(false);
        let mut current = start;
        for c in s.chars() {
            let next = self.nfa.add_state(false);
            self.nfa.add_transition(current, CharRange::single(c), next);
            current = next;
        }
        Fragment {
            start,
            terminals: vec![current],
        }
    }

    fn ranges(&mut self, ranges: &[CharRange]) -> Fragment {
        let start = self.nfa.add_state(false);
        let end = self.nfa.add_state(false);
        for &range in ranges {
            self.nfa.add_transition(start, range, end);
        }
        Fragment {
            start,
            terminals: vec![end],
        }
    }

    /// `min` mandatory copies, then `max - min` optional ones. Every optional
    /// copy may be skipped straight to the shared end state.
    fn counted(&mut self, node: &Node, min: u32, max: u32) -> Fragment {
        let start = self.nfa.add_state(false);
        let mut terminals = vec![start];

        for _ in 0..min {
            let copy = self.build(node);
            self.wire(&terminals, copy.start);
            terminals = copy.terminals;
        }

        if max > min {
            let end = self.nfa.add_state(false);
            for _ in min..max {
                let copy = self.build(node);
                for &terminal in &terminals {
                    self.nfa.add_epsilon(terminal, copy.start);
                    self.nfa.add_epsilon(terminal, end);
                }
                terminals = copy.terminals;
            }
            terminals.push(end);
        }

        Fragment { start, terminals }
    }

    fn wire(&mut self, from: &[StateId], to: StateId) {
        for &state in from {
            self.nfa.add_epsilon(state, to);
        }
    }
}
