//! Automaton construction and analysis.
//!
//! A parsed pattern goes through these stages:
//!
//! - `fa_builders`: Thompson construction of an epsilon-NFA from the AST
//! - `dfa`: subset construction of a DFA from the NFA
//! - `minimize`: partition refinement down to the minimal DFA
//! - `offsets`: forced-transition analysis (`chain`, `offset`, `offsets`)
//!
//! # Module Organization
//!
//! - `sparse_set`: O(1)-clearable integer sets used for state bookkeeping
//! - `char_range`: transition labels, compaction and minimal covering
//! - `nfa`: the arena epsilon-NFA and its simulation

mod char_range;
mod dfa;
mod fa_builders;
mod minimize;
mod nfa;
mod offsets;
mod sparse_set;

pub use char_range::CharRange;
pub use dfa::{Dfa, DfaState};
pub use fa_builders::build_nfa;
pub use minimize::minimize;
pub use nfa::{Nfa, NfaState, StateId};
pub use offsets::Offset;
pub use sparse_set::{SparseSet, SparseSets};
