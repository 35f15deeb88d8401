//! Regexp parsing and literal factorization.
//!
//! The supported grammar is deliberately small:
//! - literal characters
//! - `(...)` grouping
//! - `|` alternation (lowest precedence)
//! - `*`, `+`, `?` and `{m,n}` quantifiers, binding to the preceding
//!   character or group
//! - `[...]` character classes with `a-b` ranges
//!
//! There are no escapes, anchors, negated classes or `.`.

mod factorization;
mod node;
mod parser;

// Re-export public API
pub use factorization::{
    best, Factorization, StringSet, MAX_FACTOR_SET_SIZE, MAX_INITIAL_CHARS, MAX_RANGE_EXPANSION,
    MAX_REPETITION_UNROLL,
};
pub use node::Node;
pub use parser::{parse_regexp, SyntaxError};
