//! Literal factorization of a syntax tree.
//!
//! A `Factorization` records, for the strings a node can match, sets of
//! literals usable by a prefilter:
//! - `prefixes`: every match starts with one of these
//! - `suffixes`: every match ends with one of these
//! - `factors`: every match contains one of these
//! - `all`: the complete, finite set of matches
//!
//! `None` means nothing could be derived (the set was unbounded or grew past
//! `MAX_FACTOR_SET_SIZE`). A set containing `""` is derived but carries no
//! filtering power.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use super::node::Node;

/// Largest set of strings a factorization keeps before giving up on it.
pub const MAX_FACTOR_SET_SIZE: usize = 64;

/// Largest character class that is enumerated into single-character strings.
pub const MAX_RANGE_EXPANSION: usize = 16;

/// Largest replica count enumerated for a counted repetition.
pub const MAX_REPETITION_UNROLL: u32 = 8;

/// Largest set of initial characters reported by `initial_chars`.
pub const MAX_INITIAL_CHARS: usize = 8;

pub type StringSet = BTreeSet<String>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Factorization {
    prefixes: Option<StringSet>,
    suffixes: Option<StringSet>,
    factors: Option<StringSet>,
    all: Option<StringSet>,
}

impl Factorization {
    /// Derive the factorization of `node` bottom-up.
    pub fn of(node: &Node) -> Factorization {
        match node {
            Node::Literal(s) => Factorization::exact(std::iter::once(s.clone()).collect()),
            Node::CharRangeSet(ranges) => {
                let size: usize = ranges.iter().map(|r| r.len()).sum();
                if size > MAX_RANGE_EXPANSION {
                    return Factorization::default();
                }
                let strings = ranges
                    .iter()
                    .flat_map(|r| r.chars())
                    .map(String::from)
                    .collect();
                Factorization::exact(strings)
            }
            Node::Concatenation(head, tail) => Factorization::of(head).concatenate(&Factorization::of(tail)),
            Node::Alternation(left, right) => Factorization::of(left).union(&Factorization::of(right)),
            Node::Repetition(child) => {
                // Zero copies may match, so only the trivial factor survives.
                let child = Factorization::of(child);
                Factorization {
                    factors: child.factors.map(|_| empty_string_set()),
                    ..Factorization::default()
                }
            }
            Node::CountedRepetition { node, min, max } => {
                Factorization::counted(&Factorization::of(node), *min, *max)
            }
        }
    }

    /// A factorization whose four sets are all `strings`.
    pub fn exact(strings: StringSet) -> Factorization {
        Factorization {
            prefixes: Some(strings.clone()),
            suffixes: Some(strings.clone()),
            factors: Some(strings.clone()),
            all: Some(strings),
        }
    }

    fn empty_string() -> Factorization {
        Factorization::exact(empty_string_set())
    }

    pub fn prefixes(&self) -> Option<&StringSet> {
        self.prefixes.as_ref()
    }

    pub fn suffixes(&self) -> Option<&StringSet> {
        self.suffixes.as_ref()
    }

    pub fn factors(&self) -> Option<&StringSet> {
        self.factors.as_ref()
    }

    pub fn all(&self) -> Option<&StringSet> {
        self.all.as_ref()
    }

    /// The sorted set of characters a match can start with, when every
    /// prefix is non-empty and there are few of them.
    pub fn initial_chars(&self) -> Option<Vec<char>> {
        let prefixes = self.prefixes.as_ref()?;
        if prefixes.is_empty() {
            return None;
        }
        let mut chars = BTreeSet::new();
        for prefix in prefixes {
            chars.insert(prefix.chars().next()?);
        }
        if chars.len() > MAX_INITIAL_CHARS {
            return None;
        }
        Some(chars.into_iter().collect())
    }

    /// The longest non-empty string every match starts with.
    pub fn shared_prefix(&self) -> Option<String> {
        let mut prefixes = self.prefixes.as_ref()?.iter();
        let first = prefixes.next()?;
        let mut shared = first.chars().count();
        for prefix in prefixes {
            let common = first
                .chars()
                .zip(prefix.chars())
                .take_while(|(a, b)| a == b)
                .count();
            shared = shared.min(common);
        }
        if shared == 0 {
            return None;
        }
        Some(first.chars().take(shared).collect())
    }

    /// Factorization of `self` followed by `other`.
    pub fn concatenate(&self, other: &Factorization) -> Factorization {
        let all = cross(self.all.as_ref(), other.all.as_ref());
        let prefixes = best_owned(
            self.prefixes.clone(),
            cross(self.all.as_ref(), other.prefixes.as_ref()),
        );
        let suffixes = best_owned(
            other.suffixes.clone(),
            cross(self.suffixes.as_ref(), other.all.as_ref()),
        );
        let factors = best_owned(
            best_owned(self.factors.clone(), other.factors.clone()),
            cross(self.suffixes.as_ref(), other.prefixes.as_ref()),
        );
        Factorization {
            prefixes,
            suffixes,
            factors,
            all,
        }
    }

    /// Factorization of matching either `self` or `other`.
    pub fn union(&self, other: &Factorization) -> Factorization {
        Factorization {
            prefixes: union(self.prefixes.as_ref(), other.prefixes.as_ref()),
            suffixes: union(self.suffixes.as_ref(), other.suffixes.as_ref()),
            factors: union(self.factors.as_ref(), other.factors.as_ref()),
            all: union(self.all.as_ref(), other.all.as_ref()),
        }
    }

    fn counted(child: &Factorization, min: u32, max: u32) -> Factorization {
        if max <= MAX_REPETITION_UNROLL {
            let mut power = Factorization::empty_string();
            let mut at_min = None;
            let mut result: Option<Factorization> = None;
            for count in 0..=max {
                if count > 0 {
                    power = power.concatenate(child);
                }
                if count < min {
                    continue;
                }
                if count == min {
                    at_min = Some(power.clone());
                }
                result = Some(match result {
                    Some(acc) => acc.union(&power),
                    None => power.clone(),
                });
            }
            let result = result.unwrap_or_default();
            let fallback = if min == 0 {
                Factorization::empty_string()
            } else {
                at_min.unwrap_or_default()
            };
            return Factorization {
                prefixes: result.prefixes.or(fallback.prefixes),
                suffixes: result.suffixes.or(fallback.suffixes),
                factors: result.factors.or(fallback.factors),
                all: result.all,
            };
        }

        // Too many counts to enumerate. Every match both starts and ends with
        // `unrolled` back-to-back copies.
        let unrolled = min.min(MAX_REPETITION_UNROLL);
        if unrolled == 0 {
            return Factorization {
                all: None,
                ..Factorization::empty_string()
            };
        }
        let mut power = child.clone();
        for _ in 1..unrolled {
            power = power.concatenate(child);
        }
        Factorization { all: None, ..power }
    }
}

fn empty_string_set() -> StringSet {
    std::iter::once(String::new()).collect()
}

/// Every concatenation of a string of `a` with a string of `b`, unless the
/// product would exceed `MAX_FACTOR_SET_SIZE`.
fn cross(a: Option<&StringSet>, b: Option<&StringSet>) -> Option<StringSet> {
    let (a, b) = (a?, b?);
    if a.len().saturating_mul(b.len()) > MAX_FACTOR_SET_SIZE {
        return None;
    }
    let mut out = StringSet::new();
    for x in a {
        for y in b {
            let mut s = String::with_capacity(x.len() + y.len());
            s.push_str(x);
            s.push_str(y);
            out.insert(s);
        }
    }
    Some(out)
}

fn union(a: Option<&StringSet>, b: Option<&StringSet>) -> Option<StringSet> {
    let (a, b) = (a?, b?);
    let merged: StringSet = a.union(b).cloned().collect();
    if merged.len() > MAX_FACTOR_SET_SIZE {
        return None;
    }
    Some(merged)
}

/// Ordering key for `best`: longer shortest string first, then fewer
/// strings, then more total characters.
fn rank(set: &StringSet) -> (usize, Reverse<usize>, usize) {
    let lengths = set.iter().map(|s| s.chars().count());
    let shortest = lengths.clone().min().unwrap_or(0);
    let total = lengths.sum();
    (shortest, Reverse(set.len()), total)
}

/// The more discriminating of two candidate sets for a prefilter scan.
///
/// A missing set loses to a present one and an empty set loses to a
/// non-empty one. Ties go to `b`.
pub fn best<'a>(a: Option<&'a StringSet>, b: Option<&'a StringSet>) -> Option<&'a StringSet> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => {
            if b.is_empty() && !a.is_empty() {
                return Some(a);
            }
            if a.is_empty() {
                return Some(b);
            }
            if rank(a) > rank(b) {
                Some(a)
            } else {
                Some(b)
            }
        }
    }
}

fn best_owned(a: Option<StringSet>, b: Option<StringSet>) -> Option<StringSet> {
    let keep_a = match (best(a.as_ref(), b.as_ref()), a.as_ref()) {
        (Some(chosen), Some(x)) => std::ptr::eq(chosen, x),
        _ => false,
    };
    if keep_a {
        a
    } else {
        b
    }
}
