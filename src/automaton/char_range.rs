//! Closed character intervals and alphabet partitioning.
//!
//! Transitions in both automata are labelled with `CharRange`s. Two
//! operations over collections of ranges drive construction:
//! - `compact`: merge overlapping or adjacent ranges into the fewest ranges
//!   covering the same characters (used for character classes)
//! - `minimal_covering`: split overlapping ranges into the coarsest set of
//!   disjoint ranges such that every input range is a union of output ranges
//!   (used to partition the alphabet during subset construction)

use std::fmt;

/// Surrogate range boundaries (these are invalid Unicode code points for chars)
const SURROGATE_START_CP: u32 = 0xD800;
const SURROGATE_END_CP: u32 = 0xDFFF;

/// An inclusive range of characters `[start, end]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharRange {
    start: char,
    end: char,
}

impl CharRange {
    /// Panics if `start > end`.
    pub fn new(start: char, end: char) -> Self {
        assert!(
            start <= end,
            "invalid CharRange: start {:?} > end {:?}",
            start,
            end
        );
        CharRange { start, end }
    }

    pub fn single(c: char) -> Self {
        CharRange { start: c, end: c }
    }

    #[inline]
    pub fn start(&self) -> char {
        self.start
    }

    #[inline]
    pub fn end(&self) -> char {
        self.end
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters in the range.
    pub fn len(&self) -> usize {
        let (lo, hi) = (self.start as u32, self.end as u32);
        let mut n = hi - lo + 1;
        if lo < SURROGATE_START_CP && hi > SURROGATE_END_CP {
            n -= SURROGATE_END_CP - SURROGATE_START_CP + 1;
        }
        n as usize
    }

    /// A range always holds at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over every character in the range.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        // RangeInclusive<char> skips the surrogate gap.
        self.start..=self.end
    }

    /// The smallest range containing both `self` and `other`.
    pub fn span(&self, other: &CharRange) -> CharRange {
        CharRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Merge overlapping and adjacent ranges, returning them sorted by start.
    pub fn compact(ranges: &[CharRange]) -> Vec<CharRange> {
        if ranges.is_empty() {
            return Vec::new();
        }

        let mut sorted = ranges.to_vec();
        sorted.sort();

        let mut out = Vec::with_capacity(sorted.len());
        let mut current = sorted[0];

        for next in sorted.iter().skip(1).copied() {
            if next.start as u32 > current.end as u32 + 1
                && !(current.end as u32 + 1 == SURROGATE_START_CP
                    && next.start as u32 == SURROGATE_END_CP + 1)
            {
                out.push(current);
                current = next;
                continue;
            }
            if next.end > current.end {
                current.end = next.end;
            }
        }
        out.push(current);
        out
    }

    /// Partition `ranges` into the coarsest sorted list of disjoint ranges
    /// such that each input range is exactly a union of output ranges.
    ///
    /// Characters covered by no input range are not covered by the output.
    pub fn minimal_covering(ranges: &[CharRange]) -> Vec<CharRange> {
        if ranges.is_empty() {
            return Vec::new();
        }

        // Boundary points as code points: each range opens at `start` and
        // closes just after `end`.
        let mut points: Vec<(u32, i32)> = Vec::with_capacity(ranges.len() * 2);
        for r in ranges {
            points.push((r.start as u32, 1));
            points.push((r.end as u32 + 1, -1));
        }
        points.sort_unstable();

        let mut out = Vec::new();
        let mut depth = 0i32;
        let mut i = 0;
        while i < points.len() {
            let at = points[i].0;
            while i < points.len() && points[i].0 == at {
                depth += points[i].1;
                i += 1;
            }
            if depth > 0 && i < points.len() {
                let next = points[i].0;
                if let Some(range) = range_from_code_points(at, next - 1) {
                    out.push(range);
                }
            }
        }
        out
    }
}

/// Builds a range from code points, trimming any part that falls inside the
/// surrogate gap.
fn range_from_code_points(lo: u32, hi: u32) -> Option<CharRange> {
    let lo = if (SURROGATE_START_CP..=SURROGATE_END_CP).contains(&lo) {
        SURROGATE_END_CP + 1
    } else {
        lo
    };
    let hi = if (SURROGATE_START_CP..=SURROGATE_END_CP).contains(&hi) {
        SURROGATE_START_CP - 1
    } else {
        hi
    };
    if lo > hi {
        return None;
    }
    let start = char::from_u32(lo)?;
    let end = char::from_u32(hi)?;
    Some(CharRange { start, end })
}

impl fmt::Debug for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{:?}", self.start)
        } else {
            write!(f, "{:?}..={:?}", self.start, self.end)
        }
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
