//! The parsed form of a pattern.
//!
//! Every algorithm over the tree (lengths, reversal, factorization, NFA
//! construction) is an exhaustive match over `Node`.

use std::fmt;

use crate::automaton::CharRange;

use super::factorization::Factorization;

/// A node of the regexp syntax tree.
///
/// Nodes own their children; the tree is never shared or mutated once the
/// parser hands it out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A run of literal characters. The empty literal matches the empty string.
    Literal(String),
    /// `head` followed by `tail`.
    Concatenation(Box<Node>, Box<Node>),
    /// Either side.
    Alternation(Box<Node>, Box<Node>),
    /// Zero or more repetitions (`*`).
    Repetition(Box<Node>),
    /// Between `min` and `max` repetitions, inclusive.
    CountedRepetition { node: Box<Node>, min: u32, max: u32 },
    /// Any single character in one of the ranges.
    CharRangeSet(Vec<CharRange>),
}

impl Node {
    pub fn literal(s: impl Into<String>) -> Node {
        Node::Literal(s.into())
    }

    pub fn concatenation(head: Node, tail: Node) -> Node {
        Node::Concatenation(Box::new(head), Box::new(tail))
    }

    pub fn alternation(left: Node, right: Node) -> Node {
        Node::Alternation(Box::new(left), Box::new(right))
    }

    pub fn repetition(node: Node) -> Node {
        Node::Repetition(Box::new(node))
    }

    /// Panics if `min > max`.
    pub fn counted_repetition(node: Node, min: u32, max: u32) -> Node {
        assert!(min <= max, "counted repetition with min {} > max {}", min, max);
        Node::CountedRepetition {
            node: Box::new(node),
            min,
            max,
        }
    }

    pub fn range(range: CharRange) -> Node {
        Node::CharRangeSet(vec![range])
    }

    /// Length of the shortest string this node matches.
    pub fn min_length(&self) -> usize {
        match self {
            Node::Literal(s) => s.chars().count(),
            Node::Concatenation(head, tail) => head.min_length() + tail.min_length(),
            Node::Alternation(left, right) => left.min_length().min(right.min_length()),
            Node::Repetition(_) => 0,
            Node::CountedRepetition { node, min, .. } => node.min_length() * *min as usize,
            Node::CharRangeSet(_) => 1,
        }
    }

    /// Length of the longest string this node matches, if bounded.
    pub fn max_length(&self) -> Option<usize> {
        match self {
            Node::Literal(s) => Some(s.chars().count()),
            Node::Concatenation(head, tail) => Some(head.max_length()? + tail.max_length()?),
            Node::Alternation(left, right) => Some(left.max_length()?.max(right.max_length()?)),
            Node::Repetition(_) => None,
            Node::CountedRepetition { node, max, .. } => {
                node.max_length()?.checked_mul(*max as usize)
            }
            Node::CharRangeSet(_) => Some(1),
        }
    }

    /// Depth of the tree rooted here; leaves have height 1.
    pub fn height(&self) -> usize {
        match self {
            Node::Literal(_) | Node::CharRangeSet(_) => 1,
            Node::Concatenation(a, b) | Node::Alternation(a, b) => 1 + a.height().max(b.height()),
            Node::Repetition(node) | Node::CountedRepetition { node, .. } => 1 + node.height(),
        }
    }

    /// A node matching exactly the reversals of the strings this node matches.
    pub fn reversed(&self) -> Node {
        match self {
            Node::Literal(s) => Node::Literal(s.chars().rev().collect()),
            Node::Concatenation(head, tail) => Node::concatenation(tail.reversed(), head.reversed()),
            Node::Alternation(left, right) => Node::alternation(left.reversed(), right.reversed()),
            Node::Repetition(node) => Node::repetition(node.reversed()),
            Node::CountedRepetition { node, min, max } => {
                Node::counted_repetition(node.reversed(), *min, *max)
            }
            Node::CharRangeSet(ranges) => Node::CharRangeSet(ranges.clone()),
        }
    }

    /// Literal constraints usable to prefilter input before running the DFA.
    pub fn best_factors(&self) -> Factorization {
        Factorization::of(self)
    }

    fn needs_group(&self) -> bool {
        match self {
            Node::Literal(s) => s.chars().count() > 1,
            Node::Concatenation(..) | Node::Alternation(..) => true,
            Node::Repetition(_) | Node::CountedRepetition { .. } | Node::CharRangeSet(_) => false,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_group() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

/// Renders the node back into pattern syntax that parses to an equivalent
/// tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // an empty branch or operand has to stay visible
            Node::Literal(s) if s.is_empty() => write!(f, "()"),
            Node::Literal(s) => write!(f, "{}", s),
            Node::Concatenation(head, tail) => {
                match head.as_ref() {
                    Node::Alternation(..) => write!(f, "({})", head)?,
                    _ => write!(f, "{}", head)?,
                }
                match tail.as_ref() {
                    Node::Alternation(..) => write!(f, "({})", tail),
                    _ => write!(f, "{}", tail),
                }
            }
            Node::Alternation(left, right) => write!(f, "{}|{}", left, right),
            Node::Repetition(node) => {
                node.fmt_operand(f)?;
                write!(f, "*")
            }
            Node::CountedRepetition { node, min, max } => {
                node.fmt_operand(f)?;
                write!(f, "{{{},{}}}", min, max)
            }
            Node::CharRangeSet(ranges) => {
                write!(f, "[")?;
                for range in ranges {
                    write!(f, "{}", range)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Node {
        Node::literal(s)
    }

    #[test]
    fn test_lengths() {
        let node = Node::concatenation(lit("ab"), Node::repetition(lit("c")));
        assert_eq!(node.min_length(), 2);
        assert_eq!(node.max_length(), None);

        let node = Node::counted_repetition(lit("ab"), 1, 3);
        assert_eq!(node.min_length(), 2);
        assert_eq!(node.max_length(), Some(6));

        let node = Node::alternation(lit("abc"), Node::range(CharRange::new('a', 'z')));
        assert_eq!(node.min_length(), 1);
        assert_eq!(node.max_length(), Some(3));
    }

    #[test]
    fn test_height() {
        assert_eq!(lit("abc").height(), 1);
        let node = Node::concatenation(lit("a"), Node::repetition(lit("b")));
        assert_eq!(node.height(), 3);
    }

    #[test]
    fn test_reversed() {
        let node = Node::concatenation(lit("ab"), Node::alternation(lit("cd"), lit("e")));
        let expected = Node::concatenation(Node::alternation(lit("dc"), lit("e")), lit("ba"));
        assert_eq!(node.reversed(), expected);
        assert_eq!(node.reversed().reversed(), node);
    }

    #[test]
    fn test_display() {
        let node = Node::concatenation(
            lit("ab"),
            Node::counted_repetition(Node::alternation(lit("cd"), lit("e")), 0, 2),
        );
        assert_eq!(node.to_string(), "ab(cd|e){0,2}");
        let node = Node::repetition(Node::range(CharRange::new('a', 'z')));
        assert_eq!(node.to_string(), "[a-z]*");
    }

    #[test]
    fn test_display_empty_literal() {
        assert_eq!(lit("").to_string(), "()");
        assert_eq!(Node::alternation(lit(""), lit("a")).to_string(), "()|a");
        assert_eq!(Node::repetition(lit("")).to_string(), "()*");
    }

    #[test]
    fn test_display_reparses() {
        use crate::regexp::parse_regexp;
        for pattern in ["()|a", "a|()", "(a|())b", "c([a]|())(()|b{2,2})", ""] {
            let node = parse_regexp(pattern).unwrap();
            let rendered = node.to_string();
            let reparsed = parse_regexp(&rendered)
                .unwrap_or_else(|e| panic!("{:?} rendered as {:?}: {}", pattern, rendered, e));
            assert_eq!(reparsed, node, "{:?} rendered as {:?}", pattern, rendered);
        }
    }

    #[test]
    #[should_panic(expected = "min 3 > max 1")]
    fn test_counted_repetition_bounds() {
        Node::counted_repetition(lit("a"), 3, 1);
    }
}
