//! Regexp parsing.
//!
//! A single left-to-right scan over the pattern, reducing an explicit stack
//! of partial results. Supports:
//! - literal characters
//! - `[...]` character classes with ranges
//! - `|` alternation
//! - `(...)` grouping
//! - `?` optional quantifier
//! - `+` one-or-more quantifier
//! - `*` zero-or-more quantifier
//! - `{m,n}` range quantifiers
//!
//! There is no escape character; `(`, `)`, `[`, `]`, `{`, `}`, `|`, `*`, `+`
//! and `?` are always operators.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::automaton::CharRange;

use super::node::Node;

/// Error type for regexp parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    /// Byte offset into the pattern where the error was found.
    pub offset: usize,
}

impl SyntaxError {
    fn new(message: impl Into<String>, offset: usize) -> Self {
        SyntaxError {
            message: message.into(),
            offset,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}

impl std::error::Error for SyntaxError {}

/// One entry of the parse stack.
#[derive(Debug)]
enum Entry {
    /// A finished subtree.
    Node(Node),
    /// Literal characters still being accumulated.
    Literal(String),
    /// An open `(` at the given offset.
    Group(usize),
    /// Branches of an alternation, waiting for the branch after the last `|`.
    Alternation(Vec<Node>),
}

/// Parser state for regexp parsing.
struct RegexpParse<'a> {
    pattern: &'a str,
    chars: Peekable<CharIndices<'a>>,
    stack: Vec<Entry>,
}

/// Parse a regexp string into a syntax tree.
pub fn parse_regexp(re: &str) -> Result<Node, SyntaxError> {
    RegexpParse::new(re).parse()
}

impl<'a> RegexpParse<'a> {
    fn new(pattern: &'a str) -> Self {
        RegexpParse {
            pattern,
            chars: pattern.char_indices().peekable(),
            stack: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Node, SyntaxError> {
        while let Some((offset, c)) = self.chars.next() {
            match c {
                '(' => self.stack.push(Entry::Group(offset)),
                ')' => self.close_group(offset)?,
                '|' => {
                    if self.chars.peek().is_none() {
                        return Err(SyntaxError::new(
                            "'|' cannot be the final character in a regex",
                            offset,
                        ));
                    }
                    let pending = matches!(self.stack.last(), Some(Entry::Alternation(_)));
                    let branch = self.concat_run().ok_or_else(|| {
                        if pending {
                            SyntaxError::new("alternation needed something to alternate", offset)
                        } else {
                            SyntaxError::new("found '|' with no preceding content", offset)
                        }
                    })?;
                    if let Some(Entry::Alternation(branches)) = self.stack.last_mut() {
                        branches.push(branch);
                    } else {
                        self.stack.push(Entry::Alternation(vec![branch]));
                    }
                }
                '*' => {
                    let node = self.take_operand(c, offset)?;
                    self.stack.push(Entry::Node(Node::repetition(node)));
                }
                '+' => {
                    let node = self.take_operand(c, offset)?;
                    let repeated = Node::repetition(node.clone());
                    self.stack.push(Entry::Node(Node::concatenation(node, repeated)));
                }
                '?' => {
                    let node = self.take_operand(c, offset)?;
                    self.stack.push(Entry::Node(Node::counted_repetition(node, 0, 1)));
                }
                '{' => {
                    let node = self.take_operand(c, offset)?;
                    let (min, max) = self.read_range_quantifier(offset)?;
                    self.stack.push(Entry::Node(Node::counted_repetition(node, min, max)));
                }
                '[' => {
                    let node = self.read_char_class(offset)?;
                    self.stack.push(Entry::Node(node));
                }
                '}' => return Err(SyntaxError::new("unbalanced '}'", offset)),
                ']' => return Err(SyntaxError::new("unbalanced ']'", offset)),
                _ => match self.stack.last_mut() {
                    Some(Entry::Literal(s)) => s.push(c),
                    _ => self.stack.push(Entry::Literal(c.to_string())),
                },
            }
        }

        let end = self.pattern.len();
        let node = self.reduce(end)?;
        if let Some(Entry::Group(offset)) = self.stack.last() {
            return Err(SyntaxError::new("unbalanced '('", *offset));
        }
        debug_assert!(self.stack.is_empty());
        Ok(node.unwrap_or_else(|| Node::literal("")))
    }

    /// Collapse every entry above the innermost open group into one node.
    ///
    /// A pending alternation takes the collapsed run as its last branch.
    /// Returns `None` when there is nothing to collapse.
    fn reduce(&mut self, offset: usize) -> Result<Option<Node>, SyntaxError> {
        let run = self.concat_run();
        match self.stack.pop() {
            Some(Entry::Alternation(mut branches)) => {
                let last = run.ok_or_else(|| {
                    SyntaxError::new("alternation needed something to alternate", offset)
                })?;
                branches.push(last);
                Ok(balanced(branches, Node::alternation))
            }
            other => {
                if let Some(entry) = other {
                    self.stack.push(entry);
                }
                Ok(run)
            }
        }
    }

    /// Concatenate the entries above the innermost open group or pending
    /// alternation. Adjacent literals merge.
    fn concat_run(&mut self) -> Option<Node> {
        // right to left
        let mut items: Vec<Node> = Vec::new();
        while let Some(entry) = self.stack.pop() {
            let next = match entry {
                Entry::Group(_) | Entry::Alternation(_) => {
                    self.stack.push(entry);
                    break;
                }
                Entry::Literal(s) => Node::Literal(s),
                Entry::Node(n) => n,
            };
            let next = match (next, items.last_mut()) {
                (Node::Literal(mut head), Some(Node::Literal(tail))) => {
                    head.push_str(tail.as_str());
                    *tail = head;
                    continue;
                }
                (next, _) => next,
            };
            items.push(next);
        }
        items.reverse();
        balanced(items, Node::concatenation)
    }

    fn close_group(&mut self, offset: usize) -> Result<(), SyntaxError> {
        let node = self.reduce(offset)?;
        match self.stack.pop() {
            Some(Entry::Group(_)) => {
                self.stack
                    .push(Entry::Node(node.unwrap_or_else(|| Node::literal(""))));
                Ok(())
            }
            _ => Err(SyntaxError::new("found unbalanced ')'", offset)),
        }
    }

    /// Pop the operand of a quantifier. A quantifier after a literal run
    /// applies to its last character only.
    fn take_operand(&mut self, quantifier: char, offset: usize) -> Result<Node, SyntaxError> {
        match self.stack.pop() {
            Some(Entry::Node(node)) => Ok(node),
            Some(Entry::Literal(mut s)) => {
                let Some(last) = s.pop() else {
                    return Err(SyntaxError::new(
                        format!("'{}' has nothing to repeat", quantifier),
                        offset,
                    ));
                };
                if !s.is_empty() {
                    self.stack.push(Entry::Literal(s));
                }
                Ok(Node::Literal(last.to_string()))
            }
            other => {
                if let Some(entry) = other {
                    self.stack.push(entry);
                }
                Err(SyntaxError::new(
                    format!("'{}' has nothing to repeat", quantifier),
                    offset,
                ))
            }
        }
    }

    /// Read `m,n}` after an opening `{`.
    fn read_range_quantifier(&mut self, open: usize) -> Result<(u32, u32), SyntaxError> {
        let min = self.read_count(open)?;
        self.require(',', open)?;
        let max = self.read_count(open)?;
        self.require('}', open)?;
        if min > max {
            return Err(SyntaxError::new(
                format!("invalid repetition range {{{},{}}}", min, max),
                open,
            ));
        }
        Ok((min, max))
    }

    fn read_count(&mut self, open: usize) -> Result<u32, SyntaxError> {
        let start = self.position();
        while let Some((_, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.chars.next();
        }
        let end = self.position();
        if self.chars.peek().is_none() {
            return Err(SyntaxError::new("unterminated '{'", open));
        }
        let digits = &self.pattern[start..end];
        digits.parse().map_err(|_| {
            SyntaxError::new(format!("expected number, found '{}'", digits), start)
        })
    }

    fn require(&mut self, wanted: char, open: usize) -> Result<(), SyntaxError> {
        match self.chars.next() {
            Some((_, c)) if c == wanted => Ok(()),
            Some((offset, c)) => Err(SyntaxError::new(
                format!("expected '{}', found '{}'", wanted, c),
                offset,
            )),
            None => Err(SyntaxError::new("unterminated '{'", open)),
        }
    }

    /// Byte offset of the next unread character.
    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.pattern.len(), |(offset, _)| *offset)
    }

    /// Read a character class after an opening `[`.
    fn read_char_class(&mut self, open: usize) -> Result<Node, SyntaxError> {
        let mut ranges = Vec::new();
        let mut last: Option<char> = None;
        loop {
            let (offset, c) = self
                .chars
                .next()
                .ok_or_else(|| SyntaxError::new("unclosed character class", open))?;
            match c {
                ']' => {
                    if let Some(prev) = last {
                        ranges.push(CharRange::single(prev));
                    }
                    return class_node(ranges, open);
                }
                '-' => {
                    let lo = last
                        .take()
                        .ok_or_else(|| SyntaxError::new("range with no start in character class", offset))?;
                    let (hi_offset, hi) = self
                        .chars
                        .next()
                        .ok_or_else(|| SyntaxError::new("unclosed character class", open))?;
                    if matches!(hi, ']' | '[' | '(' | ')') {
                        return Err(SyntaxError::new(
                            format!("invalid range end '{}' in character class", hi),
                            hi_offset,
                        ));
                    }
                    if lo > hi {
                        return Err(SyntaxError::new(
                            format!("invalid range {}-{}", lo, hi),
                            hi_offset,
                        ));
                    }
                    ranges.push(CharRange::new(lo, hi));
                }
                '[' => {
                    return Err(SyntaxError::new(
                        "unexpected '[' inside of character class",
                        offset,
                    ))
                }
                '(' | ')' => {
                    return Err(SyntaxError::new(
                        format!("unexpected '{}' inside of character class", c),
                        offset,
                    ))
                }
                _ => {
                    if let Some(prev) = last.replace(c) {
                        ranges.push(CharRange::single(prev));
                    }
                }
            }
        }
    }
}

/// Build the node for a character class: one range node, or a balanced
/// alternation over the compacted ranges.
fn class_node(ranges: Vec<CharRange>, open: usize) -> Result<Node, SyntaxError> {
    let nodes = CharRange::compact(&ranges).into_iter().map(Node::range).collect();
    balanced(nodes, Node::alternation).ok_or_else(|| SyntaxError::new("empty character class", open))
}

/// Join `nodes` in order into a tree whose depth is logarithmic in their
/// number. Long keyword lists and class runs stay shallow enough for the
/// recursive passes over the tree.
fn balanced(mut nodes: Vec<Node>, join: fn(Node, Node) -> Node) -> Option<Node> {
    if nodes.len() <= 1 {
        return nodes.pop();
    }
    let right = nodes.split_off(nodes.len() / 2);
    Some(join(balanced(nodes, join)?, balanced(right, join)?))
}
