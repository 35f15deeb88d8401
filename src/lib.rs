//! needle: compiles regular expressions into minimal DFAs, together with the
//! literal facts a matcher can use to skip input before running them.
//!
//! ```
//! let compiled = needle::compile("ab(cd|ef)ghi").unwrap();
//!
//! assert!(compiled.is_match("abefghi"));
//! assert!(!compiled.is_match("abcghi"));
//!
//! // "ab" is forced before the first fork
//! assert_eq!(compiled.chain().len(), 2);
//! // every match contains "ghi"
//! let factors = compiled.factorization().factors().unwrap();
//! assert!(factors.iter().all(|f| f.contains("ghi")));
//! ```
//!
//! Compilation runs parse, Thompson construction, subset construction,
//! minimization and the forced-transition analysis in one synchronous call.
//! The result is immutable and can be shared across threads.

pub mod automaton;
pub mod regexp;

#[cfg(test)]
mod regexp_samples;

use std::collections::BTreeMap;

use log::debug;

use automaton::{build_nfa, minimize, CharRange, Dfa, Offset, StateId};
use regexp::{parse_regexp, Factorization, Node};

pub use regexp::SyntaxError;

/// A compiled pattern: the minimal DFA plus the metadata derived from it and
/// from the syntax tree.
#[derive(Clone, Debug)]
pub struct CompiledAutomaton {
    pattern: String,
    ast: Node,
    dfa: Dfa,
    chain: Vec<CharRange>,
    offset: Option<Offset>,
    offsets: BTreeMap<StateId, Offset>,
    factorization: Factorization,
}

/// Compile `pattern` into a minimal DFA.
pub fn compile(pattern: &str) -> Result<CompiledAutomaton, SyntaxError> {
    let ast = parse_regexp(pattern)?;
    Ok(CompiledAutomaton::build(pattern.to_string(), ast))
}

/// Compile the reversal of `pattern`: the result accepts exactly the
/// reversed strings `pattern` accepts.
pub fn compile_reversed(pattern: &str) -> Result<CompiledAutomaton, SyntaxError> {
    Ok(compile(pattern)?.reversed())
}

impl CompiledAutomaton {
    fn build(pattern: String, ast: Node) -> CompiledAutomaton {
        let nfa = build_nfa(&ast);
        let raw = Dfa::from_nfa(&nfa);
        let dfa = minimize(&raw);
        let chain = dfa.chain();
        let offset = dfa.offset();
        let offsets = dfa.offsets();
        let factorization = ast.best_factors();

        debug!(
            "compiled {:?}: {} NFA states, {} DFA states, {} minimal, chain {}",
            pattern,
            nfa.len(),
            raw.len(),
            dfa.len(),
            chain.len()
        );

        CompiledAutomaton {
            pattern,
            ast,
            dfa,
            chain,
            offset,
            offsets,
            factorization,
        }
    }

    /// The automaton for the reversed language.
    ///
    /// Its `pattern` is the reversed tree rendered back to pattern syntax.
    pub fn reversed(&self) -> CompiledAutomaton {
        let ast = self.ast.reversed();
        CompiledAutomaton::build(ast.to_string(), ast)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn ast(&self) -> &Node {
        &self.ast
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Forced ranges from the root; empty when the root forks.
    pub fn chain(&self) -> &[CharRange] {
        &self.chain
    }

    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    pub fn offsets(&self) -> &BTreeMap<StateId, Offset> {
        &self.offsets
    }

    pub fn factorization(&self) -> &Factorization {
        &self.factorization
    }

    /// True if the whole of `input` matches.
    pub fn is_match(&self, input: &str) -> bool {
        self.dfa.matches(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_and_match() {
        let compiled = compile("a[0-9]+z?").unwrap();
        assert_eq!(compiled.pattern(), "a[0-9]+z?");
        assert!(compiled.is_match("a1"));
        assert!(compiled.is_match("a123z"));
        assert!(!compiled.is_match("a"));
        assert!(!compiled.is_match("a1zz"));
    }

    #[test]
    fn test_syntax_error() {
        let err = compile("a(b").unwrap_err();
        assert_eq!(err.offset, 1);
        assert!(err.to_string().ends_with("at offset 1"));
    }

    #[test]
    fn test_metadata() {
        let compiled = compile("abc").unwrap();
        assert_eq!(compiled.chain().len(), 3);
        assert_eq!(
            compiled.offset(),
            Some(Offset {
                depth: 2,
                range: CharRange::single('c')
            })
        );
        assert_eq!(compiled.offsets().len(), 1);
        let all = compiled.factorization().all().unwrap();
        assert_eq!(all.iter().collect::<Vec<_>>(), vec!["abc"]);
        assert_eq!(compiled.dfa().len(), 4);
    }

    #[test]
    fn test_reversed() {
        let forward = compile("ab*c").unwrap();
        let backward = compile_reversed("ab*c").unwrap();
        assert_eq!(backward.pattern(), "cb*a");
        assert!(backward.is_match("cbba"));
        assert!(!backward.is_match("abbc"));
        assert_eq!(forward.reversed().dfa(), backward.dfa());
        assert_eq!(backward.reversed().ast(), forward.ast());
    }

    #[test]
    fn test_reversed_pattern_with_empty_branch() {
        let backward = compile_reversed("(ab|())c").unwrap();
        assert_eq!(backward.pattern(), "c(ba|())");
        assert!(backward.is_match("c"));
        assert!(backward.is_match("cba"));
        let reparsed = compile(backward.pattern()).unwrap();
        assert_eq!(reparsed.dfa(), backward.dfa());

        assert_eq!(compile_reversed("()|a").unwrap().pattern(), "()|a");
    }

    #[test]
    fn test_compile_keyword_list() {
        let words: Vec<String> = (0..3000).map(|i| format!("w{}", i)).collect();
        let compiled = compile(&words.join("|")).unwrap();
        assert!(compiled.is_match("w0"));
        assert!(compiled.is_match("w1234"));
        assert!(compiled.is_match("w2999"));
        assert!(!compiled.is_match("w3000"));
        assert!(!compiled.is_match("w"));
        assert_eq!(compiled.chain().len(), 1);
        assert_eq!(compiled.factorization().all(), None);
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledAutomaton>();

        let compiled = std::sync::Arc::new(compile("(ab|cd)efg").unwrap());
        let handles: Vec<_> = ["abefg", "cdefg", "abcdefg"]
            .into_iter()
            .map(|input| {
                let compiled = std::sync::Arc::clone(&compiled);
                std::thread::spawn(move || compiled.is_match(input))
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, true, false]);
    }
}
