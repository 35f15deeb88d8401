//! Sample patterns with inputs they must and must not match.
//!
//! The valid entries are drawn from the XSLT 4.0 regex test suite
//! (https://github.com/qt4cg/xslt40-test), keeping only patterns inside the
//! supported grammar, plus a few hand-written cases covering non-ASCII input
//! and nested repetition. Invalid entries must fail to parse.

#[derive(Debug)]
pub struct RegexpSample {
    pub regex: &'static str,
    pub matches: &'static [&'static str],
    pub nomatches: &'static [&'static str],
    pub valid: bool,
}

pub static REGEXP_SAMPLES: &[RegexpSample] = &[
    RegexpSample {
        regex: "",
        matches: &[""],
        nomatches: &["a", " ", "\r", "\t", "\n"],
        valid: true,
    },
    RegexpSample {
        regex: "a",
        matches: &["a"],
        nomatches: &["aa", "b", ""],
        valid: true,
    },
    RegexpSample {
        regex: "a|a",
        matches: &["a"],
        nomatches: &["aa", "b", ""],
        valid: true,
    },
    RegexpSample {
        regex: "a|b",
        matches: &["a", "b"],
        nomatches: &["aa", "bb", "ab", ""],
        valid: true,
    },
    RegexpSample {
        regex: "ab",
        matches: &["ab"],
        nomatches: &["a", "b", "aa", "bb", ""],
        valid: true,
    },
    RegexpSample {
        regex: "a|b|a|c|b|d|a",
        matches: &["a", "b", "c", "d"],
        nomatches: &["aa", "ac", "e"],
        valid: true,
    },
    RegexpSample {
        regex: "       a|b      ",
        matches: &["       a"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "ab?c",
        matches: &["ac", "abc"],
        nomatches: &["a", "ab", "bc", ""],
        valid: true,
    },
    RegexpSample {
        regex: "abc?",
        matches: &["ab", "abc"],
        nomatches: &["a", "bc", "abcc", ""],
        valid: true,
    },
    RegexpSample {
        regex: "ab+c",
        matches: &["abc", "abbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbc"],
        nomatches: &["ac", "bbbc", "abbb", ""],
        valid: true,
    },
    RegexpSample {
        regex: "abc+",
        matches: &["abc", "abccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc"],
        nomatches: &["a", "ab", "abcd"],
        valid: true,
    },
    RegexpSample {
        regex: "ab*c",
        matches: &["abc", "abbbbbbbc", "ac"],
        nomatches: &["a", "ab", "bc", "c", "abcb", ""],
        valid: true,
    },
    RegexpSample {
        regex: "abc*",
        matches: &["abc", "ab", "abccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc"],
        nomatches: &["a", "abcd", "abbc", ""],
        valid: true,
    },
    RegexpSample {
        regex: "a?b+c*",
        matches: &["b", "ab", "bcccccc", "abc", "abbbc"],
        nomatches: &["aabc", "a", "c", "ac", ""],
        valid: true,
    },
    RegexpSample {
        regex: "((ab)(ac){0,2})?",
        matches: &["ab", "abac", "abacac"],
        nomatches: &["ac", "abacacac", "abaca", "abab", "abacabac"],
        valid: true,
    },
    RegexpSample {
        regex: "(ab){0,0}",
        matches: &[""],
        nomatches: &["a", "ab"],
        valid: true,
    },
    RegexpSample {
        regex: "a{0,1}b{1,2}c{2,3}",
        matches: &["abcc", "abccc", "abbcc", "abbccc", "bbcc", "bbccc"],
        nomatches: &["aabcc", "bbbcc", "acc", "abbc", "abbcccc"],
        valid: true,
    },
    RegexpSample {
        regex: "[1-3]{1,4}",
        matches: &["123"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "[a-a]",
        matches: &["a"],
        nomatches: &["b"],
        valid: true,
    },
    RegexpSample {
        regex: "[0-z]*",
        matches: &["1234567890:;<=>?@Azaz"],
        nomatches: &["{", "/"],
        valid: true,
    },
    RegexpSample {
        regex: "true",
        matches: &["true"],
        nomatches: &["false"],
        valid: true,
    },
    RegexpSample {
        regex: "false",
        matches: &["false"],
        nomatches: &["true"],
        valid: true,
    },
    RegexpSample {
        regex: "(true|false)",
        matches: &["true", "false"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "(1|true)",
        matches: &["1"],
        nomatches: &["0"],
        valid: true,
    },
    RegexpSample {
        regex: "(1|true|false|0|0)",
        matches: &["0"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "AF01D1",
        matches: &["AF01D1"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "---([123]0)|([12]?[1-9])|(31)",
        matches: &["---30"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "--((0[1-9])|(1(1|2)))--",
        matches: &["--12--"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "[13]",
        matches: &["1", "3"],
        nomatches: &["2"],
        valid: true,
    },
    RegexpSample {
        regex: "[123]+|[abc]+",
        matches: &["112233123", "abcaabbccabc"],
        nomatches: &["1a", "a1"],
        valid: true,
    },
    RegexpSample {
        regex: "([abc]+)|([123]+)",
        matches: &["112233123", "abcaabbccabc", "abab"],
        nomatches: &["1a", "x"],
        valid: true,
    },
    RegexpSample {
        regex: "[abxyz]+",
        matches: &["abab"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "(Foo) (Bar)",
        matches: &["Foo Bar"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "(([0-9])|([a-z])|([A-Z]))*",
        matches: &[""],
        nomatches: &["{hello 1234567890 world}", "{HELLO 1234567890 world}", "{1234567890 hello  world}"],
        valid: true,
    },
    RegexpSample {
        regex: "(111|aaa)",
        matches: &["aaa"],
        nomatches: &[""],
        valid: true,
    },
    RegexpSample {
        regex: "(a|b)*abb",
        matches: &["abb", "aabb", "babb", "ababb"],
        nomatches: &["ab", "abba", ""],
        valid: true,
    },
    RegexpSample {
        regex: "x{2,4}y?",
        matches: &["xx", "xxxy", "xxxx"],
        nomatches: &["x", "xxxxx", "xxyy"],
        valid: true,
    },
    RegexpSample {
        regex: "(ab|a)(bc|c)",
        matches: &["abc", "abbc", "ac"],
        nomatches: &["ab", "abcc", ""],
        valid: true,
    },
    RegexpSample {
        regex: "[a-cx-z]+[0-9]{1,2}",
        matches: &["a1", "zz99", "bxc0"],
        nomatches: &["a", "d1", "a123"],
        valid: true,
    },
    RegexpSample {
        regex: "caf\u{e9}s?",
        matches: &["caf\u{e9}", "caf\u{e9}s"],
        nomatches: &["cafe", "cafes"],
        valid: true,
    },
    RegexpSample {
        regex: "[\u{3b1}-\u{3c9}]+",
        matches: &["\u{3bb}\u{3bf}\u{3b3}\u{3bf}\u{3c2}"],
        nomatches: &["abc", ""],
        valid: true,
    },
    RegexpSample {
        regex: "((a*)*)*b",
        matches: &["b", "aaab"],
        nomatches: &["aaa", ""],
        valid: true,
    },
    RegexpSample {
        regex: "(ab)+",
        matches: &["ab", "ababab"],
        nomatches: &["", "aba"],
        valid: true,
    },
    RegexpSample {
        regex: "(ab",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "ab)",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "a|",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "*a",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "a||b",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "[a-",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "[]",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "a{2}",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "a{3,1}",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "a{1,",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    RegexpSample {
        regex: "[a[b]]",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
];
