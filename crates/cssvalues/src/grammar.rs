//! Grammar values
//!
//! Property grammars are plain data: leaves, alternating lists,
//! alternations and a handful of hand-written rules.

use cssvalues_parser::Node;

use crate::combinator::{is_variable, Separator};
use crate::keyword::is_keyword;

/// Outcome of matching a grammar against nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
    /// Mismatch with a specific explanation
    Reject(String),
}

impl Verdict {
    pub fn reject(message: impl Into<String>) -> Self {
        Verdict::Reject(message.into())
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched {
            Verdict::Match
        } else {
            Verdict::Mismatch
        }
    }
}

/// Grammar for one node
#[derive(Debug, Clone, Copy)]
pub enum Leaf {
    /// Case-insensitive keyword set
    Keyword(&'static [&'static str]),
    Test(fn(&Node) -> bool),
    /// Test that can explain its rejection
    Check(fn(&Node) -> Verdict),
    /// First leaf that does not plainly mismatch
    Any(&'static [Leaf]),
}

impl Leaf {
    pub fn verdict(&self, node: &Node) -> Verdict {
        match self {
            Leaf::Keyword(set) => is_keyword(node, set).into(),
            Leaf::Test(test) => test(node).into(),
            Leaf::Check(check) => check(node),
            Leaf::Any(leaves) => leaves
                .iter()
                .map(|leaf| leaf.verdict(node))
                .find(|verdict| *verdict != Verdict::Mismatch)
                .unwrap_or(Verdict::Mismatch),
        }
    }

    pub fn matches(&self, node: &Node) -> bool {
        self.verdict(node).is_match()
    }
}

/// Repeated leaf with separators in between
#[derive(Debug, Clone, Copy)]
pub struct List {
    pub item: Leaf,
    pub separator: Separator,
    /// Maximum number of values
    pub max: Option<usize>,
    /// Reject even-length sequences (dangling separators)
    pub strict: bool,
}

impl List {
    pub const fn comma(item: Leaf) -> Self {
        Self {
            item,
            separator: Separator::Comma,
            max: None,
            strict: true,
        }
    }

    pub const fn space(item: Leaf) -> Self {
        Self {
            item,
            separator: Separator::Space,
            max: None,
            strict: true,
        }
    }

    pub const fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn loose(mut self) -> Self {
        self.strict = false;
        self
    }

    pub fn check(&self, nodes: &[Node]) -> Verdict {
        if self.strict && nodes.len() % 2 == 0 {
            return Verdict::Mismatch;
        }
        if let Some(max) = self.max {
            if nodes.len() > max * 2 - 1 {
                return Verdict::reject(format!("Expected a maximum of {} values.", max));
            }
        }

        for (index, node) in nodes.iter().enumerate() {
            if index % 2 == 1 {
                if !self.separator.matches(node) {
                    return Verdict::Mismatch;
                }
                continue;
            }
            if is_variable(node) {
                continue;
            }
            match self.item.verdict(node) {
                Verdict::Match => {}
                other => return other,
            }
        }
        Verdict::Match
    }
}

/// Grammar for a whole declaration value
#[derive(Debug, Clone, Copy)]
pub enum Grammar {
    /// Exactly one node
    Single(Leaf),
    List(List),
    /// First matching alternative; otherwise the last one's verdict
    OneOf(&'static [Grammar]),
    Rule(fn(&[Node]) -> Verdict),
}

impl Grammar {
    pub fn check(&self, nodes: &[Node]) -> Verdict {
        match self {
            Grammar::Single(leaf) => match nodes {
                [node] => leaf.verdict(node),
                _ => Verdict::reject("Expected a single value to be passed."),
            },
            Grammar::List(list) => list.check(nodes),
            Grammar::OneOf(alternatives) => {
                let mut verdict = Verdict::Mismatch;
                for alternative in alternatives.iter() {
                    verdict = alternative.check(nodes);
                    if verdict.is_match() {
                        break;
                    }
                }
                verdict
            }
            Grammar::Rule(rule) => rule(nodes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn is_word(node: &Node) -> bool {
        node.as_word().is_some()
    }

    fn reject_all(_: &Node) -> Verdict {
        Verdict::reject("nope")
    }

    static ALIGN: Grammar = Grammar::Single(Leaf::Keyword(&["start", "end"]));
    static WORDS: Grammar = Grammar::List(List::space(Leaf::Test(is_word)).max(2));

    #[test]
    fn test_single() {
        assert_eq!(ALIGN.check(&parse("END")), Verdict::Match);
        assert_eq!(ALIGN.check(&parse("middle")), Verdict::Mismatch);
        assert_eq!(
            ALIGN.check(&parse("start end")),
            Verdict::reject("Expected a single value to be passed.")
        );
    }

    #[test]
    fn test_list_max() {
        assert!(WORDS.check(&parse("a b")).is_match());
        assert_eq!(
            WORDS.check(&parse("a b c")),
            Verdict::reject("Expected a maximum of 2 values.")
        );
    }

    #[test]
    fn test_list_variables_and_parity() {
        let list = List::comma(Leaf::Test(is_word));
        assert!(list.check(&parse("a, var(--b)")).is_match());
        assert_eq!(list.check(&parse("a,")), Verdict::Mismatch);
        assert!(list.loose().check(&parse("a,")).is_match());
    }

    #[test]
    fn test_any_keeps_rejection() {
        let leaf = Leaf::Any(&[Leaf::Check(reject_all), Leaf::Keyword(&["none"])]);
        assert_eq!(leaf.verdict(&parse("none")[0]), Verdict::reject("nope"));
        let leaf = Leaf::Any(&[Leaf::Keyword(&["none"]), Leaf::Test(is_word)]);
        assert!(leaf.matches(&parse("x")[0]));
    }

    #[test]
    fn test_one_of_last_verdict() {
        static EITHER: Grammar = Grammar::OneOf(&[
            Grammar::Single(Leaf::Keyword(&["auto"])),
            Grammar::List(List::comma(Leaf::Test(is_word)).max(1)),
        ]);
        assert!(EITHER.check(&parse("auto")).is_match());
        assert!(EITHER.check(&parse("x")).is_match());
        assert_eq!(
            EITHER.check(&parse("x, y")),
            Verdict::reject("Expected a maximum of 1 values.")
        );
    }
}
