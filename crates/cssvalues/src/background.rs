//! Background layer grammars
//!
//! `<repeat-style>#` and `<bg-size>#`, shared by the background and mask
//! properties.

use cssvalues_parser::Node;

use crate::combinator::{arguments, is_variable};
use crate::grammar::Verdict;
use crate::keyword::{is_keyword, is_keyword_or_variable};
use crate::numeric::is_length_percentage;

const SINGLE_REPEATS: &[&str] = &["repeat-x", "repeat-y"];
const REPEATS: &[&str] = &["repeat", "space", "round", "no-repeat"];
const SIZE_KEYWORDS: &[&str] = &["cover", "contain"];

/// `repeat-x | repeat-y | [repeat | space | round | no-repeat]{1,2}`
fn is_repeat_style(group: &[Node]) -> bool {
    let values: Vec<&Node> = group.iter().filter(|node| !node.is_space()).collect();
    match values.as_slice() {
        [only] => is_keyword(only, SINGLE_REPEATS) || is_keyword_or_variable(only, REPEATS),
        [x, y] => is_keyword_or_variable(x, REPEATS) && is_keyword_or_variable(y, REPEATS),
        _ => false,
    }
}

pub fn repeat_style_list(nodes: &[Node]) -> Verdict {
    if nodes.last().is_some_and(Node::is_div) {
        return Verdict::Mismatch;
    }
    arguments(nodes)
        .iter()
        .all(|group| is_repeat_style(group))
        .into()
}

fn is_size_value(node: &Node) -> bool {
    is_keyword(node, &["auto"]) || is_length_percentage(node) || is_variable(node)
}

/// `[<length-percentage> | auto]{1,2}`
fn is_size_group(group: &[Node]) -> bool {
    match group {
        [size] => is_size_value(size),
        [width, space, height] => {
            is_size_value(width) && space.is_space() && is_size_value(height)
        }
        _ => false,
    }
}

/// `cover | contain | [<length-percentage> | auto]{1,2}`, comma repeated
pub fn bg_size_list(nodes: &[Node]) -> Verdict {
    if let [only] = nodes {
        if is_keyword(only, SIZE_KEYWORDS) {
            return Verdict::Match;
        }
    }
    if nodes.iter().any(Node::is_slash) {
        return Verdict::Mismatch;
    }
    arguments(nodes)
        .iter()
        .all(|group| is_size_group(group))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn repeat(input: &str) -> bool {
        repeat_style_list(&parse(input)).is_match()
    }

    fn size(input: &str) -> bool {
        bg_size_list(&parse(input)).is_match()
    }

    #[test]
    fn test_repeat_style() {
        assert!(repeat("repeat-x"));
        assert!(repeat("no-repeat"));
        assert!(repeat("repeat space"));
        assert!(repeat("repeat-y, round no-repeat"));
        assert!(repeat("var(--r) repeat"));
    }

    #[test]
    fn test_repeat_style_invalid() {
        assert!(!repeat("repeat-x repeat"));
        assert!(!repeat("repeat repeat-y"));
        assert!(!repeat("repeat space round"));
        assert!(!repeat("repeat,"));
        assert!(!repeat("repeat,,round"));
        assert!(!repeat("tile"));
    }

    #[test]
    fn test_bg_size() {
        assert!(size("cover"));
        assert!(size("auto"));
        assert!(size("50% auto"));
        assert!(size("10px, auto 20%"));
    }

    #[test]
    fn test_bg_size_invalid() {
        assert!(!size("cover, contain"));
        assert!(!size("10px / 20px"));
        assert!(!size("10px 20px 30px"));
        assert!(!size("big"));
        assert!(!size("10px,"));
        assert!(!size("10px 20px, contain-ish"));
    }
}
