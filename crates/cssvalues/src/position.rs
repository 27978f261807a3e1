//! `<position>` grammar
//!
//! One, two or four value forms, optionally repeated as a comma list.

use cssvalues_parser::Node;

use crate::combinator::{arguments, is_variable};
use crate::grammar::Verdict;
use crate::keyword::{is_keyword, is_keyword_or_variable};
use crate::numeric::is_length_percentage;

const HORIZONTALS: &[&str] = &["left", "right", "center"];
const VERTICALS: &[&str] = &["top", "bottom", "center"];
const ALL_SIDES: &[&str] = &["left", "center", "right", "top", "bottom"];

fn is_offset(node: &Node) -> bool {
    is_length_percentage(node) || is_variable(node)
}

/// Edge keyword, offset, edge keyword, offset. The second edge must sit on
/// the other axis and cannot be `center`.
fn is_four_value(group: &[Node]) -> bool {
    let [first, s1, offset1, s2, second, s3, offset2] = group else {
        return false;
    };
    if !(s1.is_space() && s2.is_space() && s3.is_space()) {
        return false;
    }
    let axes_ok = (is_keyword_or_variable(first, &["left", "right"])
        && is_keyword_or_variable(second, VERTICALS))
        || (is_keyword_or_variable(first, &["top", "bottom"])
            && is_keyword_or_variable(second, HORIZONTALS));

    axes_ok
        && is_offset(offset1)
        && is_offset(offset2)
        && !is_keyword(second, &["center"])
}

/// A single comma-free position
pub fn is_position_group(group: &[Node]) -> bool {
    match group {
        [only] => is_keyword_or_variable(only, ALL_SIDES) || is_length_percentage(only),
        [x, space, y] => {
            if !space.is_space() {
                return false;
            }
            let keyword_pair = (is_keyword_or_variable(x, HORIZONTALS)
                && is_keyword_or_variable(y, VERTICALS))
                || (is_keyword_or_variable(x, VERTICALS)
                    && is_keyword_or_variable(y, HORIZONTALS));
            keyword_pair
                || ((is_keyword_or_variable(x, HORIZONTALS) || is_length_percentage(x))
                    && (is_keyword_or_variable(y, VERTICALS) || is_length_percentage(y)))
        }
        _ => is_four_value(group),
    }
}

/// Comma-separated positions, as used by background and mask layers
pub fn position_list(nodes: &[Node]) -> Verdict {
    if nodes.last().is_some_and(Node::is_div) {
        return Verdict::Mismatch;
    }
    arguments(nodes).iter().all(|group| is_position_group(group)).into()
}

/// Exactly one position
pub fn position(nodes: &[Node]) -> Verdict {
    is_position_group(nodes).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn single(input: &str) -> bool {
        position(&parse(input)).is_match()
    }

    fn list(input: &str) -> bool {
        position_list(&parse(input)).is_match()
    }

    #[test]
    fn test_one_value() {
        assert!(single("left"));
        assert!(single("center"));
        assert!(single("25%"));
        assert!(single("var(--x)"));
        assert!(!single("middle"));
    }

    #[test]
    fn test_two_values() {
        assert!(single("left top"));
        assert!(single("top left"));
        assert!(single("10px 20%"));
        assert!(single("left 10px"));
        assert!(single("10px bottom"));
        assert!(!single("top 10px"));
        assert!(!single("left right"));
    }

    #[test]
    fn test_four_values() {
        assert!(single("top 10px left 20px"));
        assert!(single("right 5% bottom 0"));
        assert!(!single("left 10px center 20px"));
        assert!(!single("left 10px right 20px"));
        assert!(!single("left 10px top"));
        assert!(!single("left 10px top 5px 6px"));
    }

    #[test]
    fn test_repeated() {
        assert!(list("left top, 10px 20px"));
        assert!(!list("left top,"));
        assert!(!list("left,, top"));
        assert!(!single("left, top"));
    }
}
