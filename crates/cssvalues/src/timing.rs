//! Timing functions and animation leaves

use cssvalues_parser::Node;

use crate::combinator::{function_args, positional, Separator};
use crate::ident::is_custom_ident;
use crate::keyword::is_keyword;
use crate::numeric::{is_integer, is_number, is_number_text};

const TIMING_KEYWORDS: &[&str] = &[
    "ease",
    "linear",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

/// `steps(<integer> [, start | end]?)`
fn is_steps(node: &Node) -> bool {
    match function_args(node, &["steps"]) {
        Some([count]) => is_integer(count),
        Some([count, comma, position]) => {
            is_integer(count) && comma.is_comma() && is_keyword(position, &["start", "end"])
        }
        _ => false,
    }
}

/// Number within [0, 1]
fn is_abscissa(node: &Node) -> bool {
    node.as_word()
        .filter(|text| is_number_text(text))
        .and_then(|text| text.parse::<f64>().ok())
        .is_some_and(|x| (0.0..=1.0).contains(&x))
}

fn is_cubic_bezier(node: &Node) -> bool {
    function_args(node, &["cubic-bezier"]).is_some_and(|args| {
        positional(
            args,
            &[is_abscissa, is_number, is_abscissa, is_number],
            Separator::Comma,
        )
    })
}

/// `<single-transition-timing-function>`
pub fn is_timing_function(node: &Node) -> bool {
    is_keyword(node, TIMING_KEYWORDS) || is_steps(node) || is_cubic_bezier(node)
}

/// `infinite | <number>`
pub fn is_iteration_count(node: &Node) -> bool {
    is_keyword(node, &["infinite"]) || is_number(node)
}

/// `none | <custom-ident>`
pub fn is_animation_name(node: &Node) -> bool {
    is_keyword(node, &["none"]) || is_custom_ident(node)
}

/// `scroll-position | contents | <custom-ident>`
pub fn is_animateable_feature(node: &Node) -> bool {
    is_keyword(node, &["scroll-position", "contents"]) || is_custom_ident(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn timing(input: &str) -> bool {
        let value = parse(input);
        value.len() == 1 && is_timing_function(&value[0])
    }

    #[test]
    fn test_keywords() {
        assert!(timing("ease-in-out"));
        assert!(timing("STEP-END"));
        assert!(!timing("slow"));
    }

    #[test]
    fn test_steps() {
        assert!(timing("steps(4)"));
        assert!(timing("steps(4, end)"));
        assert!(!timing("steps(4, middle)"));
        assert!(!timing("steps(1.5)"));
        assert!(!timing("steps(4, end, start)"));
        assert!(!timing("steps()"));
    }

    #[test]
    fn test_cubic_bezier() {
        assert!(timing("cubic-bezier(0.1, 0.7, 1.0, 0.1)"));
        assert!(timing("cubic-bezier(0, -2, 1, 3)"));
        assert!(!timing("cubic-bezier(1.1, 0, 0, 0)"));
        assert!(!timing("cubic-bezier(-0.1, 0, 0, 0)"));
        assert!(!timing("cubic-bezier(0, 0, 0)"));
        assert!(!timing("cubic-bezier(.5., 0, 0, 0)"));
    }

    #[test]
    fn test_animation_leaves() {
        assert!(is_iteration_count(&Node::word("infinite")));
        assert!(is_iteration_count(&Node::word("2.5")));
        assert!(!is_iteration_count(&Node::word("forever")));
        assert!(is_animation_name(&Node::word("slide")));
        assert!(is_animation_name(&Node::word("none")));
        assert!(!is_animation_name(&Node::word("1slide")));
        assert!(is_animateable_feature(&Node::word("transform")));
    }
}
