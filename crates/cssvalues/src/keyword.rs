//! Keyword leaves
//!
//! Case-insensitive keyword matching and the keyword sets shared by
//! several property grammars.

use cssvalues_parser::Node;

use crate::combinator::is_variable;
use crate::numeric::is_length;

/// Keywords accepted by every property
pub const GLOBAL_KEYWORDS: &[&str] = &["inherit", "initial", "revert", "unset"];

pub const LINE_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];
pub const LINE_WIDTHS: &[&str] = &["thin", "medium", "thick"];
pub const ATTACHMENTS: &[&str] = &["scroll", "fixed", "local"];
pub const COMPOSITE_STYLES: &[&str] = &[
    "clear",
    "copy",
    "source-over",
    "source-in",
    "source-out",
    "source-atop",
    "destination-over",
    "destination-in",
    "destination-out",
    "destination-atop",
    "xor",
];
pub const BLEND_MODES: &[&str] = &[
    "normal",
    "multiply",
    "screen",
    "overlay",
    "darken",
    "lighten",
    "color-dodge",
    "color-burn",
    "hard-light",
    "soft-light",
    "difference",
    "exclusion",
    "hue",
    "saturation",
    "color",
    "luminosity",
];
pub const BOXES: &[&str] = &["border-box", "padding-box", "content-box"];
pub const ABSOLUTE_SIZES: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large",
];
pub const RELATIVE_SIZES: &[&str] = &["larger", "smaller"];
pub const COMPOSITING_OPERATORS: &[&str] = &["add", "subtract", "intersect", "exclude"];
pub const MASKING_MODES: &[&str] = &["alpha", "luminance", "match-source"];
pub const ANIMATION_DIRECTIONS: &[&str] = &["normal", "reverse", "alternate", "alternate-reverse"];
pub const ANIMATION_FILL_MODES: &[&str] = &["none", "forwards", "backwards", "both"];
pub const ANIMATION_PLAY_STATES: &[&str] = &["running", "paused"];

pub fn is_keyword(node: &Node, set: &[&str]) -> bool {
    node.as_word()
        .is_some_and(|word| set.iter().any(|keyword| keyword.eq_ignore_ascii_case(word)))
}

pub fn is_keyword_or_variable(node: &Node, set: &[&str]) -> bool {
    is_keyword(node, set) || is_variable(node)
}

pub fn is_global_keyword(node: &Node) -> bool {
    is_keyword(node, GLOBAL_KEYWORDS)
}

/// `<line-style>`
pub fn is_line_style(node: &Node) -> bool {
    is_keyword(node, LINE_STYLES)
}

/// `<line-width>`
pub fn is_line_width(node: &Node) -> bool {
    is_length(node) || is_keyword(node, LINE_WIDTHS)
}

pub fn is_box(node: &Node) -> bool {
    is_keyword(node, BOXES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_case_insensitive() {
        assert!(is_keyword(&Node::word("SOLID"), LINE_STYLES));
        assert!(!is_keyword(&Node::word("solidly"), LINE_STYLES));
        assert!(!is_keyword(&Node::string("solid"), LINE_STYLES));
    }

    #[test]
    fn test_global_keyword() {
        for keyword in ["inherit", "Initial", "REVERT", "unset"] {
            assert!(is_global_keyword(&Node::word(keyword)));
        }
        assert!(!is_global_keyword(&Node::word("auto")));
    }

    #[test]
    fn test_keyword_or_variable() {
        let var = Node::function("var", vec![Node::word("--x")]);
        assert!(is_keyword_or_variable(&var, &["left"]));
        assert!(is_keyword_or_variable(&Node::word("left"), &["left"]));
    }

    #[test]
    fn test_line_width() {
        assert!(is_line_width(&Node::word("thick")));
        assert!(is_line_width(&Node::word("2px")));
        assert!(!is_line_width(&Node::word("wide")));
    }
}
