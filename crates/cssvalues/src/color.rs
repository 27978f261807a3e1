//! Color leaf
//!
//! Hex notation, the `rgb()`/`rgba()`/`hsl()`/`hsla()` functions, named
//! colors and the color keywords.

use cssvalues_parser::Node;

use crate::colors::named_color;
use crate::combinator::{function_args, positional, Separator};
use crate::keyword::is_keyword;
use crate::numeric::{is_integer, is_number, is_percentage};

pub const COLOR_KEYWORDS: &[&str] = &["transparent", "currentcolor"];

fn is_channel(node: &Node) -> bool {
    is_integer(node) || is_percentage(node)
}

pub fn is_color(node: &Node) -> bool {
    is_hex(node)
        || is_named_color(node)
        || is_keyword(node, COLOR_KEYWORDS)
        || is_color_function(node)
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
pub fn is_hex(node: &Node) -> bool {
    let Some(digits) = node.as_word().and_then(|w| w.strip_prefix('#')) else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn is_named_color(node: &Node) -> bool {
    node.as_word().is_some_and(|name| named_color(name).is_some())
}

fn is_color_function(node: &Node) -> bool {
    if let Some(args) = function_args(node, &["rgb"]) {
        return positional(args, &[is_channel, is_channel, is_channel], Separator::Comma);
    }
    if let Some(args) = function_args(node, &["rgba"]) {
        return positional(
            args,
            &[is_channel, is_channel, is_channel, is_number],
            Separator::Comma,
        );
    }
    if let Some(args) = function_args(node, &["hsl"]) {
        return positional(args, &[is_number, is_percentage, is_percentage], Separator::Comma);
    }
    if let Some(args) = function_args(node, &["hsla"]) {
        return positional(
            args,
            &[is_number, is_percentage, is_percentage, is_number],
            Separator::Comma,
        );
    }
    false
}
