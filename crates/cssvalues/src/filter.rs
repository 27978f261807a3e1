//! Filter functions

use cssvalues_parser::Node;

use crate::color::is_color;
use crate::combinator::{function_args, is_variable};
use crate::ident::is_url;
use crate::numeric::{is_angle, is_length, is_number, is_percentage};

const AMOUNT_FILTERS: &[&str] = &[
    "brightness",
    "contrast",
    "grayscale",
    "invert",
    "opacity",
    "sepia",
    "saturate",
];

/// `drop-shadow(<length>{2,3} <color>?)`, color last
fn is_drop_shadow(args: &[Node]) -> bool {
    if args.len() < 3 || args.len() > 7 || args.len() % 2 == 0 {
        return false;
    }
    args.iter().enumerate().all(|(index, node)| match index {
        0 | 2 => is_length(node),
        4 => is_length(node) || is_color(node),
        6 => is_color(node) && !is_color(&args[4]),
        _ => node.is_space(),
    })
}

pub fn is_filter_function(node: &Node) -> bool {
    if let Some(args) = function_args(node, &["blur"]) {
        return matches!(args, [radius] if is_length(radius));
    }
    if let Some(args) = function_args(node, &["hue-rotate"]) {
        return matches!(args, [angle] if is_angle(angle));
    }
    if let Some(args) = function_args(node, AMOUNT_FILTERS) {
        return matches!(args, [amount] if is_number(amount) || is_percentage(amount));
    }
    if let Some(args) = function_args(node, &["drop-shadow"]) {
        return is_drop_shadow(args);
    }
    is_url(node) || is_variable(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn filter(input: &str) -> bool {
        let value = parse(input);
        value.len() == 1 && is_filter_function(&value[0])
    }

    #[test]
    fn test_amounts() {
        assert!(filter("brightness(1.5)"));
        assert!(filter("opacity(50%)"));
        assert!(filter("GRAYSCALE(1)"));
        assert!(!filter("sepia(1px)"));
        assert!(!filter("invert()"));
        assert!(!filter("invert(1, 2)"));
    }

    #[test]
    fn test_blur_and_hue() {
        assert!(filter("blur(2px)"));
        assert!(!filter("blur(2)"));
        assert!(filter("hue-rotate(90deg)"));
        assert!(!filter("hue-rotate(90)"));
    }

    #[test]
    fn test_drop_shadow() {
        assert!(filter("drop-shadow(1px 2px)"));
        assert!(filter("drop-shadow(1px 2px 3px)"));
        assert!(filter("drop-shadow(1px 2px red)"));
        assert!(filter("drop-shadow(1px 2px 3px red)"));
        assert!(!filter("drop-shadow(1px)"));
        assert!(!filter("drop-shadow(red 1px 2px)"));
        assert!(!filter("drop-shadow(1px 2px red blue)"));
        assert!(!filter("drop-shadow(1px, 2px)"));
    }

    #[test]
    fn test_url_reference() {
        assert!(filter("url(#filter)"));
        assert!(!filter("shadow(1px)"));
    }
}
