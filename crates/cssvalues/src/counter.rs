//! Counter styles
//!
//! Predefined counter style names, custom identifiers and `symbols()`.

use cssvalues_parser::Node;

use crate::combinator::function_args;
use crate::ident::{is_custom_ident, is_string};
use crate::image::is_image;
use crate::keyword::is_keyword;

const COUNTER_STYLES: &[&str] = &[
    "disc",
    "circle",
    "square",
    "decimal",
    "cjk-decimal",
    "decimal-leading-zero",
    "lower-roman",
    "upper-roman",
    "lower-greek",
    "lower-alpha",
    "lower-latin",
    "upper-alpha",
    "upper-latin",
    "arabic-indic",
    "-moz-arabic-indic",
    "armenian",
    "bengali",
    "-moz-bengali",
    "cambodian",
    "cjk-earthly-branch",
    "-moz-cjk-earthly-branch",
    "cjk-heavenly-stem",
    "-moz-cjk-heavenly-stem",
    "cjk-ideographic",
    "devanagari",
    "-moz-devanagari",
    "ethiopic-numeric",
    "georgian",
    "gujarati",
    "-moz-gujarati",
    "gurmukhi",
    "-moz-gurmukhi",
    "hebrew",
    "hiragana",
    "hiragana-iroha",
    "japanese-formal",
    "japanese-informal",
    "kannada",
    "-moz-kannada",
    "katakana",
    "katakana-iroha",
    "khmer",
    "-moz-khmer",
    "korean-hangul-formal",
    "korean-hanja-formal",
    "korean-hanja-informal",
    "lao",
    "-moz-lao",
    "lower-armenian",
    "malayalam",
    "-moz-malayalam",
    "mongolian",
    "myanmar",
    "-moz-myanmar",
    "oriya",
    "-moz-oriya",
    "persian",
    "-moz-persian",
    "simp-chinese-formal",
    "simp-chinese-informal",
    "tamil",
    "-moz-tamil",
    "telugu",
    "-moz-telugu",
    "thai",
    "-moz-thai",
    "tibetan",
    "trad-chinese-formal",
    "trad-chinese-informal",
    "upper-armenian",
    "disclosure-open",
    "disclosure-closed",
    // Vendor and legacy names
    "-moz-ethiopic-halehame",
    "-moz-ethiopic-halehame-am",
    "ethiopic-halehame-ti-er",
    "-moz-ethiopic-halehame-ti-er",
    "ethiopic-halehame-ti-et",
    "-moz-ethiopic-halehame-ti-et",
    "hangul",
    "-moz-hangul",
    "hangul-consonant",
    "-moz-hangul-consonant",
    "urdu",
    "-moz-urdu",
];

const SYMBOLS_TYPES: &[&str] = &["cyclic", "numeric", "alphabetic", "symbolic", "fixed"];

/// `symbols(<symbols-type>? [<string> | <image>]+)`
fn is_symbols(node: &Node) -> bool {
    let Some(args) = function_args(node, &["symbols"]) else {
        return false;
    };
    let symbol = |n: &Node| is_string(n) || is_image(n);
    args.len() % 2 == 1
        && args.iter().step_by(2).any(symbol)
        && args.iter().enumerate().all(|(index, child)| match index {
            0 => is_keyword(child, SYMBOLS_TYPES) || symbol(child),
            i if i % 2 == 1 => child.is_space(),
            _ => symbol(child),
        })
}

/// `<counter-style>`
pub fn is_counter_style(node: &Node) -> bool {
    is_custom_ident(node) || is_keyword(node, COUNTER_STYLES) || is_symbols(node)
}
