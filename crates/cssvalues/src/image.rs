//! `<image>` grammar
//!
//! `url()`, `element()`, `image()`, `image-set()`, `cross-fade()` and
//! gradients.

use cssvalues_parser::Node;

use crate::color::is_color;
use crate::combinator::{arguments, function_args, is_function};
use crate::gradient::is_gradient;
use crate::grammar::Verdict;
use crate::ident::{check_id_selector, is_string, is_url};
use crate::numeric::{is_multiplier, is_percentage, is_resolution};

/// Image check that explains malformed `element()` references
pub fn check_image(node: &Node) -> Verdict {
    if let Some(args) = function_args(node, &["element"]) {
        return match args {
            [id] => check_id_selector(id),
            _ => Verdict::Mismatch,
        };
    }
    (is_url(node)
        || is_image_function(node)
        || is_image_set(node)
        || is_cross_fade(node)
        || is_gradient(node))
    .into()
}

pub fn is_image(node: &Node) -> bool {
    check_image(node).is_match()
}

/// `image(<image> | <string> [, <color>]?)` or `image(<color>)`
fn is_image_function(node: &Node) -> bool {
    match function_args(node, &["image"]) {
        Some([only]) => is_image(only) || is_string(only) || is_color(only),
        Some([source, comma, color]) => {
            (is_image(source) || is_string(source)) && comma.is_comma() && is_color(color)
        }
        _ => false,
    }
}

fn is_image_set_option(group: &[Node]) -> bool {
    match group {
        [source, space, density] => {
            (is_image(source) || is_string(source))
                && !is_function(source, &["image-set"])
                && space.is_space()
                && (is_resolution(density) || is_multiplier(density))
        }
        _ => false,
    }
}

fn is_image_set(node: &Node) -> bool {
    function_args(node, &["image-set"])
        .is_some_and(|args| arguments(args).iter().all(|group| is_image_set_option(group)))
}

fn is_cross_fade(node: &Node) -> bool {
    let Some(args) = function_args(node, &["cross-fade"]) else {
        return false;
    };
    !args.is_empty()
        && args.iter().enumerate().all(|(index, child)| match index {
            0 | 2 => is_percentage(child) || is_image(child),
            4 => is_image(child) || is_color(child),
            _ => true,
        })
}
