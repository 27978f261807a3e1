//! Transform functions

use cssvalues_parser::Node;

use crate::combinator::{alternating, function_args, is_variable, positional, Separator};
use crate::numeric::{is_angle, is_length, is_length_percentage, is_number};

type Test = fn(&Node) -> bool;

/// Functions taking exactly one argument
const SINGLE: &[(&[&str], Test)] = &[
    (
        &["rotate", "skewX", "skewY", "rotateX", "rotateY", "rotateZ"],
        is_angle,
    ),
    (&["perspective", "translateZ"], is_length),
    (&["translateX", "translateY"], is_length_percentage),
    (&["scaleX", "scaleY", "scaleZ"], is_number),
];

/// Functions taking one or two comma-separated arguments
const PAIRED: &[(&str, Test)] = &[
    ("translate", is_length_percentage),
    ("scale", is_number),
    ("skew", is_angle),
];

fn is_matrix(node: &Node) -> bool {
    let Some(args) = function_args(node, &["matrix", "matrix3d"]) else {
        return false;
    };
    let values = if node.text().eq_ignore_ascii_case("matrix") {
        6
    } else {
        16
    };
    args.len() == values * 2 - 1 && alternating(args, is_number, Separator::Comma)
}

fn is_single(node: &Node) -> bool {
    SINGLE.iter().any(|(names, test)| {
        matches!(function_args(node, names), Some([only]) if test(only))
    })
}

fn is_paired(node: &Node) -> bool {
    PAIRED.iter().any(|(name, test)| {
        function_args(node, &[*name]).is_some_and(|args| {
            args.len() <= 3 && alternating(args, test, Separator::Comma)
        })
    })
}

fn is_three_d(node: &Node) -> bool {
    if let Some(args) = function_args(node, &["translate3d"]) {
        return positional(
            args,
            &[is_length_percentage, is_length_percentage, is_length],
            Separator::Comma,
        );
    }
    if let Some(args) = function_args(node, &["scale3d"]) {
        return positional(args, &[is_number, is_number, is_number], Separator::Comma);
    }
    if let Some(args) = function_args(node, &["rotate3d"]) {
        return positional(
            args,
            &[is_number, is_number, is_number, is_angle],
            Separator::Comma,
        );
    }
    false
}

pub fn is_transform_function(node: &Node) -> bool {
    is_matrix(node) || is_single(node) || is_paired(node) || is_three_d(node) || is_variable(node)
}
