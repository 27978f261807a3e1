//! Gradient functions
//!
//! `linear-gradient()`, `radial-gradient()` and their repeating forms: an
//! optional definition group followed by at least two color stops.

use cssvalues_parser::Node;

use crate::color::is_color;
use crate::combinator::{arguments, function_args};
use crate::keyword::is_keyword;
use crate::numeric::{is_angle, is_length, is_length_percentage};
use crate::position::is_position_group;

const LINEAR: &[&str] = &["linear-gradient", "repeating-linear-gradient"];
const RADIAL: &[&str] = &["radial-gradient", "repeating-radial-gradient"];

const SIDES_X: &[&str] = &["left", "right"];
const SIDES_Y: &[&str] = &["top", "bottom"];
const SIDES: &[&str] = &["left", "right", "top", "bottom"];
const ENDING_SHAPES: &[&str] = &["circle", "ellipse"];
const EXTENTS: &[&str] = &[
    "closest-corner",
    "closest-side",
    "farthest-corner",
    "farthest-side",
];

pub fn is_gradient(node: &Node) -> bool {
    if let Some(args) = function_args(node, LINEAR) {
        return has_color_stops(args, is_linear_definition);
    }
    if let Some(args) = function_args(node, RADIAL) {
        return has_color_stops(args, is_radial_definition);
    }
    false
}

/// `<color>` or `<color> <length-percentage>`
fn is_color_stop(group: &[Node]) -> bool {
    match group {
        [color] => is_color(color),
        [color, space, stop] => is_color(color) && space.is_space() && is_length_percentage(stop),
        _ => false,
    }
}

/// Every group after an optional leading definition must be a color stop,
/// and there must be at least two stops.
fn has_color_stops(args: &[Node], is_definition: fn(&[Node]) -> bool) -> bool {
    let groups = arguments(args);
    let stops = match groups.split_first() {
        Some((first, rest)) if is_definition(first) => rest,
        _ => &groups[..],
    };
    stops.len() >= 2 && stops.iter().all(|group| is_color_stop(group))
}

/// Values at even indexes, with every odd index a space
fn spaced_values(group: &[Node]) -> Option<Vec<&Node>> {
    group
        .iter()
        .enumerate()
        .try_fold(Vec::new(), |mut values, (index, node)| {
            if index % 2 == 1 {
                return node.is_space().then_some(values);
            }
            values.push(node);
            Some(values)
        })
        .filter(|_| group.len() % 2 == 1)
}

fn is_linear_definition(group: &[Node]) -> bool {
    if let [angle] = group {
        return is_angle(angle);
    }
    let Some(values) = spaced_values(group) else {
        return false;
    };
    match values.as_slice() {
        [to, side] => is_keyword(to, &["to"]) && is_keyword(side, SIDES),
        [to, first, second] => {
            is_keyword(to, &["to"])
                && ((is_keyword(first, SIDES_X) && is_keyword(second, SIDES_Y))
                    || (is_keyword(first, SIDES_Y) && is_keyword(second, SIDES_X)))
        }
        _ => false,
    }
}

/// Shape and size part of a radial definition
fn is_radial_size(values: &[&Node]) -> bool {
    let shape = |n: &Node| is_keyword(n, ENDING_SHAPES);
    let extent = |n: &Node| is_keyword(n, EXTENTS);
    let circle = |n: &Node| is_keyword(n, &["circle"]);
    let ellipse = |n: &Node| is_keyword(n, &["ellipse"]);
    let lp = |n: &Node| is_length_percentage(n);

    match *values {
        [] => true,
        [a] => shape(a) || extent(a) || is_length(a),
        [a, b] => {
            (circle(a) && is_length(b))
                || (is_length(a) && circle(b))
                || (extent(a) && shape(b))
                || (shape(a) && extent(b))
                || (lp(a) && lp(b))
        }
        [a, b, c] => (ellipse(a) && lp(b) && lp(c)) || (lp(a) && lp(b) && ellipse(c)),
        _ => false,
    }
}

fn is_radial_definition(group: &[Node]) -> bool {
    let at = group
        .iter()
        .enumerate()
        .find(|(index, node)| index % 2 == 0 && is_keyword(node, &["at"]))
        .map(|(index, _)| index);

    let (size, position) = match at {
        Some(index) => {
            let position = &group[index + 1..];
            let [space, rest @ ..] = position else {
                return false;
            };
            if !space.is_space() || !is_position_group(rest) {
                return false;
            }
            if index == 0 {
                (&group[..0], true)
            } else if group[index - 1].is_space() {
                (&group[..index - 1], true)
            } else {
                return false;
            }
        }
        None => (group, false),
    };

    if size.is_empty() {
        return position;
    }
    spaced_values(size).is_some_and(|values| is_radial_size(&values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn gradient(input: &str) -> bool {
        let value = parse(input);
        value.len() == 1 && is_gradient(&value[0])
    }

    #[test]
    fn test_linear() {
        assert!(gradient("linear-gradient(red, blue)"));
        assert!(gradient("linear-gradient(45deg, red, blue 50%)"));
        assert!(gradient("linear-gradient(to right, red, blue)"));
        assert!(gradient("linear-gradient(to top left, red 10px, blue)"));
        assert!(gradient("repeating-linear-gradient(0, red, blue 20%)"));
    }

    #[test]
    fn test_linear_invalid() {
        assert!(!gradient("linear-gradient(red)"));
        assert!(!gradient("linear-gradient(45deg, red)"));
        assert!(!gradient("linear-gradient(to left right, red, blue)"));
        assert!(!gradient("linear-gradient(to middle, red, blue)"));
        assert!(!gradient("linear-gradient(red,, blue)"));
        assert!(!gradient("linear-gradient(red 10px 20px, blue)"));
    }

    #[test]
    fn test_radial() {
        assert!(gradient("radial-gradient(red, blue)"));
        assert!(gradient("radial-gradient(circle, red, blue)"));
        assert!(gradient("radial-gradient(at center, red, blue)"));
        assert!(gradient("radial-gradient(circle 10px, red, blue)"));
        assert!(gradient("radial-gradient(ellipse 10px 20%, red, blue)"));
        assert!(gradient("radial-gradient(closest-side circle at 10px 20px, red, blue)"));
        assert!(gradient("repeating-radial-gradient(farthest-corner at left top, red, blue)"));
    }

    #[test]
    fn test_radial_invalid() {
        assert!(!gradient("radial-gradient(circle, red)"));
        assert!(!gradient("radial-gradient(circle at, red, blue)"));
        assert!(!gradient("radial-gradient(square, red, blue)"));
        assert!(!gradient("radial-gradient(circle 10% 20%, red, blue)"));
    }
}
