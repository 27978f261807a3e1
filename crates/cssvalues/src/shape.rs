//! Basic shapes and `clip-path`

use cssvalues_parser::Node;

use crate::combinator::{alternating, arguments, function_args, Separator};
use crate::ident::is_url;
use crate::keyword::{is_box, is_keyword};
use crate::numeric::is_length_percentage;
use crate::position::is_position_group;

const GEOMETRY_BOXES: &[&str] = &["margin-box", "fill-box", "stroke-box", "view-box"];
const LEGACY_BOXES: &[&str] = &["content", "padding", "border"];
const FILL_RULES: &[&str] = &["nonzero", "evenodd"];

pub fn is_geometry_box(node: &Node) -> bool {
    is_box(node) || is_keyword(node, GEOMETRY_BOXES) || is_keyword(node, LEGACY_BOXES)
}

fn is_shape_radius(node: &Node) -> bool {
    is_length_percentage(node) || is_keyword(node, &["closest-side", "farthest-side"])
}

pub fn is_basic_shape(node: &Node) -> bool {
    if let Some(args) = function_args(node, &["inset"]) {
        return alternating(args, is_length_percentage, Separator::Space);
    }
    if let Some(args) = function_args(node, &["circle"]) {
        return is_radii_at_position(args, 1);
    }
    if let Some(args) = function_args(node, &["ellipse"]) {
        return is_radii_at_position(args, 2);
    }
    if let Some(args) = function_args(node, &["polygon"]) {
        return is_polygon(args);
    }
    false
}

/// `[<shape-radius>{n}]? [at <position>]?`
fn is_radii_at_position(args: &[Node], radii: usize) -> bool {
    let at = args
        .iter()
        .enumerate()
        .position(|(index, node)| index % 2 == 0 && is_keyword(node, &["at"]));

    let size = match at {
        Some(index) => {
            let position_ok = match &args[index + 1..] {
                [space, position @ ..] => space.is_space() && is_position_group(position),
                [] => false,
            };
            if !position_ok {
                return false;
            }
            &args[..index.saturating_sub(1)]
        }
        None => args,
    };
    if at.is_some_and(|index| index > 0 && !args[index - 1].is_space()) {
        return false;
    }

    size.is_empty()
        || (alternating(size, is_shape_radius, Separator::Space) && size.len() == radii * 2 - 1)
}

/// `polygon([<fill-rule>,]? [<lp> <lp>]#)`
fn is_polygon(args: &[Node]) -> bool {
    let groups = arguments(args);
    let vertices = match groups.split_first() {
        Some((first, rest)) if matches!(first, [rule] if is_keyword(rule, FILL_RULES)) => rest,
        _ => &groups[..],
    };
    !vertices.is_empty()
        && vertices.iter().all(|vertex| match vertex {
            [x, space, y] => is_length_percentage(x) && space.is_space() && is_length_percentage(y),
            _ => false,
        })
}

/// `url()`, a basic shape or a geometry box
pub fn is_clip_source(node: &Node) -> bool {
    is_url(node) || is_basic_shape(node) || is_geometry_box(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn shape(input: &str) -> bool {
        let value = parse(input);
        value.len() == 1 && is_basic_shape(&value[0])
    }

    #[test]
    fn test_inset() {
        assert!(shape("inset(10px)"));
        assert!(shape("inset(10px 20% 0 5px)"));
        assert!(!shape("inset(10px, 20px)"));
        assert!(!shape("inset()"));
    }

    #[test]
    fn test_circle() {
        assert!(shape("circle()"));
        assert!(shape("circle(50%)"));
        assert!(shape("circle(closest-side at 10px 20px)"));
        assert!(shape("circle(at center)"));
        assert!(!shape("circle(10px 20px)"));
        assert!(!shape("circle(at)"));
        assert!(!shape("circle(big)"));
    }

    #[test]
    fn test_ellipse() {
        assert!(shape("ellipse(10px 20px)"));
        assert!(shape("ellipse(10px 20px at left top)"));
        assert!(!shape("ellipse(10px)"));
        assert!(!shape("ellipse(10px 20px foo)"));
    }

    #[test]
    fn test_polygon() {
        assert!(shape("polygon(0 0, 100% 0, 50% 100%)"));
        assert!(shape("polygon(evenodd, 0 0, 10px 10px)"));
        assert!(shape("polygon(0 0)"));
        assert!(!shape("polygon(evenodd)"));
        assert!(!shape("polygon(0 0, 10px)"));
    }

    #[test]
    fn test_clip_source() {
        assert!(is_clip_source(&Node::word("margin-box")));
        assert!(is_clip_source(&Node::word("padding")));
        assert!(is_clip_source(&parse("url(#clip)")[0]));
        assert!(!is_clip_source(&Node::word("none")));
    }
}
