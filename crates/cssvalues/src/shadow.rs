//! Shadow lists
//!
//! Comma-separated shadows, each two or more lengths plus at most one
//! color in either order.

use cssvalues_parser::Node;

use crate::color::is_color;
use crate::combinator::{arguments, is_variable};
use crate::grammar::Verdict;
use crate::keyword::is_keyword;
use crate::numeric::is_length;

#[derive(Debug, Clone, Copy)]
struct ShadowShape {
    max_lengths: usize,
    inset: bool,
}

const TEXT_SHADOW: ShadowShape = ShadowShape {
    max_lengths: 3,
    inset: false,
};

const BOX_SHADOW: ShadowShape = ShadowShape {
    max_lengths: 4,
    inset: true,
};

impl ShadowShape {
    fn max_nodes(self) -> usize {
        let values = self.max_lengths + 1 + usize::from(self.inset);
        values * 2 - 1
    }

    fn matches(self, group: &[Node]) -> bool {
        let starts_with_length = group.first().is_some_and(is_length);
        let mut lengths = 0;
        let mut has_color = false;
        let mut has_inset = false;
        let mut has_variable = false;

        for (index, node) in group.iter().enumerate() {
            if index % 2 == 1 {
                if !node.is_space() {
                    return false;
                }
                continue;
            }

            if is_length(node) {
                // lengths must stay contiguous when the shadow opens with one
                if lengths > 0 && has_color && starts_with_length {
                    return false;
                }
                lengths += 1;
                if lengths > self.max_lengths {
                    return false;
                }
            } else if is_color(node) {
                if has_color {
                    return false;
                }
                has_color = true;
            } else if is_variable(node) {
                has_variable = true;
            } else if self.inset && !has_inset && is_keyword(node, &["inset"]) {
                has_inset = true;
            } else {
                return false;
            }
        }

        (has_variable || lengths >= 2) && group.len() <= self.max_nodes()
    }
}

fn shadow_list(nodes: &[Node], shape: ShadowShape) -> Verdict {
    arguments(nodes)
        .iter()
        .all(|group| shape.matches(group))
        .into()
}

pub fn text_shadow(nodes: &[Node]) -> Verdict {
    shadow_list(nodes, TEXT_SHADOW)
}

pub fn box_shadow(nodes: &[Node]) -> Verdict {
    shadow_list(nodes, BOX_SHADOW)
}
