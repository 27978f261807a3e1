//! Structural combinators
//!
//! Argument grouping, alternating separator walks and the function-name
//! gate shared by every composite grammar.

use cssvalues_parser::Node;
use smallvec::SmallVec;

/// Comma-delimited argument groups, borrowed from the node sequence
pub type Groups<'a> = SmallVec<[&'a [Node]; 4]>;

/// Separator required between repeated values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Space,
}

impl Separator {
    pub fn matches(self, node: &Node) -> bool {
        match self {
            Separator::Comma => node.is_comma(),
            Separator::Space => node.is_space(),
        }
    }
}

/// Split a node sequence on its commas. Nested function arguments are
/// untouched, and the result always holds at least one group.
pub fn arguments(nodes: &[Node]) -> Groups<'_> {
    nodes.split(Node::is_comma).collect()
}

/// Check whether a node calls one of the given functions (case-insensitive)
pub fn is_function(node: &Node, names: &[&str]) -> bool {
    function_args(node, names).is_some()
}

/// Arguments of a call to one of the given functions
pub fn function_args<'a>(node: &'a Node, names: &[&str]) -> Option<&'a [Node]> {
    match node {
        Node::Function { name, args, .. }
            if names.iter().any(|n| n.eq_ignore_ascii_case(name)) =>
        {
            Some(args)
        }
        _ => None,
    }
}

/// A `var()` reference, accepted wherever a concrete value is expected
pub fn is_variable(node: &Node) -> bool {
    is_function(node, &["var"])
}

/// Odd-length sequence of values split by one kind of separator
pub fn alternating(nodes: &[Node], item: impl Fn(&Node) -> bool, separator: Separator) -> bool {
    nodes.len() % 2 == 1
        && nodes.iter().enumerate().all(|(index, node)| {
            if index % 2 == 1 {
                separator.matches(node)
            } else {
                item(node)
            }
        })
}

/// Exactly one value per predicate, in order, split by `separator`
pub fn positional(nodes: &[Node], items: &[fn(&Node) -> bool], separator: Separator) -> bool {
    !items.is_empty()
        && nodes.len() == items.len() * 2 - 1
        && nodes.iter().enumerate().all(|(index, node)| {
            if index % 2 == 1 {
                separator.matches(node)
            } else {
                items[index / 2](node)
            }
        })
}
