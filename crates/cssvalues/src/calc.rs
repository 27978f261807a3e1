//! `calc()` expressions

use cssvalues_parser::Node;

use crate::combinator::{function_args, is_variable};
use crate::numeric::{is_angle, is_integer, is_length, is_number, is_percentage, is_time};

const OPERATORS: &[&str] = &["+", "-", "*", "/"];
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/'];

fn is_operator(text: &str) -> bool {
    OPERATORS.contains(&text)
}

fn is_term(node: &Node) -> bool {
    is_angle(node)
        || is_length(node)
        || is_time(node)
        || is_integer(node)
        || is_number(node)
        || is_percentage(node)
}

/// A word that is neither a term nor a lone operator must glue terms with
/// `*` or `/`; `+` and `-` need surrounding spaces.
fn is_compound_word(word: &str) -> bool {
    let inner_sign = word.char_indices().any(|(i, c)| i > 0 && (c == '+' || c == '-'));
    let trailing_operator = word.ends_with(OPERATOR_CHARS);
    let has_operator = word.contains(OPERATOR_CHARS);
    !inner_sign && !trailing_operator && has_operator
}

/// Walk state: the last non-space token seen
#[derive(Default)]
struct Expression<'a> {
    last: Option<&'a str>,
}

impl<'a> Expression<'a> {
    fn visit(&mut self, nodes: &'a [Node]) -> bool {
        nodes.iter().all(|node| self.visit_node(node))
    }

    fn visit_node(&mut self, node: &'a Node) -> bool {
        let text = node.text();
        if self.last.map_or(true, str::is_empty) && is_operator(text) {
            return false;
        }
        if !node.is_space() {
            self.last = Some(text);
        }

        match node {
            Node::Function { .. } if is_variable(node) => true,
            Node::Function { name, args, .. } => {
                name.is_empty()
                    && !args.is_empty()
                    && self.visit(args)
                    && !self.ends_with_operator()
            }
            Node::Word(word) => is_term(node) || is_operator(word) || is_compound_word(word),
            Node::String { .. } => false,
            Node::Div { .. } | Node::Space(_) => true,
        }
    }

    fn ends_with_operator(&self) -> bool {
        self.last.is_some_and(is_operator)
    }
}

pub fn is_calc(node: &Node) -> bool {
    let Some(args) = function_args(node, &["calc"]) else {
        return false;
    };
    if args.is_empty() {
        return false;
    }
    let mut expression = Expression::default();
    expression.visit(args) && !expression.ends_with_operator()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn calc(input: &str) -> bool {
        let value = parse(input);
        value.len() == 1 && is_calc(&value[0])
    }

    #[test]
    fn test_simple_expressions() {
        assert!(calc("calc(100% - 10px)"));
        assert!(calc("calc(-10px)"));
        assert!(calc("calc(2 * 3em)"));
        assert!(calc("calc(100%/3)"));
        assert!(calc("calc(10px*2)"));
    }

    #[test]
    fn test_operator_placement() {
        assert!(!calc("calc(100% -)"));
        assert!(!calc("calc(+ 10px)"));
        assert!(!calc("calc(* 2)"));
        assert!(!calc("calc(10px-5px)"));
        assert!(!calc("calc(10px *)"));
    }

    #[test]
    fn test_nested_groups() {
        assert!(calc("calc((100% - 10px) / 2)"));
        assert!(calc("calc(var(--gap) * 2)"));
        assert!(!calc("calc(())"));
        assert!(!calc("calc(min(1px, 2px))"));
    }

    #[test]
    fn test_group_ends_with_operand() {
        assert!(!calc("calc((10px -) + 5px)"));
        assert!(!calc("calc(2 * (1px *))"));
        assert!(!calc("calc(((1px +)))"));
        assert!(calc("calc((10px - 2px) + 5px)"));
        assert!(calc("calc(2 * (1px * 3))"));
    }

    #[test]
    fn test_rejects_unknown_words() {
        assert!(!calc("calc()"));
        assert!(!calc("calc(foo)"));
        assert!(!calc("calc('1px')"));
        assert!(!calc("clac(1px)"));
    }
}
