//! CSS Values Parser
//!
//! Tokenizes a single declaration value into a tree of nodes: words,
//! strings, dividers, spaces and functions with nested arguments.

pub mod node;
pub mod tokenizer;

pub use node::{Divider, Node, Value};
pub use tokenizer::Tokenizer;

/// Tokenize a value into its top-level node sequence
pub fn parse(input: &str) -> Value {
    Value::parse(input)
}
