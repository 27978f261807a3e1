//! Value nodes
//!
//! The tree shape produced by the tokenizer and consumed by every predicate.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::tokenizer::Tokenizer;

/// Separator character carried by a divider node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Divider {
    /// ','
    Comma,
    /// '/'
    Slash,
    /// ':'
    Colon,
}

impl Divider {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(Divider::Comma),
            '/' => Some(Divider::Slash),
            ':' => Some(Divider::Colon),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Divider::Comma => ',',
            Divider::Slash => '/',
            Divider::Colon => ':',
        }
    }
}

/// One token or nested construct of a CSS value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Bare word: keywords, numbers, dimensions, hashes, operators
    Word(String),
    /// Quoted string, without its quotes
    String {
        value: String,
        quote: char,
        unclosed: bool,
    },
    /// Divider with the whitespace that surrounded it
    Div {
        kind: Divider,
        before: String,
        after: String,
    },
    /// Significant whitespace between two tokens
    Space(String),
    /// Function call; an empty name is a parenthesised group
    Function {
        name: String,
        args: Vec<Node>,
        before: String,
        after: String,
        unclosed: bool,
    },
}

impl Node {
    pub fn word(text: impl Into<String>) -> Self {
        Node::Word(text.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::String {
            value: value.into(),
            quote: '"',
            unclosed: false,
        }
    }

    pub fn space() -> Self {
        Node::Space(" ".to_string())
    }

    pub fn divider(kind: Divider) -> Self {
        Node::Div {
            kind,
            before: String::new(),
            after: String::new(),
        }
    }

    pub fn comma() -> Self {
        Node::divider(Divider::Comma)
    }

    pub fn slash() -> Self {
        Node::divider(Divider::Slash)
    }

    pub fn function(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::Function {
            name: name.into(),
            args,
            before: String::new(),
            after: String::new(),
            unclosed: false,
        }
    }

    /// The node's primary text: word text, string contents, divider
    /// character, whitespace, or function name.
    pub fn text(&self) -> &str {
        match self {
            Node::Word(text) | Node::Space(text) => text,
            Node::String { value, .. } => value,
            Node::Div { kind, .. } => match kind {
                Divider::Comma => ",",
                Divider::Slash => "/",
                Divider::Colon => ":",
            },
            Node::Function { name, .. } => name,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Node::Word(text) => Some(text),
            _ => None,
        }
    }

    /// Function arguments, if this is a function node
    pub fn args(&self) -> Option<&[Node]> {
        match self {
            Node::Function { args, .. } => Some(args),
            _ => None,
        }
    }

    pub fn is_space(&self) -> bool {
        matches!(self, Node::Space(_))
    }

    pub fn is_divider(&self, divider: Divider) -> bool {
        matches!(self, Node::Div { kind, .. } if *kind == divider)
    }

    pub fn is_div(&self) -> bool {
        matches!(self, Node::Div { .. })
    }

    pub fn is_comma(&self) -> bool {
        self.is_divider(Divider::Comma)
    }

    pub fn is_slash(&self) -> bool {
        self.is_divider(Divider::Slash)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Word(text) | Node::Space(text) => f.write_str(text),
            Node::String {
                value,
                quote,
                unclosed,
            } => {
                write!(f, "{}{}", quote, value)?;
                if !unclosed {
                    write!(f, "{}", quote)?;
                }
                Ok(())
            }
            Node::Div {
                kind,
                before,
                after,
            } => write!(f, "{}{}{}", before, kind.as_char(), after),
            Node::Function {
                name,
                args,
                before,
                after,
                unclosed,
            } => {
                write!(f, "{}({}", name, before)?;
                for arg in args {
                    write!(f, "{}", arg)?;
                }
                f.write_str(after)?;
                if !unclosed {
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}

/// A parsed declaration value: the top-level node sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value {
    pub nodes: Vec<Node>,
}

impl Value {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Tokenize a value. Never fails: malformed input still yields a tree.
    pub fn parse(input: &str) -> Self {
        Self::new(Tokenizer::new(input).parse())
    }
}

impl Deref for Value {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.nodes
    }
}

impl From<Vec<Node>> for Value {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
