//! Value Tokenizer
//!
//! Splits a declaration value into words, strings, dividers, spaces and
//! nested functions. Lenient: every input produces a tree.

use log::trace;
use smallvec::SmallVec;

use crate::node::{Divider, Node};

/// An open function whose closing ')' has not been seen yet
struct Frame {
    name: String,
    before: String,
    nodes: Vec<Node>,
}

/// CSS value tokenizer
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    root: Vec<Node>,
    stack: SmallVec<[Frame; 4]>,
    /// Whitespace seen right before a divider
    before: String,
    /// Whitespace seen right before a closing ')'
    after: String,
}

fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

/// Check whether the byte at `at` is preceded by an odd run of backslashes
fn is_escaped(bytes: &[u8], at: usize) -> bool {
    bytes[..at].iter().rev().take_while(|&&b| b == b'\\').count() % 2 == 1
}

/// Find the next unescaped `target` at or after `from`
fn find_unescaped(bytes: &[u8], from: usize, target: u8) -> Option<usize> {
    let mut search = from;
    while search < bytes.len() {
        let at = search + bytes[search..].iter().position(|&b| b == target)?;
        if !is_escaped(bytes, at) {
            return Some(at);
        }
        search = at + 1;
    }
    None
}

/// Take back a trailing Space node left behind by a comment, so the
/// whitespace can join the divider or closing ')' that follows it
fn pop_space(nodes: &mut Vec<Node>) -> String {
    match nodes.pop() {
        Some(Node::Space(space)) => space,
        Some(node) => {
            nodes.push(node);
            String::new()
        }
        None => String::new(),
    }
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            root: Vec::new(),
            stack: SmallVec::new(),
            before: String::new(),
            after: String::new(),
        }
    }

    /// Tokenize the whole input into its top-level node sequence
    pub fn parse(mut self) -> Vec<Node> {
        while let Some(c) = self.peek() {
            match c {
                c if is_whitespace(c) => self.consume_whitespace(),
                b'\'' | b'"' => self.consume_string(c),
                b'/' if self.peek_at(1) == Some(b'*') => self.consume_comment(),
                b',' | b'/' | b':' => self.consume_divider(c),
                b'(' => {
                    self.position += 1;
                    self.open_function(String::new());
                }
                b')' if !self.stack.is_empty() => self.close_function(),
                _ => self.consume_word(),
            }
        }
        self.finish()
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.position + offset).copied()
    }

    /// Node list of the innermost open function, or the top level
    fn current(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.nodes,
            None => &mut self.root,
        }
    }

    fn take_whitespace(&mut self) -> &'a str {
        let input = self.input;
        let start = self.position;
        while matches!(self.peek(), Some(c) if is_whitespace(c)) {
            self.position += 1;
        }
        &input[start..self.position]
    }

    fn divider_next(&self) -> bool {
        match self.peek() {
            Some(b',') | Some(b':') => true,
            Some(b'/') => self.peek_at(1) != Some(b'*'),
            _ => false,
        }
    }

    fn consume_whitespace(&mut self) {
        let whitespace = self.take_whitespace();

        if self.peek() == Some(b')') && !self.stack.is_empty() {
            self.after.push_str(whitespace);
            return;
        }
        if self.divider_next() {
            self.before.push_str(whitespace);
            return;
        }
        let nodes = self.current();
        match nodes.last_mut() {
            Some(Node::Div { after, .. }) => after.push_str(whitespace),
            // Whitespace on the far side of a comment
            Some(Node::Space(space)) => space.push_str(whitespace),
            _ => nodes.push(Node::Space(whitespace.to_string())),
        }
    }

    fn consume_string(&mut self, quote: u8) {
        let bytes = self.bytes();
        let start = self.position + 1;
        let (end, unclosed) = match find_unescaped(bytes, start, quote) {
            Some(end) => (end, false),
            None => {
                trace!("unterminated string starting at {}", self.position);
                (bytes.len(), true)
            }
        };

        let node = Node::String {
            value: self.input[start..end].to_string(),
            quote: quote as char,
            unclosed,
        };
        self.current().push(node);
        self.position = (end + 1).min(bytes.len());
    }

    fn consume_comment(&mut self) {
        let start = self.position + 2;
        self.position = match self.input[start..].find("*/") {
            Some(offset) => start + offset + 2,
            None => self.input.len(),
        };
    }

    fn consume_divider(&mut self, c: u8) {
        self.position += 1;
        let Some(kind) = Divider::from_char(c as char) else {
            return;
        };
        let mut before = pop_space(self.current());
        before.push_str(&std::mem::take(&mut self.before));
        let node = Node::Div {
            kind,
            before,
            after: String::new(),
        };
        self.current().push(node);
    }

    fn consume_word(&mut self) {
        let bytes = self.bytes();
        let start = self.position;
        let mut end = start;
        loop {
            if bytes[end] == b'\\' {
                end += 1;
            }
            end += 1;
            if end >= bytes.len() {
                end = bytes.len();
                break;
            }
            let c = bytes[end];
            if is_whitespace(c)
                || matches!(c, b'\'' | b'"' | b',' | b':' | b'/' | b'(')
                || (c == b')' && !self.stack.is_empty())
            {
                break;
            }
        }

        let word = self.input[start..end].to_string();
        self.position = end;
        if self.peek() == Some(b'(') {
            self.position += 1;
            self.open_function(word);
        } else {
            self.current().push(Node::Word(word));
        }
    }

    /// Called with the position just past '('
    fn open_function(&mut self, name: String) {
        let before = self.take_whitespace().to_string();
        let quoted = matches!(self.peek(), Some(b'\'') | Some(b'"'));
        if name.eq_ignore_ascii_case("url") && !quoted {
            self.consume_url(name, before);
            return;
        }
        self.stack.push(Frame {
            name,
            before,
            nodes: Vec::new(),
        });
    }

    /// Unquoted url(): everything up to the next unescaped ')' is one word
    fn consume_url(&mut self, name: String, before: String) {
        let bytes = self.bytes();
        let start = self.position;
        let (close, unclosed) = match find_unescaped(bytes, start, b')') {
            Some(close) => (close, false),
            None => {
                trace!("unterminated url() starting at {}", start);
                (bytes.len(), true)
            }
        };

        let content = &self.input[start..close];
        let trimmed = content.trim_end_matches(|c: char| c <= ' ');
        let args = if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![Node::Word(trimmed.to_string())]
        };

        let node = Node::Function {
            name,
            args,
            before,
            after: content[trimmed.len()..].to_string(),
            unclosed,
        };
        self.current().push(node);
        self.position = (close + 1).min(bytes.len());
    }

    fn close_function(&mut self) {
        self.position += 1;
        let Some(mut frame) = self.stack.pop() else {
            return;
        };
        let mut after = pop_space(&mut frame.nodes);
        after.push_str(&std::mem::take(&mut self.after));
        let node = Node::Function {
            name: frame.name,
            args: frame.nodes,
            before: frame.before,
            after,
            unclosed: false,
        };
        self.current().push(node);
    }

    fn finish(mut self) -> Vec<Node> {
        while let Some(frame) = self.stack.pop() {
            trace!("closing unterminated function {:?}", frame.name);
            let node = Node::Function {
                name: frame.name,
                args: frame.nodes,
                before: frame.before,
                after: std::mem::take(&mut self.after),
                unclosed: true,
            };
            self.current().push(node);
        }
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Node> {
        Tokenizer::new(input).parse()
    }

    #[test]
    fn test_single_word() {
        assert_eq!(parse("red"), vec![Node::word("red")]);
    }

    #[test]
    fn test_space_separated() {
        let nodes = parse("1px solid red");
        assert_eq!(nodes.len(), 5);
        assert!(matches!(nodes[0], Node::Word(ref s) if s == "1px"));
        assert!(matches!(nodes[1], Node::Space(ref s) if s == " "));
        assert!(matches!(nodes[4], Node::Word(ref s) if s == "red"));
    }

    #[test]
    fn test_comma_absorbs_whitespace() {
        let nodes = parse("a , b");
        assert_eq!(nodes.len(), 3);
        assert!(matches!(
            nodes[1],
            Node::Div { kind: Divider::Comma, ref before, ref after } if before == " " && after == " "
        ));
    }

    #[test]
    fn test_slash_divider() {
        let nodes = parse("10px/2");
        assert_eq!(nodes.len(), 3);
        assert!(nodes[1].is_slash());
    }

    #[test]
    fn test_function_args() {
        let nodes = parse("rgb(255, 0, 0)");
        assert_eq!(nodes.len(), 1);
        let Node::Function { ref name, ref args, .. } = nodes[0] else {
            panic!("expected a function");
        };
        assert_eq!(name, "rgb");
        assert_eq!(args.len(), 5);
        assert!(args[1].is_comma());
        assert!(matches!(args[4], Node::Word(ref s) if s == "0"));
    }

    #[test]
    fn test_function_padding() {
        let nodes = parse("calc( 1px + 2px )");
        let Node::Function { ref before, ref after, ref args, .. } = nodes[0] else {
            panic!("expected a function");
        };
        assert_eq!(before, " ");
        assert_eq!(after, " ");
        assert_eq!(args.len(), 5);
    }

    #[test]
    fn test_nested_functions() {
        let nodes = parse("calc((1px + 2px) * 2)");
        let args = nodes[0].args().unwrap();
        assert!(matches!(args[0], Node::Function { ref name, .. } if name.is_empty()));
        assert_eq!(args[0].args().unwrap().len(), 5);
    }

    #[test]
    fn test_quoted_string() {
        let nodes = parse("'hello world' \"x\"");
        assert!(matches!(
            nodes[0],
            Node::String { ref value, quote: '\'', unclosed: false } if value == "hello world"
        ));
        assert!(matches!(nodes[2], Node::String { quote: '"', .. }));
    }

    #[test]
    fn test_escaped_quote() {
        let nodes = parse(r#""a\"b""#);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], Node::String { ref value, .. } if value == r#"a\"b"#));
    }

    #[test]
    fn test_unclosed_string() {
        let nodes = parse("'abc");
        assert!(matches!(nodes[0], Node::String { unclosed: true, ref value, .. } if value == "abc"));
    }

    #[test]
    fn test_unclosed_function() {
        let nodes = parse("calc(1px");
        assert!(matches!(nodes[0], Node::Function { unclosed: true, .. }));
        assert_eq!(nodes[0].to_string(), "calc(1px");
    }

    #[test]
    fn test_url_bare() {
        let nodes = parse("url( http://example.com/a.png )");
        let Node::Function { ref args, ref before, ref after, .. } = nodes[0] else {
            panic!("expected a function");
        };
        assert_eq!(args, &vec![Node::word("http://example.com/a.png")]);
        assert_eq!(before, " ");
        assert_eq!(after, " ");
    }

    #[test]
    fn test_url_quoted() {
        let nodes = parse("url('a.png')");
        let args = nodes[0].args().unwrap();
        assert!(matches!(args[0], Node::String { ref value, .. } if value == "a.png"));
    }

    #[test]
    fn test_comment_skipped() {
        let nodes = parse("a/* note */b");
        assert_eq!(nodes, vec![Node::word("a"), Node::word("b")]);
    }

    #[test]
    fn test_comment_between_spaces() {
        let nodes = parse("solid /* x */ dashed");
        assert_eq!(nodes.len(), 3);
        assert!(matches!(nodes[1], Node::Space(ref s) if s == "  "));
        assert_eq!(nodes[2], Node::word("dashed"));
    }

    #[test]
    fn test_comment_before_divider() {
        let nodes = parse("slide /* x */, fade");
        assert_eq!(nodes.len(), 3);
        assert!(matches!(
            nodes[1],
            Node::Div { kind: Divider::Comma, ref before, ref after } if before == " " && after == " "
        ));

        let nodes = parse("slide /* x */ , /* y */ fade");
        assert_eq!(nodes.len(), 3);
        assert!(matches!(
            nodes[1],
            Node::Div { kind: Divider::Comma, ref before, ref after } if before == "  " && after == "  "
        ));
    }

    #[test]
    fn test_comment_before_close_paren() {
        let nodes = parse("rgb(1, 2, 3 /* x */ )");
        let Node::Function { ref args, ref after, .. } = nodes[0] else {
            panic!("expected a function");
        };
        assert_eq!(args.len(), 5);
        assert_eq!(after, "  ");
    }

    #[test]
    fn test_stray_paren_at_top_level() {
        let nodes = parse("a)");
        assert_eq!(nodes, vec![Node::word("a)")]);
    }

    #[test]
    fn test_leading_and_trailing_space() {
        let nodes = parse(" red ");
        assert_eq!(nodes.len(), 3);
        assert!(nodes[0].is_space());
        assert!(nodes[2].is_space());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_var_function() {
        let nodes = parse("var(--main-color)");
        assert!(matches!(nodes[0], Node::Function { ref name, .. } if name == "var"));
        assert_eq!(nodes[0].args().unwrap(), &[Node::word("--main-color")]);
    }

    #[test]
    fn test_round_trip_text() {
        for input in ["1px solid red", "a , b", "rgb( 1 ,2,3 )", "url(a.png) no-repeat"] {
            let nodes = parse(input);
            let text: String = nodes.iter().map(|n| n.to_string()).collect();
            assert_eq!(text, input);
        }
    }
}
