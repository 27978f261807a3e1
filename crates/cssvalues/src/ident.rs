//! Identifier and string leaves

use cssvalues_parser::Node;

use crate::combinator::is_function;
use crate::grammar::Verdict;

pub fn is_string(node: &Node) -> bool {
    matches!(node, Node::String { .. })
}

pub fn is_url(node: &Node) -> bool {
    is_function(node, &["url"])
}

/// `<custom-ident>`
pub fn is_custom_ident(node: &Node) -> bool {
    node.as_word().is_some_and(is_custom_ident_text)
}

pub fn is_custom_ident_text(value: &str) -> bool {
    let mut chars = value.chars();
    let first = chars.next();
    let second = chars.next();
    let third = chars.next();

    match first {
        Some('-') => {
            if second.is_some_and(|c| c.is_ascii_digit()) {
                return false;
            }
            if second == Some('-') && third != Some('-') {
                return false;
            }
            has_valid_chars(value)
        }
        Some(c) if c.is_ascii_digit() => false,
        _ => has_valid_chars(value),
    }
}

fn has_valid_chars(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        || has_escape(value)
}

/// Contains a `\XX` or `\uXX` hex escape
fn has_escape(value: &str) -> bool {
    value.match_indices('\\').any(|(at, _)| {
        let rest = &value[at + 1..];
        let rest = rest
            .strip_prefix(['u', 'U'])
            .filter(|r| r.starts_with(|c: char| c.is_ascii_hexdigit()))
            .unwrap_or(rest);
        rest.starts_with(|c: char| c.is_ascii_hexdigit())
    })
}

/// `#` followed by a custom identifier, with an explanation on failure
pub fn check_id_selector(node: &Node) -> Verdict {
    let Some(value) = node.as_word() else {
        return Verdict::Mismatch;
    };
    match value.strip_prefix('#') {
        None => Verdict::reject(format!("Expected \"{}\" to start with a \"#\".", value)),
        Some(ident) if !is_custom_ident_text(ident) => Verdict::reject(format!(
            "Expected \"{}\" to be a valid custom identifier.",
            value
        )),
        Some(_) => Verdict::Match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_ident() {
        for ok in ["slide", "my_anim-2", "-webkit-thing", "---x", "_private", "\\31 23"] {
            assert!(is_custom_ident_text(ok), "{ok}");
        }
        for bad in ["1abc", "-1abc", "--x", "a.b", "a b"] {
            assert!(!is_custom_ident_text(bad), "{bad}");
        }
    }

    #[test]
    fn test_custom_ident_requires_word() {
        assert!(is_custom_ident(&Node::word("foo")));
        assert!(!is_custom_ident(&Node::string("foo")));
    }

    #[test]
    fn test_url() {
        assert!(is_url(&Node::function("URL", vec![Node::word("a.png")])));
        assert!(!is_url(&Node::word("url")));
    }

    #[test]
    fn test_id_selector() {
        assert_eq!(check_id_selector(&Node::word("#main")), Verdict::Match);
        assert_eq!(
            check_id_selector(&Node::word("main")),
            Verdict::reject("Expected \"main\" to start with a \"#\".")
        );
        assert_eq!(
            check_id_selector(&Node::word("#1main")),
            Verdict::reject("Expected \"#1main\" to be a valid custom identifier.")
        );
        assert_eq!(check_id_selector(&Node::string("#main")), Verdict::Mismatch);
    }
}
