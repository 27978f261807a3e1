//! Grid track sizes

use cssvalues_parser::Node;

use crate::combinator::function_args;
use crate::keyword::is_keyword;
use crate::numeric::{is_flex, is_length_percentage};

const TRACK_KEYWORDS: &[&str] = &["min-content", "max-content", "auto"];

fn is_track_breadth(node: &Node) -> bool {
    is_keyword(node, TRACK_KEYWORDS) || is_length_percentage(node)
}

/// `minmax(<inflexible-breadth>, <track-breadth>)`
fn is_minmax(node: &Node) -> bool {
    matches!(
        function_args(node, &["minmax"]),
        Some([min, comma, max])
            if is_track_breadth(min)
                && comma.is_comma()
                && (is_track_breadth(max) || is_flex(max))
    )
}

/// `<track-size>`
pub fn is_track_size(node: &Node) -> bool {
    is_minmax(node) || is_flex(node) || is_track_breadth(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssvalues_parser::parse;

    fn track(input: &str) -> bool {
        let value = parse(input);
        value.len() == 1 && is_track_size(&value[0])
    }

    #[test]
    fn test_track_size() {
        assert!(track("1fr"));
        assert!(track("100px"));
        assert!(track("max-content"));
        assert!(track("minmax(100px, 1fr)"));
        assert!(track("minmax(auto, 50%)"));
    }

    #[test]
    fn test_track_size_invalid() {
        assert!(!track("-1fr"));
        assert!(!track("minmax(1fr, 100px)"));
        assert!(!track("minmax(100px)"));
        assert!(!track("fit"));
    }
}
