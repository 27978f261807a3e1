//! CSS Values
//!
//! Checks a declaration value against the grammar of its property and
//! reports whether it is valid, invalid or for an unrecognised property.

pub mod background;
pub mod calc;
pub mod color;
pub mod colors;
pub mod combinator;
pub mod counter;
pub mod error;
pub mod filter;
pub mod gradient;
pub mod grammar;
pub mod grid;
pub mod ident;
pub mod image;
pub mod keyword;
pub mod numeric;
pub mod position;
pub mod registry;
pub mod shadow;
pub mod shape;
pub mod timing;
pub mod transform;

pub use cssvalues_parser::{Divider, Node, Value};
pub use error::{ValidationError, ValidationResult};
pub use grammar::{Grammar, Leaf, List, Verdict};
pub use registry::{grammar_for, known_properties};

use combinator::is_variable;
use keyword::is_global_keyword;

/// Outcome of validating one declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid { message: String },
    /// Property is not in the registry
    Unknown { message: String },
}

impl Validity {
    fn invalid(message: impl Into<String>) -> Self {
        Validity::Invalid {
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Validity::Unknown { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid { message } | Validity::Unknown { message } => Some(message),
        }
    }

    pub fn into_result(self) -> ValidationResult<()> {
        match self {
            Validity::Valid => Ok(()),
            Validity::Invalid { message } => Err(ValidationError::invalid(message)),
            Validity::Unknown { message } => Err(ValidationError::unknown_property(message)),
        }
    }
}

/// Validate a property/value pair given as text
pub fn validate(property: &str, value: &str) -> Validity {
    validate_value(property, &Value::parse(value))
}

/// Validate a property against an already tokenized value
pub fn validate_value(property: &str, value: &Value) -> Validity {
    log::trace!("Validating {}: {}", property, value);

    if let [only] = value.nodes.as_slice() {
        if is_global_keyword(only) || is_variable(only) {
            return Validity::Valid;
        }
    }

    let Some(grammar) = grammar_for(property) else {
        log::debug!("Unknown property: {}", property);
        return Validity::Unknown {
            message: format!("\"{}\" is not a recognised property.", property),
        };
    };

    if value.is_empty() {
        return Validity::invalid("Expected a value to be passed.");
    }

    match grammar.check(value) {
        Verdict::Match => Validity::Valid,
        Verdict::Mismatch => Validity::invalid(format!(
            "\"{}\" is not a valid value for \"{}\".",
            value, property
        )),
        Verdict::Reject(message) => {
            log::trace!("{} rejected: {}", property, message);
            Validity::Invalid { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(property: &str, value: &str) {
        let result = validate(property, value);
        assert!(result.is_valid(), "{}: {} gave {:?}", property, value, result);
    }

    fn assert_invalid(property: &str, value: &str) {
        let result = validate(property, value);
        assert!(result.is_invalid(), "{}: {} gave {:?}", property, value, result);
    }

    #[test]
    fn test_global_keywords_short_circuit() {
        for property in ["color", "z-index", "not-a-property"] {
            for value in ["inherit", "initial", "revert", "unset", "INHERIT", "var(--x)"] {
                assert_valid(property, value);
            }
        }
    }

    #[test]
    fn test_unknown_property() {
        assert_eq!(
            validate("not-a-property", "red"),
            Validity::Unknown {
                message: "\"not-a-property\" is not a recognised property.".to_string()
            }
        );
        assert!(validate("Color", "red").is_unknown());
    }

    #[test]
    fn test_invalid_message() {
        assert_eq!(
            validate("color", "traansparent"),
            Validity::Invalid {
                message: "\"traansparent\" is not a valid value for \"color\".".to_string()
            }
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(
            validate("color", ""),
            Validity::Invalid {
                message: "Expected a value to be passed.".to_string()
            }
        );
        assert!(validate("colr", "").is_unknown());
    }

    #[test]
    fn test_colors() {
        for value in ["#fff", "#ffffff", "rgba(0,0,0,0.5)", "hsl(120, 50%, 50%)", "transparent"] {
            assert_valid("color", value);
        }
        assert_invalid("color", "#ff");
        assert_invalid("color", "rgb(0,0)");
    }

    #[test]
    fn test_numeric_edges() {
        assert_valid("z-index", "auto");
        assert_valid("z-index", "-1");
        assert_invalid("z-index", "3.5");
        assert_invalid("opacity", "3.");
        assert_invalid("width", "3.px");
        assert_invalid("padding-top", "3.%");
    }

    #[test]
    fn test_repetition() {
        assert_valid("animation-name", "slide, none, myAnim");
        assert_invalid("animation-name", "slide,,myAnim");
        assert_eq!(
            validate("border-color", "red green blue black yellow"),
            Validity::Invalid {
                message: "Expected a maximum of 4 values.".to_string()
            }
        );
    }

    #[test]
    fn test_position() {
        assert_valid("background-position", "top 10px left 20px");
        assert_invalid("background-position", "left 10px top");
    }

    #[test]
    fn test_calc() {
        assert_valid("width", "calc(100% - 10px)");
        assert_invalid("width", "calc(100% -)");
        assert_valid("width", "calc(-10px)");
    }

    #[test]
    fn test_single_value_message() {
        assert_eq!(
            validate("display", "block inline").message(),
            Some("Expected a single value to be passed.")
        );
    }

    #[test]
    fn test_pre_parsed_value() {
        let value = Value::new(vec![Node::word("10px"), Node::space(), Node::word("auto")]);
        assert_valid("background-size", "10px auto");
        assert!(validate_value("background-size", &value).is_valid());
        let value = Value::new(vec![Node::function("var", vec![Node::word("--gap")])]);
        assert!(validate_value("margin-top", &value).is_valid());
    }

    #[test]
    fn test_comments_are_ignored() {
        assert_valid("border-style", "solid /* x */ dashed");
        assert_valid("animation-name", "slide /* x */, fade");
        assert_valid("animation-name", "slide /* x */ , /* y */ fade");
        assert_valid("color", "rgb(1, 2, 3 /* x */ )");
        assert_invalid("border-style", "solid/* x */dashed");
    }

    #[test]
    fn test_deterministic() {
        let first = validate("transform", "rotate(45deg) scale(1.5)");
        let second = validate("transform", "rotate(45deg) scale(1.5)");
        assert_eq!(first, second);
        assert!(first.is_valid());
    }

    #[test]
    fn test_into_result() {
        assert!(validate("color", "red").into_result().is_ok());
        let error = validate("color", "reed").into_result().unwrap_err();
        assert!(!error.is_unknown_property());
        let error = validate("colr", "red").into_result().unwrap_err();
        assert!(error.is_unknown_property());
    }
}
