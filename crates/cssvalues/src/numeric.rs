//! Numeric leaves
//!
//! Integers, numbers and every dimension family, each checked against its
//! own unit table.

use cssvalues_parser::Node;

use crate::calc::is_calc;

pub const LENGTH_UNITS: &[&str] = &[
    "em", "ex", "ch", "rem", "vh", "vw", "vmin", "vmax", "px", "q", "mm", "cm", "in", "pt", "pc",
];
pub const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];
pub const TIME_UNITS: &[&str] = &["s", "ms"];
pub const RESOLUTION_UNITS: &[&str] = &["dpi", "dpcm", "dppx"];

/// A word split into its numeric prefix and unit suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension<'a> {
    pub number: &'a str,
    pub unit: &'a str,
}

impl<'a> Dimension<'a> {
    /// Split a word into number and unit. The sign is only allowed first
    /// and only one '.' is taken; `None` when no digit was seen.
    pub fn split(value: &'a str) -> Option<Self> {
        let mut dotted = false;
        let mut digits = false;
        let mut end = 0;

        for (index, c) in value.char_indices() {
            match c {
                '0'..='9' => digits = true,
                '.' if !dotted => dotted = true,
                '+' | '-' if index == 0 => {}
                _ => break,
            }
            end = index + 1;
        }

        digits.then(|| Self {
            number: &value[..end],
            unit: &value[end..],
        })
    }

    /// No bare trailing '.' on the number and no '.' in the unit
    pub fn is_clean(&self) -> bool {
        !self.number.ends_with('.') && !self.unit.contains('.')
    }

    pub fn is_zero(&self) -> bool {
        self.number == "0" && self.unit.is_empty()
    }
}

/// Split a word node, requiring a clean numeric prefix
fn dimension(node: &Node) -> Option<Dimension<'_>> {
    node.as_word()
        .and_then(Dimension::split)
        .filter(Dimension::is_clean)
}

fn has_unit(node: &Node, units: &[&str]) -> bool {
    dimension(node).is_some_and(|d| units.contains(&d.unit))
}

pub fn is_integer(node: &Node) -> bool {
    match node.as_word() {
        Some(value) => Dimension::split(value)
            .is_some_and(|d| d.unit.is_empty() && !value.contains('.')),
        None => false,
    }
}

/// Plain decimal number with optional sign, fraction and exponent
pub fn is_number(node: &Node) -> bool {
    node.as_word().is_some_and(is_number_text)
}

pub fn is_number_text(value: &str) -> bool {
    let body = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (mantissa, None),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = match fraction {
        Some(fraction) => {
            !fraction.is_empty() && all_digits(whole) && all_digits(fraction)
        }
        None => !whole.is_empty() && all_digits(whole),
    };
    let exponent_ok = exponent.map_or(true, |e| {
        let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

pub fn is_percentage(node: &Node) -> bool {
    has_unit(node, &["%"])
}

/// Length dimension, unitless zero, or a valid `calc()`
pub fn is_length(node: &Node) -> bool {
    if is_calc(node) {
        return true;
    }
    dimension(node).is_some_and(|d| d.is_zero() || LENGTH_UNITS.contains(&d.unit))
}

pub fn is_length_percentage(node: &Node) -> bool {
    is_length(node) || is_percentage(node)
}

pub fn is_angle(node: &Node) -> bool {
    dimension(node).is_some_and(|d| d.is_zero() || ANGLE_UNITS.contains(&d.unit))
}

pub fn is_time(node: &Node) -> bool {
    has_unit(node, TIME_UNITS)
}

pub fn is_resolution(node: &Node) -> bool {
    has_unit(node, RESOLUTION_UNITS)
}

/// Non-negative `fr` value
pub fn is_flex(node: &Node) -> bool {
    dimension(node).is_some_and(|d| {
        d.unit == "fr" && d.number.parse::<f64>().map_or(false, |n| n >= 0.0)
    })
}

pub fn is_multiplier(node: &Node) -> bool {
    has_unit(node, &["x"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Node {
        Node::word(text)
    }

    #[test]
    fn test_split() {
        assert_eq!(
            Dimension::split("-1.5em"),
            Some(Dimension { number: "-1.5", unit: "em" })
        );
        assert_eq!(
            Dimension::split("1.2.3"),
            Some(Dimension { number: "1.2", unit: ".3" })
        );
        assert_eq!(Dimension::split("5-"), Some(Dimension { number: "5", unit: "-" }));
        assert_eq!(Dimension::split("em"), None);
        assert_eq!(Dimension::split("-"), None);
        assert_eq!(Dimension::split(""), None);
    }

    #[test]
    fn test_integer() {
        assert!(is_integer(&word("10")));
        assert!(is_integer(&word("-3")));
        assert!(is_integer(&word("+3")));
        assert!(!is_integer(&word("3.5")));
        assert!(!is_integer(&word("3px")));
        assert!(!is_integer(&Node::string("3")));
    }

    #[test]
    fn test_number() {
        for ok in ["1", "-1", "+.5", "0.25", "1e3", "2.5E-2"] {
            assert!(is_number(&word(ok)), "{ok}");
        }
        for bad in ["3.", ".", "", "+", "1px", "0x10", "Infinity", "1e", "1.2.3"] {
            assert!(!is_number(&word(bad)), "{bad}");
        }
    }

    #[test]
    fn test_percentage() {
        assert!(is_percentage(&word("50%")));
        assert!(is_percentage(&word("-.5%")));
        assert!(!is_percentage(&word("3.%")));
        assert!(!is_percentage(&word("50")));
    }

    #[test]
    fn test_length() {
        assert!(is_length(&word("10px")));
        assert!(is_length(&word("0")));
        assert!(is_length(&word("1.5rem")));
        assert!(!is_length(&word("3.px")));
        assert!(!is_length(&word("10")));
        assert!(!is_length(&word("10PX")));
        assert!(!is_length(&word("10%")));
        assert!(is_length_percentage(&word("10%")));
    }

    #[test]
    fn test_angle_time_resolution() {
        assert!(is_angle(&word("90deg")));
        assert!(is_angle(&word("0")));
        assert!(is_angle(&word("-0.5turn")));
        assert!(!is_angle(&word("90")));
        assert!(is_time(&word("200ms")));
        assert!(is_time(&word(".5s")));
        assert!(!is_time(&word("5")));
        assert!(is_resolution(&word("2dppx")));
        assert!(!is_resolution(&word("2x")));
        assert!(is_multiplier(&word("2x")));
    }

    #[test]
    fn test_flex() {
        assert!(is_flex(&word("1fr")));
        assert!(is_flex(&word("0.5fr")));
        assert!(!is_flex(&word("-1fr")));
        assert!(!is_flex(&word("1px")));
    }
}
