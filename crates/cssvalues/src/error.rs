//! Validation error types

use thiserror::Error;

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a declaration failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    Invalid { message: String },

    #[error("{message}")]
    UnknownProperty { message: String },
}

impl ValidationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn unknown_property(message: impl Into<String>) -> Self {
        Self::UnknownProperty {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message } | Self::UnknownProperty { message } => message,
        }
    }

    /// Unknown properties are usually passed through rather than flagged
    pub fn is_unknown_property(&self) -> bool {
        matches!(self, Self::UnknownProperty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::invalid("\"x\" is not a valid value for \"color\".");
        assert_eq!(error.to_string(), "\"x\" is not a valid value for \"color\".");
        assert!(!error.is_unknown_property());
    }

    #[test]
    fn test_unknown_property() {
        let error = ValidationError::unknown_property("\"colr\" is not a recognised property.");
        assert!(error.is_unknown_property());
        assert_eq!(error.message(), "\"colr\" is not a recognised property.");
    }
}
