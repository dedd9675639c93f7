//! Errors raised while building an element tree.

use thiserror::Error;

/// Result type for element construction and mutation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parts that must line up one-to-one do not.
    #[error("{what}: expected {expected} but found {found}")]
    StructuralMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A value that is present but unusable.
    #[error("invalid {what}: {reason}")]
    InvalidArgument { what: &'static str, reason: String },

    #[error("cannot move indentation back from depth 0")]
    IndentUnderflow,
}

impl Error {
    pub fn mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        Self::StructuralMismatch {
            what,
            expected,
            found,
        }
    }

    pub fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::mismatch("method call arguments", 2, 1).to_string(),
            "method call arguments: expected 2 but found 1"
        );
        assert_eq!(
            Error::invalid("category name", "must not be empty").to_string(),
            "invalid category name: must not be empty"
        );
    }
}
