//! Book error types
//!
//! Error codes:
//! - BOOK_VALIDATION_FAILED (a field violates its rule)
//! - BOOK_TYPE_MISMATCH (comparison against a value that is not a book)

use thiserror::Error;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Errors raised while building or comparing books
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// A field was rejected at assignment time
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// A book was compared against some other type
    #[error("cannot compare a book with a value of another type")]
    Type,
}

impl BookError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            BookError::Validation { .. } => "BOOK_VALIDATION_FAILED",
            BookError::Type => "BOOK_TYPE_MISMATCH",
        }
    }

    /// Returns the offending field for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BookError::Validation { field, .. } => Some(field),
            BookError::Type => None,
        }
    }
}
