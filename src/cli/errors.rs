//! CLI error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::book::BookError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {}", .0.code(), .0)]
    Storage(#[from] StorageError),

    #[error("{}: {}", .0.code(), .0)]
    Book(#[from] BookError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code() {
        let err = CliError::from(StorageError::Truncated { offset: 7 });
        assert!(err.to_string().starts_with("STORAGE_TRUNCATED: "));

        let err = CliError::from(BookError::Type);
        assert!(err.to_string().starts_with("BOOK_TYPE_MISMATCH: "));
    }
}
