//! Storage error types
//!
//! Error codes:
//! - STORAGE_CONFIGURATION (missing path or logger at construction)
//! - STORAGE_IO_ERROR (file could not be opened, written or read)
//! - STORAGE_TRUNCATED (file ends inside an entry)
//! - STORAGE_CORRUPTED (entry bytes are not decodable)
//! - STORAGE_INVALID_RECORD (entry decodes to values a book rejects)

use std::io;

use thiserror::Error;

use crate::book::BookError;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{message}: {source}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("file ends inside the entry at byte offset {offset}")]
    Truncated { offset: u64 },

    #[error("corrupted entry at byte offset {offset}: {reason}")]
    Corrupted { offset: u64, reason: String },

    #[error("invalid book at byte offset {offset}: {source}")]
    InvalidRecord {
        offset: u64,
        #[source]
        source: BookError,
    },
}

impl StorageError {
    pub(crate) fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Configuration(_) => "STORAGE_CONFIGURATION",
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::Truncated { .. } => "STORAGE_TRUNCATED",
            StorageError::Corrupted { .. } => "STORAGE_CORRUPTED",
            StorageError::InvalidRecord { .. } => "STORAGE_INVALID_RECORD",
        }
    }

    /// Returns true for every failure raised while touching the file.
    pub fn is_io(&self) -> bool {
        !matches!(self, StorageError::Configuration(_))
    }

    /// Returns true if the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }

    /// Returns the byte offset of the failing entry, if known.
    pub fn offset(&self) -> Option<u64> {
        match self {
            StorageError::Truncated { offset }
            | StorageError::Corrupted { offset, .. }
            | StorageError::InvalidRecord { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
