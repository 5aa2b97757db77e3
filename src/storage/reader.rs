//! Book file reader
//!
//! Reads entries until the read position equals the file length. A file that
//! ends part-way through an entry is an error; no partial result is returned.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use super::errors::{StorageError, StorageResult};
use super::record::BookEntry;
use crate::book::{Book, BookShelf};

/// Sequential reader over a book file.
pub struct BookReader {
    path: PathBuf,
    reader: BufReader<File>,
    current_offset: u64,
    file_size: u64,
}

impl BookReader {
    /// Opens the book file for reading.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let file = File::open(path).map_err(|e| {
            StorageError::io(
                format!("Failed to open book file for reading: {}", path.display()),
                e,
            )
        })?;

        let file_size = file
            .metadata()
            .map_err(|e| {
                StorageError::io(
                    format!("Failed to read file metadata: {}", path.display()),
                    e,
                )
            })?
            .len();

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            current_offset: 0,
            file_size,
        })
    }

    /// Returns the byte offset of the next entry.
    pub fn current_offset(&self) -> u64 {
        self.current_offset
    }

    /// Returns whether there are more entries to read.
    pub fn has_more(&self) -> bool {
        self.current_offset < self.file_size
    }

    /// Reads and validates the next entry.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(book))` if an entry was read
    /// - `Ok(None)` at end of file
    /// - `Err(Truncated)` if the file ends inside the entry
    /// - `Err(Corrupted)` if a text field is not UTF-8
    /// - `Err(InvalidRecord)` if the decoded values are not a valid book
    pub fn read_next(&mut self) -> StorageResult<Option<Book>> {
        if !self.has_more() {
            return Ok(None);
        }

        let offset = self.current_offset;
        let entry = BookEntry::read_from(&mut self.reader).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => StorageError::Truncated { offset },
            io::ErrorKind::InvalidData => StorageError::Corrupted {
                offset,
                reason: e.to_string(),
            },
            _ => StorageError::io(
                format!(
                    "Failed to read entry at byte offset {} of {}",
                    offset,
                    self.path.display()
                ),
                e,
            ),
        })?;

        self.current_offset += entry.encoded_len();

        let book = entry
            .into_book()
            .map_err(|source| StorageError::InvalidRecord { offset, source })?;
        Ok(Some(book))
    }

    /// Reads every remaining entry into a title-ordered shelf.
    ///
    /// Entries whose title is already on the shelf are dropped.
    pub fn read_all(&mut self) -> StorageResult<BookShelf> {
        let mut shelf = BookShelf::new();
        while let Some(book) = self.read_next()? {
            shelf.insert(book);
        }
        Ok(shelf)
    }
}
