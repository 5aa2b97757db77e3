//! Book file writer
//!
//! Opening truncates any existing content. Entries are written in the order
//! they are given; nothing is sorted or deduplicated on the way out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::errors::{StorageError, StorageResult};
use super::record::BookEntry;
use crate::book::Book;

/// Sequential writer over a freshly truncated book file.
///
/// The file handle is released when the writer is dropped, whether or not
/// [`BookWriter::finish`] was reached.
pub struct BookWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    bytes_written: u64,
    entries_written: usize,
}

impl BookWriter {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> StorageResult<Self> {
        let file = File::create(path).map_err(|e| {
            StorageError::io(
                format!("Failed to open book file for writing: {}", path.display()),
                e,
            )
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            bytes_written: 0,
            entries_written: 0,
        })
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn entries_written(&self) -> usize {
        self.entries_written
    }

    /// Appends one entry.
    pub fn write(&mut self, book: &Book) -> StorageResult<()> {
        let entry = BookEntry::from_book(book);
        entry.write_to(&mut self.writer).map_err(|e| {
            StorageError::io(
                format!(
                    "Failed to write \"{}\" at byte offset {} of {}",
                    entry.title,
                    self.bytes_written,
                    self.path.display()
                ),
                e,
            )
        })?;

        self.bytes_written += entry.encoded_len();
        self.entries_written += 1;
        Ok(())
    }

    /// Flushes buffered entries and syncs the file to disk.
    pub fn finish(mut self) -> StorageResult<()> {
        self.writer.flush().map_err(|e| {
            StorageError::io(
                format!("Failed to flush book file: {}", self.path.display()),
                e,
            )
        })?;
        self.writer.get_ref().sync_all().map_err(|e| {
            StorageError::io(
                format!("fsync failed on book file: {}", self.path.display()),
                e,
            )
        })
    }
}
