//! File-backed book storage
//!
//! `save` writes every given book in order; `read` loads the file back into a
//! [`BookShelf`], which keeps the first book seen for each title. Failures are
//! logged through the injected [`Log`] and then returned unchanged.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::errors::{StorageError, StorageResult};
use super::reader::BookReader;
use super::writer::BookWriter;
use crate::book::{Book, BookShelf};
use crate::observability::Log;

/// Storage capability exposed to callers.
pub trait BookStorage {
    /// Persist `books` in the given order, replacing previous content.
    fn save(&self, books: &[Book]) -> StorageResult<()>;

    /// Load every stored book into a title-ordered shelf.
    fn read(&self) -> StorageResult<BookShelf>;
}

/// Books stored in a single binary file.
#[derive(Clone)]
pub struct BookListStorage {
    path: PathBuf,
    logger: Arc<dyn Log>,
}

impl BookListStorage {
    /// Creates storage over `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` if `path` is empty.
    pub fn new(path: impl Into<PathBuf>, logger: Arc<dyn Log>) -> StorageResult<Self> {
        Self::builder().path(path).logger(logger).build()
    }

    pub fn builder() -> StorageBuilder {
        StorageBuilder::default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `books` to the file in iteration order.
    ///
    /// Any existing content is truncated first. If a write fails part-way,
    /// the file holds whatever was written before the failure.
    pub fn save<'a, I>(&self, books: I) -> StorageResult<()>
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let count = self.logged(self.write_all(books))?;
        self.logger.info(&format!(
            "Saved {} books to file: {}.",
            count,
            self.path.display()
        ));
        Ok(())
    }

    /// Reads the whole file into a shelf.
    pub fn read(&self) -> StorageResult<BookShelf> {
        let shelf = self.logged(BookReader::open(&self.path).and_then(|mut r| r.read_all()))?;
        self.logger.info(&format!(
            "Loaded {} books from file: {}.",
            shelf.len(),
            self.path.display()
        ));
        Ok(shelf)
    }

    fn write_all<'a, I>(&self, books: I) -> StorageResult<usize>
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let mut writer = BookWriter::create(&self.path)?;
        for book in books {
            writer.write(book)?;
        }
        let count = writer.entries_written();
        writer.finish()?;
        Ok(count)
    }

    fn logged<T>(&self, result: StorageResult<T>) -> StorageResult<T> {
        if let Err(ref e) = result {
            self.logger.error(&format!("[{}] {}", e.code(), e));
        }
        result
    }
}

impl BookStorage for BookListStorage {
    fn save(&self, books: &[Book]) -> StorageResult<()> {
        BookListStorage::save(self, books)
    }

    fn read(&self) -> StorageResult<BookShelf> {
        BookListStorage::read(self)
    }
}

impl fmt::Debug for BookListStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookListStorage")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Builder for [`BookListStorage`]; both the path and the logger are required.
#[derive(Default)]
pub struct StorageBuilder {
    path: Option<PathBuf>,
    logger: Option<Arc<dyn Log>>,
}

impl StorageBuilder {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Log>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the storage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` when the path is missing or
    /// empty, or when no logger was given. The error is logged first if a
    /// logger is available.
    pub fn build(self) -> StorageResult<BookListStorage> {
        let path = self.path.filter(|p| !p.as_os_str().is_empty());

        match (path, self.logger) {
            (Some(path), Some(logger)) => Ok(BookListStorage { path, logger }),
            (None, Some(logger)) => {
                let err = StorageError::Configuration("path to file can't be empty".into());
                logger.error(&format!("[{}] {}", err.code(), err));
                Err(err)
            }
            (_, None) => Err(StorageError::Configuration("logger can't be absent".into())),
        }
    }
}
