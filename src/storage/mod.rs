//! Book storage
//!
//! Persists book sequences to a single flat binary file and loads them back.
//!
//! # Design Principles
//!
//! - Fixed entry layout, no header, no version, no checksum
//! - Write order is input order; no sorting or dedup on save
//! - Read produces a title-ordered shelf holding one book per title
//! - File handles are scoped to a single `save`/`read` call
//! - Every failure is logged, then returned

mod book_list;
mod errors;
mod reader;
mod record;
mod writer;

pub use book_list::{BookListStorage, BookStorage, StorageBuilder};
pub use errors::{StorageError, StorageResult};
pub use reader::BookReader;
pub use record::BookEntry;
pub use writer::BookWriter;
