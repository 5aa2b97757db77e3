//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::book::{Book, BookShelf};
use crate::config::Config;
use crate::observability::JsonLogger;
use crate::storage::{BookListStorage, BookStorage};

use super::args::Command;
use super::errors::CliResult;

/// Main entry point for the CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Add {
            config,
            author,
            title,
            pages,
            year,
        } => add(&config, author, title, pages, year),
        Command::List { config } => list(&config),
    }
}

/// Add one book and rewrite the file
pub fn add(
    config_path: &Path,
    author: String,
    title: String,
    pages: i32,
    year: i32,
) -> CliResult<()> {
    let book = Book::new(author, title, pages, year)?;
    let storage = open_storage(config_path)?;

    let mut stdout = io::stdout();
    if add_book(&storage, book.clone())? {
        writeln!(stdout, "Added {}", book)?;
    } else {
        writeln!(stdout, "A book titled \"{}\" is already stored", book.title())?;
    }
    Ok(())
}

/// Print every stored book in title order
pub fn list(config_path: &Path) -> CliResult<()> {
    let storage = open_storage(config_path)?;
    list_books(&storage, &mut io::stdout())
}

/// Build storage from the configuration file.
///
/// Log lines go through a [`JsonLogger`] at the configured level.
pub fn open_storage(config_path: &Path) -> CliResult<BookListStorage> {
    let config = Config::load(config_path)?;
    let logger = Arc::new(JsonLogger::new(config.severity()?));

    let mut builder = BookListStorage::builder().logger(logger);
    if let Some(path) = config.storage_path {
        builder = builder.path(path);
    }
    Ok(builder.build()?)
}

/// Adds `book` to the stored shelf.
///
/// A missing file is treated as an empty shelf. Returns `false` and leaves
/// the file untouched when the title is already stored.
pub fn add_book(storage: &BookListStorage, book: Book) -> CliResult<bool> {
    let mut shelf = if storage.path().exists() {
        storage.read()?
    } else {
        BookShelf::new()
    };

    if !shelf.insert(book) {
        return Ok(false);
    }
    storage.save(&shelf)?;
    Ok(true)
}

/// Writes one description line per stored book.
pub fn list_books<W: Write>(storage: &dyn BookStorage, out: &mut W) -> CliResult<()> {
    for book in &storage.read()? {
        writeln!(out, "{}", book)?;
    }
    Ok(())
}
