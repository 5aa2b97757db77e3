//! CLI module for booklist
//!
//! Provides command-line interface for:
//! - add: Validate a book and store it
//! - list: Print stored books in title order

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{add, add_book, list, list_books, open_storage, run, run_command};
pub use errors::{CliError, CliResult};
