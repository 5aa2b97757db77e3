//! CLI argument definitions using clap
//!
//! Commands:
//! - booklist add --config <path> --author <a> --title <t> --pages <n> --year <y>
//! - booklist list --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// booklist - validated book records in a flat binary file
#[derive(Parser, Debug)]
#[command(name = "booklist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a book to the stored list
    Add {
        /// Path to configuration file
        #[arg(long, default_value = "./booklist.json")]
        config: PathBuf,

        #[arg(long)]
        author: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        pages: i32,

        /// Year of publishing (may be negative)
        #[arg(long, allow_negative_numbers = true)]
        year: i32,
    },

    /// Print every stored book in title order
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./booklist.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
