//! booklist - validated book records persisted to a flat binary file

pub mod book;
pub mod cli;
pub mod config;
pub mod observability;
pub mod storage;
