//! Observability for booklist
//!
//! Components never write log output directly. They receive a [`Log`]
//! implementation and report through it:
//!
//! - [`JsonLogger`]: structured JSON lines on stdout/stderr
//! - [`MemoryLogger`]: captures lines for tests
//!
//! Logging is synchronous and never fails the operation being logged.

mod logger;

pub use logger::{JsonLogger, Log, MemoryLogger, Severity};
