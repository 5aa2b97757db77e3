//! Book records
//!
//! # Contract
//!
//! - Fields are validated at assignment time; a `Book` never holds an empty
//!   author or title, a non-positive page count, or a future year
//! - The identity is derived once from the four fields; books are immutable,
//!   so it never goes stale
//! - Equality is field-wise, gated by identity
//! - Ordering is by title only, and a `BookShelf` keeps one book per title

mod errors;
mod record;
mod shelf;

pub use errors::{BookError, BookResult};
pub use record::{current_year, Book};
pub use shelf::BookShelf;
