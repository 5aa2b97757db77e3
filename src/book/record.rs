//! The book value type
//!
//! A `Book` is immutable once built. Every field is validated at assignment
//! time and the identity is derived from the four validated values:
//!
//! ```text
//! identity = pages + hash(author) * 3 + hash(title) * 5 + year * 7
//! ```
//!
//! All arithmetic wraps in `i32`. Equal field tuples always yield equal
//! identities, so the identity doubles as the `Hash` value and as a cheap
//! reject before field-wise equality.
//!
//! Ordering is by title alone. Two books sharing a title compare `Equal`
//! through [`Book::compare`] while still being unequal under `==`, which is
//! why the ordering is not exposed through `Ord`.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, Local};

use super::errors::{BookError, BookResult};

/// Returns the current calendar year from the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// A validated book record.
#[derive(Debug, Clone)]
pub struct Book {
    id: i32,
    author: String,
    title: String,
    pages: i32,
    year: i32,
}

impl Book {
    /// Builds a book, validating each field.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `author` or `title` is empty, if
    /// `pages` is not positive, or if `year` lies after the current year.
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        pages: i32,
        year: i32,
    ) -> BookResult<Self> {
        let author = validate_author(author.into())?;
        let title = validate_title(title.into())?;
        let pages = validate_pages(pages)?;
        let year = validate_year(year)?;

        Ok(Self {
            id: derive_identity(&author, &title, pages, year),
            author,
            title,
            pages,
            year,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> i32 {
        self.pages
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns a copy with a different author and a freshly derived identity.
    pub fn with_author(&self, author: impl Into<String>) -> BookResult<Self> {
        Self::new(author, self.title.clone(), self.pages, self.year)
    }

    /// Returns a copy with a different title and a freshly derived identity.
    pub fn with_title(&self, title: impl Into<String>) -> BookResult<Self> {
        Self::new(self.author.clone(), title, self.pages, self.year)
    }

    /// Returns a copy with a different page count and a freshly derived identity.
    pub fn with_pages(&self, pages: i32) -> BookResult<Self> {
        Self::new(self.author.clone(), self.title.clone(), pages, self.year)
    }

    /// Returns a copy with a different year and a freshly derived identity.
    pub fn with_year(&self, year: i32) -> BookResult<Self> {
        Self::new(self.author.clone(), self.title.clone(), self.pages, year)
    }

    /// Returns the derived identity.
    pub fn identity(&self) -> i32 {
        self.id
    }

    /// Compares two books by title only.
    pub fn compare(&self, other: &Book) -> Ordering {
        self.title.cmp(&other.title)
    }

    /// Compares against an untyped value.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Type` when `other` is not a `Book`.
    pub fn compare_any(&self, other: &dyn Any) -> BookResult<Ordering> {
        other
            .downcast_ref::<Book>()
            .map(|book| self.compare(book))
            .ok_or(BookError::Type)
    }

    /// Equality against an untyped value; anything other than a `Book` is unequal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Book>()
            .is_some_and(|book| self == book)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        if self.id != other.id {
            return false;
        }
        self.author == other.author
            && self.title == other.title
            && self.pages == other.pages
            && self.year == other.year
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.id);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book: {}, author: {}, year of publishing: {}, number of pages: {}",
            self.title, self.author, self.year, self.pages
        )
    }
}

fn validate_author(author: String) -> BookResult<String> {
    if author.is_empty() {
        return Err(BookError::validation("author", "must not be empty"));
    }
    Ok(author)
}

fn validate_title(title: String) -> BookResult<String> {
    if title.is_empty() {
        return Err(BookError::validation("title", "must not be empty"));
    }
    Ok(title)
}

fn validate_pages(pages: i32) -> BookResult<i32> {
    if pages <= 0 {
        return Err(BookError::validation(
            "pages",
            format!("must be positive, got {}", pages),
        ));
    }
    Ok(pages)
}

fn validate_year(year: i32) -> BookResult<i32> {
    let now = current_year();
    if year > now {
        return Err(BookError::validation(
            "year",
            format!("{} is after the current year {}", year, now),
        ));
    }
    Ok(year)
}

/// Polynomial string hash over UTF-8 bytes.
fn combine(text: &str) -> i32 {
    text.bytes()
        .fold(0i32, |acc, b| acc.wrapping_mul(31).wrapping_add(i32::from(b)))
}

fn derive_identity(author: &str, title: &str, pages: i32, year: i32) -> i32 {
    pages
        .wrapping_add(combine(author).wrapping_mul(3))
        .wrapping_add(combine(title).wrapping_mul(5))
        .wrapping_add(year.wrapping_mul(7))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn orwell() -> Book {
        Book::new("Orwell", "1984", 328, 1949).unwrap()
    }

    fn hash_of(book: &Book) -> u64 {
        let mut hasher = DefaultHasher::new();
        book.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_rejects_empty_author() {
        let err = Book::new("", "T", 10, 2000).unwrap_err();
        assert_eq!(err.field(), Some("author"));
    }

    #[test]
    fn test_rejects_empty_title() {
        let err = Book::new("A", "", 10, 2000).unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn test_rejects_non_positive_pages() {
        assert_eq!(Book::new("A", "T", 0, 2000).unwrap_err().field(), Some("pages"));
        assert_eq!(Book::new("A", "T", -5, 2000).unwrap_err().field(), Some("pages"));
    }

    #[test]
    fn test_rejects_future_year() {
        let err = Book::new("A", "T", 10, current_year() + 1).unwrap_err();
        assert_eq!(err.field(), Some("year"));
    }

    #[test]
    fn test_accepts_current_year() {
        let book = Book::new("A", "T", 10, current_year()).unwrap();
        assert_eq!(book.year(), current_year());
    }

    #[test]
    fn test_accepts_ancient_year() {
        assert!(Book::new("Homer", "Iliad", 700, -750).is_ok());
    }

    #[test]
    fn test_identity_is_deterministic() {
        assert_eq!(orwell().identity(), orwell().identity());
        assert_eq!(hash_of(&orwell()), hash_of(&orwell()));
    }

    #[test]
    fn test_identity_formula() {
        let book = Book::new("a", "b", 1, 2).unwrap();
        // combine("a") = 97, combine("b") = 98
        assert_eq!(book.identity(), 1 + 97 * 3 + 98 * 5 + 2 * 7);
    }

    #[test]
    fn test_identity_wraps_on_long_text() {
        let long = "x".repeat(10_000);
        let book = Book::new(long.clone(), long, i32::MAX, 2000).unwrap();
        assert_eq!(book.identity(), book.clone().identity());
    }

    #[test]
    fn test_equal_fields_are_equal() {
        assert_eq!(orwell(), orwell());
        assert!(orwell().equals_any(&orwell()));
    }

    #[test]
    fn test_any_single_field_change_breaks_equality() {
        let base = orwell();
        let variants = [
            Book::new("Blair", "1984", 328, 1949).unwrap(),
            Book::new("Orwell", "1985", 328, 1949).unwrap(),
            Book::new("Orwell", "1984", 329, 1949).unwrap(),
            Book::new("Orwell", "1984", 328, 1950).unwrap(),
        ];
        for other in &variants {
            assert_ne!(&base, other);
        }
    }

    #[test]
    fn test_colliding_identity_still_compares_fields() {
        // pages + year*7 is the same for (8, 1) and (1, 2)
        let a = Book::new("A", "T", 8, 1).unwrap();
        let b = Book::new("A", "T", 1, 2).unwrap();
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_implies_same_identity() {
        let books = [
            orwell(),
            Book::new("Huxley", "Brave New World", 311, 1932).unwrap(),
            Book::new("A", "Same Title", 10, 2000).unwrap(),
            Book::new("B", "Same Title", 20, 2001).unwrap(),
        ];
        for a in &books {
            for b in &books {
                if a == b {
                    assert_eq!(a.identity(), b.identity());
                }
            }
        }
    }

    #[test]
    fn test_same_title_ties_but_is_not_equal() {
        let a = Book::new("A", "Same Title", 10, 2000).unwrap();
        let b = Book::new("B", "Same Title", 20, 2001).unwrap();
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_compare_is_lexicographic_on_title() {
        let brave = Book::new("Huxley", "Brave New World", 311, 1932).unwrap();
        assert_eq!(orwell().compare(&brave), Ordering::Less);
        assert_eq!(brave.compare(&orwell()), Ordering::Greater);
    }

    #[test]
    fn test_compare_any_rejects_other_types() {
        assert_eq!(orwell().compare_any(&42i32), Err(BookError::Type));
        assert_eq!(
            orwell().compare_any(&"1984".to_string()),
            Err(BookError::Type)
        );
        assert_eq!(orwell().compare_any(&orwell()), Ok(Ordering::Equal));
    }

    #[test]
    fn test_equals_any_rejects_other_types() {
        assert!(!orwell().equals_any(&"1984"));
    }

    #[test]
    fn test_with_field_rederives_identity() {
        let base = orwell();
        let changed = base.with_pages(400).unwrap();
        assert_eq!(base.pages(), 328);
        assert_eq!(changed.pages(), 400);
        assert_eq!(
            changed.identity(),
            Book::new("Orwell", "1984", 400, 1949).unwrap().identity()
        );
        assert_ne!(base.identity(), changed.identity());
    }

    #[test]
    fn test_with_field_validates() {
        let base = orwell();
        assert!(base.with_author("").is_err());
        assert!(base.with_title("").is_err());
        assert!(base.with_pages(0).is_err());
        assert!(base.with_year(current_year() + 1).is_err());
        assert_eq!(base.with_title("Animal Farm").unwrap().title(), "Animal Farm");
        assert_eq!(base.with_author("Blair").unwrap().author(), "Blair");
        assert_eq!(base.with_year(1950).unwrap().year(), 1950);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            orwell().to_string(),
            "Book: 1984, author: Orwell, year of publishing: 1949, number of pages: 328"
        );
    }
}
