//! Title-ordered book collection
//!
//! A shelf holds at most one book per title. Inserting a book whose title is
//! already present leaves the existing book in place, even when the two books
//! are not equal.

use std::collections::btree_map::{self, BTreeMap, Entry};

use super::record::Book;

/// Books keyed and ordered by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookShelf {
    books: BTreeMap<String, Book>,
}

impl BookShelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a book unless its title is already on the shelf.
    ///
    /// Returns `false` when the book was discarded.
    pub fn insert(&mut self, book: Book) -> bool {
        match self.books.entry(book.title().to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(book);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.get(title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.books.contains_key(title)
    }

    /// Iterates in ascending title order.
    pub fn iter(&self) -> btree_map::Values<'_, String, Book> {
        self.books.values()
    }

    pub fn into_vec(self) -> Vec<Book> {
        self.books.into_values().collect()
    }
}

impl IntoIterator for BookShelf {
    type Item = Book;
    type IntoIter = btree_map::IntoValues<String, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.into_values()
    }
}

impl<'a> IntoIterator for &'a BookShelf {
    type Item = &'a Book;
    type IntoIter = btree_map::Values<'a, String, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Book> for BookShelf {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut shelf = Self::new();
        for book in iter {
            shelf.insert(book);
        }
        shelf
    }
}

impl Extend<Book> for BookShelf {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        for book in iter {
            self.insert(book);
        }
    }
}
