//! The catalog collection and its query operations.
//!
//! This module provides [`Catalog`], an append-only, insertion-ordered
//! collection of [`Book`] records with lookup, search, aggregation, and
//! grouping operations. Every query is a linear scan over the collection;
//! results that return multiple books preserve insertion order unless the
//! operation sorts explicitly.
//!
//! # Examples
//!
//! Build a catalog and query it:
//!
//! ```
//! use bookcat::{Book, Catalog};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_book(
//!     Book::builder("9780441013593", "Dune")
//!         .author_name("Frank Herbert")
//!         .publication_year(1965)
//!         .publisher("Chilton Books")
//!         .price(15.0)
//!         .available(true)
//!         .build(),
//! )?;
//!
//! assert_eq!(catalog.book_count(), 1);
//! assert!(catalog.contains_isbn("9780441013593"));
//!
//! let dune = catalog.book_by_isbn("9780441013593")?;
//! assert_eq!(dune.publication_year, 1965);
//! # Ok::<(), bookcat::CatalogError>(())
//! ```

use crate::book::Book;
use crate::error::{CatalogError, Result};
use indexmap::IndexMap;

/// An in-memory catalog of book records.
///
/// Books are stored in insertion order and the catalog only grows: there is
/// no update or delete operation. The catalog maintains one invariant — no
/// two books share an ISBN — by treating a duplicate insert as a no-op.
///
/// `Catalog` is plain owned data with no interior mutability. It defines no
/// concurrent-access contract; callers that share a catalog across threads
/// must serialize mutation themselves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a new, empty catalog
    #[must_use]
    pub fn new() -> Self {
        Catalog { books: Vec::new() }
    }

    /// Add a book to the catalog.
    ///
    /// Insert-if-absent semantics: if a book with the same ISBN is already
    /// present, the call succeeds without changing the catalog. Otherwise the
    /// book is appended, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBook`] if the book's ISBN or title is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcat::{Book, Catalog};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_book(Book::builder("001", "Dune").build())?;
    /// // Same ISBN again: silently ignored, not an error
    /// catalog.add_book(Book::builder("001", "Dune (reissue)").build())?;
    /// assert_eq!(catalog.book_count(), 1);
    /// # Ok::<(), bookcat::CatalogError>(())
    /// ```
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        if book.isbn.is_empty() {
            return Err(CatalogError::InvalidBook(
                "ISBN must not be empty".to_string(),
            ));
        }
        if book.title.is_empty() {
            return Err(CatalogError::InvalidBook(
                "title must not be empty".to_string(),
            ));
        }
        if !self.contains_isbn(&book.isbn) {
            self.books.push(book);
        }
        Ok(())
    }

    /// Get the total number of books currently held
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Check whether the catalog holds no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over all books in insertion order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Get the book with the given ISBN.
    ///
    /// By the uniqueness invariant at most one book can match.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IsbnNotFound`] if no book has the given ISBN.
    pub fn book_by_isbn(&self, isbn: &str) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.isbn == isbn)
            .ok_or_else(|| CatalogError::IsbnNotFound(isbn.to_string()))
    }

    /// Get all books whose author's name exactly equals `author_name`.
    ///
    /// Returns books in insertion order; an empty vector when none match.
    #[must_use]
    pub fn books_by_author(&self, author_name: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.author.name == author_name)
            .collect()
    }

    /// Check whether any book has the given ISBN
    #[must_use]
    pub fn contains_isbn(&self, isbn: &str) -> bool {
        self.books.iter().any(|book| book.isbn == isbn)
    }

    /// Check whether the book with the given ISBN is available.
    ///
    /// Returns `false` both when the ISBN is absent and when the book is
    /// present but unavailable; the boolean alone cannot distinguish the two.
    #[must_use]
    pub fn is_book_available(&self, isbn: &str) -> bool {
        self.books
            .iter()
            .any(|book| book.isbn == isbn && book.available)
    }

    /// Sum of the prices of all books; 0.0 for an empty catalog
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.books.iter().map(|book| book.price).sum()
    }

    /// Arithmetic mean of the prices of all books.
    ///
    /// Defined as 0.0 for an empty catalog rather than dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcat::Catalog;
    ///
    /// let catalog = Catalog::new();
    /// assert_eq!(catalog.average_price(), 0.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_price(&self) -> f64 {
        if self.books.is_empty() {
            return 0.0;
        }
        self.total_price() / self.books.len() as f64
    }

    /// Get all books ordered by ascending publication year.
    ///
    /// The sort is stable: books with equal years keep their insertion order.
    /// The underlying collection is not mutated.
    #[must_use]
    pub fn sorted_by_year(&self) -> Vec<&Book> {
        let mut sorted: Vec<&Book> = self.books.iter().collect();
        sorted.sort_by_key(|book| book.publication_year);
        sorted
    }

    /// Get all books whose title contains `text`, case-insensitively.
    ///
    /// An empty `text` returns an empty vector — a deliberate short-circuit
    /// rather than "empty substring matches everything".
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcat::{Book, Catalog};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_book(Book::builder("001", "Dune").build())?;
    ///
    /// assert_eq!(catalog.books_with_title_containing("dUnE").len(), 1);
    /// assert!(catalog.books_with_title_containing("").is_empty());
    /// # Ok::<(), bookcat::CatalogError>(())
    /// ```
    #[must_use]
    pub fn books_with_title_containing(&self, text: &str) -> Vec<&Book> {
        if text.is_empty() {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Find the newest book from the given publisher.
    ///
    /// Among books whose publisher exactly equals `publisher`, returns the
    /// one with the maximum publication year. When several share the maximum
    /// year, the earliest-inserted one wins.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PublisherNotFound`] if no book matches the
    /// publisher.
    pub fn newest_book_by_publisher(&self, publisher: &str) -> Result<&Book> {
        let mut newest: Option<&Book> = None;
        for book in self.books.iter().filter(|b| b.publisher == publisher) {
            match newest {
                Some(n) if book.publication_year <= n.publication_year => {}
                _ => newest = Some(book),
            }
        }
        newest.ok_or_else(|| CatalogError::PublisherNotFound(publisher.to_string()))
    }

    /// Get all books satisfying a caller-supplied predicate, in insertion
    /// order.
    ///
    /// This is the catalog's generic escape hatch for ad hoc queries. The
    /// predicate should be a pure function of the book for the result to be
    /// deterministic given the catalog state.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcat::{Book, Catalog};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_book(Book::builder("001", "Dune").price(15.0).build())?;
    /// catalog.add_book(Book::builder("002", "Dune Messiah").price(12.0).build())?;
    ///
    /// let cheap = catalog.filter_books(|book| book.price < 13.0);
    /// assert_eq!(cheap.len(), 1);
    /// assert_eq!(cheap[0].isbn, "002");
    /// # Ok::<(), bookcat::CatalogError>(())
    /// ```
    pub fn filter_books<P>(&self, predicate: P) -> Vec<&Book>
    where
        P: Fn(&Book) -> bool,
    {
        self.books.iter().filter(|book| predicate(book)).collect()
    }

    /// Group all books by publisher.
    ///
    /// Returns a map from publisher name to the books with that publisher.
    /// Keys appear in first-seen order, books within each group keep
    /// insertion order, and publishers with no books have no entry.
    #[must_use]
    pub fn group_by_publisher(&self) -> IndexMap<&str, Vec<&Book>> {
        let mut groups: IndexMap<&str, Vec<&Book>> = IndexMap::new();
        for book in &self.books {
            groups.entry(book.publisher.as_str()).or_default().push(book);
        }
        groups
    }
}
