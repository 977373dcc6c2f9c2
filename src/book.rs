//! Book and author value types.
//!
//! This module provides the record types held by a [`Catalog`](crate::Catalog):
//! - [`Book`] — A single catalog entry, keyed by ISBN
//! - [`Author`] — The author referenced by a book
//! - [`BookBuilder`] — Fluent construction of books
//!
//! # Examples
//!
//! Create a book with the builder API:
//!
//! ```
//! use bookcat::Book;
//!
//! let book = Book::builder("9780441013593", "Dune")
//!     .author_name("Frank Herbert")
//!     .publication_year(1965)
//!     .publisher("Chilton Books")
//!     .price(15.0)
//!     .available(true)
//!     .build();
//!
//! assert_eq!(book.title, "Dune");
//! assert_eq!(book.author.name, "Frank Herbert");
//! ```

use serde::{Deserialize, Serialize};

/// The author of a book.
///
/// Authors are plain values referenced by [`Book`]; the catalog keeps no
/// independent author registry. Two authors are equal when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name, matched exactly by author queries
    pub name: String,
}

impl Author {
    /// Create a new author from a name
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcat::Author;
    ///
    /// let author = Author::new("Ursula K. Le Guin");
    /// assert_eq!(author.name, "Ursula K. Le Guin");
    /// ```
    #[must_use]
    pub fn new(name: &str) -> Self {
        Author {
            name: name.to_string(),
        }
    }
}

/// A single book record in a catalog.
///
/// The ISBN acts as the catalog's primary key: a
/// [`Catalog`](crate::Catalog) never holds two books with the same ISBN.
/// `price` is non-negative by convention but not enforced, and
/// `publication_year` is signed so BCE works can be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, non-empty
    pub isbn: String,
    /// Book title, non-empty
    pub title: String,
    /// The book's author
    pub author: Author,
    /// Year of publication
    pub publication_year: i32,
    /// Publisher name
    pub publisher: String,
    /// Price, non-negative by convention
    pub price: f64,
    /// Whether the book is currently available
    pub available: bool,
}

impl Book {
    /// Create a builder for fluently constructing books
    ///
    /// ISBN and title are required up front since the catalog rejects books
    /// without them; the remaining attributes default to an unnamed author,
    /// year 0, an empty publisher, price 0.0, and unavailable.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcat::Book;
    ///
    /// let book = Book::builder("9780451524935", "Nineteen Eighty-Four")
    ///     .author_name("George Orwell")
    ///     .publication_year(1949)
    ///     .publisher("Secker & Warburg")
    ///     .price(9.99)
    ///     .available(true)
    ///     .build();
    ///
    /// assert_eq!(book.isbn, "9780451524935");
    /// assert_eq!(book.publication_year, 1949);
    /// ```
    #[must_use]
    pub fn builder(isbn: &str, title: &str) -> BookBuilder {
        BookBuilder {
            book: Book {
                isbn: isbn.to_string(),
                title: title.to_string(),
                author: Author::new(""),
                publication_year: 0,
                publisher: String::new(),
                price: 0.0,
                available: false,
            },
        }
    }
}

/// Builder for constructing [`Book`] values fluently.
///
/// Created via [`Book::builder`].
#[derive(Debug)]
pub struct BookBuilder {
    book: Book,
}

impl BookBuilder {
    /// Set the author of the book being built
    #[must_use]
    pub fn author(mut self, author: Author) -> Self {
        self.book.author = author;
        self
    }

    /// Set the author by name
    ///
    /// Convenience method that constructs the [`Author`] automatically.
    #[must_use]
    pub fn author_name(mut self, name: &str) -> Self {
        self.book.author = Author::new(name);
        self
    }

    /// Set the publication year of the book being built
    #[must_use]
    pub fn publication_year(mut self, year: i32) -> Self {
        self.book.publication_year = year;
        self
    }

    /// Set the publisher of the book being built
    #[must_use]
    pub fn publisher(mut self, publisher: &str) -> Self {
        self.book.publisher = publisher.to_string();
        self
    }

    /// Set the price of the book being built
    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.book.price = price;
        self
    }

    /// Set the availability flag of the book being built
    #[must_use]
    pub fn available(mut self, available: bool) -> Self {
        self.book.available = available;
        self
    }

    /// Build the book
    #[must_use]
    pub fn build(self) -> Book {
        self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let book = Book::builder("001", "Dune").build();
        assert_eq!(book.isbn, "001");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author.name, "");
        assert_eq!(book.publication_year, 0);
        assert_eq!(book.publisher, "");
        assert!((book.price - 0.0).abs() < f64::EPSILON);
        assert!(!book.available);
    }

    #[test]
    fn test_builder_sets_all_attributes() {
        let book = Book::builder("002", "Dune Messiah")
            .author(Author::new("Frank Herbert"))
            .publication_year(1969)
            .publisher("Putnam")
            .price(12.0)
            .available(true)
            .build();
        assert_eq!(book.author.name, "Frank Herbert");
        assert_eq!(book.publication_year, 1969);
        assert_eq!(book.publisher, "Putnam");
        assert!((book.price - 12.0).abs() < f64::EPSILON);
        assert!(book.available);
    }

    #[test]
    fn test_author_equality() {
        assert_eq!(Author::new("Herbert"), Author::new("Herbert"));
        assert_ne!(Author::new("Herbert"), Author::new("Asimov"));
    }

    #[test]
    fn test_book_equality_covers_every_attribute() {
        let a = Book::builder("001", "Dune").price(15.0).build();
        let b = a.clone();
        assert_eq!(a, b);

        let c = Book::builder("001", "Dune").price(16.0).build();
        assert_ne!(a, c);
    }
}
