#![warn(missing_docs)]

//! # bookcat
//!
//! An in-memory catalog of book records supporting insertion, lookup,
//! filtering, aggregation, and grouping. The catalog is append-only and
//! preserves insertion order; every query is a linear scan.
//!
//! ## Quick Start
//!
//! ### Building and querying a catalog
//!
//! ```
//! use bookcat::{Book, Catalog};
//!
//! # fn main() -> bookcat::Result<()> {
//! let mut catalog = Catalog::new();
//!
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
//! assert!(catalog.is_book_available("9780441013593"));
//!
//! for book in catalog.books_by_author("Frank Herbert") {
//!     println!("{} ({})", book.title, book.publication_year);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Ad hoc queries with a predicate
//!
//! ```
//! use bookcat::{Book, Catalog};
//!
//! # fn main() -> bookcat::Result<()> {
//! let mut catalog = Catalog::new();
//! catalog.add_book(Book::builder("001", "Dune").price(15.0).build())?;
//! catalog.add_book(Book::builder("002", "Dune Messiah").price(12.0).build())?;
//!
//! let affordable = catalog.filter_books(|book| book.price < 13.0);
//! assert_eq!(affordable.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ### Writing title reports
//!
//! ```
//! use bookcat::{Book, Catalog, TitleReporter};
//!
//! # fn main() -> bookcat::Result<()> {
//! let mut catalog = Catalog::new();
//! catalog.add_book(Book::builder("001", "Dune").build())?;
//!
//! let mut reporter = TitleReporter::new(Vec::new());
//! reporter.write_titles(&catalog)?;
//! assert_eq!(reporter.into_inner(), b"Dune\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`book`] — Core record types (`Book`, `Author`, `BookBuilder`)
//! - [`catalog`] — The owning collection and its query operations
//! - [`report`] — Title reports written to an injectable output sink
//! - [`json`] — JSON serialization/deserialization of books and catalogs
//! - [`isbn`] — ISBN-10/ISBN-13 validation and normalization helpers
//! - [`error`] — Error types and result type

pub mod book;
pub mod catalog;
pub mod error;
pub mod isbn;
pub mod json;
pub mod report;

pub use book::{Author, Book, BookBuilder};
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use report::TitleReporter;
