//! Writing title reports to an output sink.
//!
//! This module provides [`TitleReporter`] for writing human-readable title
//! listings from a [`Catalog`] to any destination implementing
//! [`std::io::Write`]. The sink is injected by the caller, so reports can go
//! to stdout, a file, or an in-memory buffer alike. The only guaranteed line
//! format is the book title as literal text, one title per line.
//!
//! # Examples
//!
//! Reporting to stdout:
//!
//! ```no_run
//! use bookcat::{Book, Catalog, TitleReporter};
//!
//! # fn main() -> bookcat::Result<()> {
//! let mut catalog = Catalog::new();
//! catalog.add_book(Book::builder("001", "Dune").publication_year(1965).build())?;
//!
//! let mut reporter = TitleReporter::new(std::io::stdout());
//! reporter.write_titles(&catalog)?;
//! # Ok(())
//! # }
//! ```
//!
//! Reporting to a buffer:
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

use crate::catalog::Catalog;
use crate::error::Result;
use std::io::Write;

/// Writer for human-readable title reports.
///
/// `TitleReporter` wraps any destination implementing [`std::io::Write`] and
/// writes one title per line, in the catalog's insertion order.
#[derive(Debug)]
pub struct TitleReporter<W: Write> {
    sink: W,
}

impl<W: Write> TitleReporter<W> {
    /// Create a new reporter writing to the given sink
    pub fn new(sink: W) -> Self {
        TitleReporter { sink }
    }

    /// Write the title of every book in the catalog, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IoError`](crate::CatalogError::IoError) if the
    /// sink fails.
    pub fn write_titles(&mut self, catalog: &Catalog) -> Result<()> {
        for book in catalog.books() {
            writeln!(self.sink, "{}", book.title)?;
        }
        Ok(())
    }

    /// Write the titles of books published strictly after `year`, one per
    /// line, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IoError`](crate::CatalogError::IoError) if the
    /// sink fails.
    pub fn write_titles_published_after(&mut self, catalog: &Catalog, year: i32) -> Result<()> {
        for book in catalog.books().filter(|b| b.publication_year > year) {
            writeln!(self.sink, "{}", book.title)?;
        }
        Ok(())
    }

    /// Consume the reporter and return the underlying sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_book(Book::builder("001", "Dune").publication_year(1965).build())
            .expect("valid book");
        catalog
            .add_book(
                Book::builder("002", "Dune Messiah")
                    .publication_year(1969)
                    .build(),
            )
            .expect("valid book");
        catalog
    }

    #[test]
    fn test_write_titles_one_per_line_in_insertion_order() {
        let catalog = sample_catalog();
        let mut reporter = TitleReporter::new(Vec::new());
        reporter.write_titles(&catalog).expect("buffer write");
        let output = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(output, "Dune\nDune Messiah\n");
    }

    #[test]
    fn test_write_titles_published_after_filters_strictly() {
        let catalog = sample_catalog();
        let mut reporter = TitleReporter::new(Vec::new());
        reporter
            .write_titles_published_after(&catalog, 1965)
            .expect("buffer write");
        let output = String::from_utf8(reporter.into_inner()).expect("utf8");
        assert_eq!(output, "Dune Messiah\n");
    }

    #[test]
    fn test_write_titles_empty_catalog_writes_nothing() {
        let catalog = Catalog::new();
        let mut reporter = TitleReporter::new(Vec::new());
        reporter.write_titles(&catalog).expect("buffer write");
        assert!(reporter.into_inner().is_empty());
    }
}
