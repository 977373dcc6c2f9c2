//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all catalog operations.
///
/// Represents the error conditions that can occur while inserting books,
/// looking them up, or moving catalog data across the JSON and reporting
/// boundaries.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error indicating a book that fails insertion validation
    /// (empty ISBN or empty title).
    #[error("Invalid book: {0}")]
    InvalidBook(String),

    /// Error indicating that no book with the given ISBN exists.
    #[error("Book with ISBN {0} not found")]
    IsbnNotFound(String),

    /// Error indicating that no book from the given publisher exists.
    #[error("No books published by {0} found")]
    PublisherNotFound(String),

    /// Error during JSON conversion of books or catalogs.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// IO error from the underlying reporting sink.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
