//! JSON serialization and deserialization of books and catalogs.
//!
//! This module provides conversion between catalog data and a plain JSON
//! representation: a book is an object with one key per attribute, and a
//! catalog is an array of such objects in insertion order.
//!
//! Importing a catalog runs every parsed book through
//! [`Catalog::add_book`], so the ISBN-uniqueness invariant and insertion
//! validation hold for loaded data exactly as for programmatic inserts.
//!
//! # Examples
//!
//! ```
//! use bookcat::{Book, Catalog, json};
//!
//! # fn main() -> bookcat::Result<()> {
//! let mut catalog = Catalog::new();
//! catalog.add_book(Book::builder("001", "Dune").publication_year(1965).build())?;
//!
//! let value = json::catalog_to_json(&catalog)?;
//! let restored = json::json_to_catalog(&value)?;
//! assert_eq!(restored.book_count(), 1);
//! # Ok(())
//! # }
//! ```

use crate::book::Book;
use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use serde_json::Value;

/// Convert a book to a JSON object.
///
/// # Errors
///
/// Returns [`CatalogError::SerializationError`] if the book cannot be
/// converted to JSON.
pub fn book_to_json(book: &Book) -> Result<Value> {
    serde_json::to_value(book).map_err(|e| CatalogError::SerializationError(e.to_string()))
}

/// Parse a book from a JSON object.
///
/// # Errors
///
/// Returns [`CatalogError::SerializationError`] if the value is not a
/// well-formed book object.
pub fn json_to_book(value: &Value) -> Result<Book> {
    serde_json::from_value(value.clone())
        .map_err(|e| CatalogError::SerializationError(e.to_string()))
}

/// Convert a catalog to a JSON array of book objects, in insertion order.
///
/// # Errors
///
/// Returns [`CatalogError::SerializationError`] if any book cannot be
/// converted to JSON.
pub fn catalog_to_json(catalog: &Catalog) -> Result<Value> {
    let books = catalog
        .books()
        .map(book_to_json)
        .collect::<Result<Vec<Value>>>()?;
    Ok(Value::Array(books))
}

/// Build a catalog from a JSON array of book objects.
///
/// Books are inserted in array order through [`Catalog::add_book`], so a
/// duplicate ISBN later in the array is silently dropped in favor of the
/// first occurrence.
///
/// # Errors
///
/// Returns [`CatalogError::SerializationError`] if the value is not an array
/// of well-formed book objects, or [`CatalogError::InvalidBook`] if a parsed
/// book has an empty ISBN or title.
pub fn json_to_catalog(value: &Value) -> Result<Catalog> {
    let items = value.as_array().ok_or_else(|| {
        CatalogError::SerializationError("expected a JSON array of books".to_string())
    })?;

    let mut catalog = Catalog::new();
    for item in items {
        catalog.add_book(json_to_book(item)?)?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dune() -> Book {
        Book::builder("001", "Dune")
            .author_name("Frank Herbert")
            .publication_year(1965)
            .publisher("Chilton")
            .price(15.0)
            .available(true)
            .build()
    }

    #[test]
    fn test_book_round_trip() {
        let book = dune();
        let value = book_to_json(&book).expect("serializable");
        assert_eq!(value["isbn"], "001");
        assert_eq!(value["author"]["name"], "Frank Herbert");
        let restored = json_to_book(&value).expect("well-formed");
        assert_eq!(restored, book);
    }

    #[test]
    fn test_catalog_round_trip_preserves_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add_book(dune()).expect("valid book");
        catalog
            .add_book(Book::builder("002", "Dune Messiah").build())
            .expect("valid book");

        let value = catalog_to_json(&catalog).expect("serializable");
        let restored = json_to_catalog(&value).expect("well-formed");
        let isbns: Vec<&str> = restored.books().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["001", "002"]);
    }

    #[test]
    fn test_json_to_catalog_keeps_first_duplicate() {
        let value = json!([
            {
                "isbn": "001", "title": "Dune", "author": {"name": "Herbert"},
                "publication_year": 1965, "publisher": "Chilton",
                "price": 15.0, "available": true
            },
            {
                "isbn": "001", "title": "Dune (pirated)", "author": {"name": "Herbert"},
                "publication_year": 1965, "publisher": "Chilton",
                "price": 0.0, "available": true
            }
        ]);
        let catalog = json_to_catalog(&value).expect("well-formed");
        assert_eq!(catalog.book_count(), 1);
        assert_eq!(catalog.book_by_isbn("001").expect("present").title, "Dune");
    }

    #[test]
    fn test_json_to_catalog_rejects_non_array() {
        let err = json_to_catalog(&json!({"isbn": "001"})).expect_err("not an array");
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }

    #[test]
    fn test_json_to_catalog_rejects_invalid_book() {
        let value = json!([
            {
                "isbn": "", "title": "No ISBN", "author": {"name": ""},
                "publication_year": 0, "publisher": "", "price": 0.0, "available": false
            }
        ]);
        let err = json_to_catalog(&value).expect_err("empty ISBN");
        assert!(matches!(err, CatalogError::InvalidBook(_)));
    }
}
