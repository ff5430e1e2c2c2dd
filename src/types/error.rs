//! Error types for the bookstore engine
//!
//! Every batch operation validates fully before applying; on any failure the
//! operation is rejected with no partial effect on stock or ratings, except
//! the documented sale-miss increment on [`BookStoreError::InsufficientStock`].
//! No failure is fatal to the engine; the store remains usable after any
//! rejected batch.
//!
//! Transport adapters map errors to wire-level statuses through
//! [`BookStoreError::kind`], which collapses the variants into four abstract
//! failure kinds while the variants themselves keep full diagnostic context.

use crate::types::book::Isbn;
use thiserror::Error;

/// Abstract failure kind, for mapping to transport-level statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed request shape: empty batch, duplicate ISBN within a batch,
    /// non-positive ISBN/quantity, out-of-range rating, non-positive k
    InvalidArgument,

    /// An operation references an ISBN absent from the store
    NoSuchIsbn,

    /// An add operation references an ISBN already present
    DuplicateIsbn,

    /// A purchase batch requests more copies of some book than are in stock
    InsufficientStock,
}

/// Main error type for the bookstore engine
///
/// Each variant carries the context needed to diagnose the rejection. All
/// errors are reported synchronously to the caller; none are swallowed or
/// retried by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookStoreError {
    /// A batch operation was invoked with no entries
    #[error("{operation} called with an empty batch")]
    EmptyBatch {
        /// Operation that was invoked
        operation: String,
    },

    /// The same ISBN appeared more than once within a single batch
    #[error("duplicate ISBN {isbn} within one {operation} batch")]
    DuplicateIsbnInBatch {
        /// The repeated ISBN
        isbn: Isbn,
        /// Operation that was invoked
        operation: String,
    },

    /// A non-positive ISBN was supplied
    #[error("invalid ISBN {isbn}: must be positive")]
    InvalidIsbn {
        /// The offending ISBN
        isbn: Isbn,
    },

    /// A non-positive copy count was supplied
    #[error("invalid number of copies {num_copies} for ISBN {isbn}: must be positive")]
    InvalidQuantity {
        /// The book the quantity was supplied for
        isbn: Isbn,
        /// The offending quantity
        num_copies: i32,
    },

    /// A rating value outside the allowed range was supplied
    #[error("invalid rating {rating} for ISBN {isbn}: must be within {min}..={max}")]
    InvalidRating {
        /// The book the rating was supplied for
        isbn: Isbn,
        /// The offending rating value
        rating: i32,
        /// Lower bound of the allowed range
        min: i32,
        /// Upper bound of the allowed range
        max: i32,
    },

    /// A book definition failed validation on add
    #[error("invalid book definition for ISBN {isbn}: {reason}")]
    InvalidBook {
        /// The offending book's ISBN
        isbn: Isbn,
        /// What was wrong with the definition
        reason: String,
    },

    /// A non-positive k was supplied to a top-K style query
    #[error("invalid number of books {k} requested: must be positive")]
    InvalidTopK {
        /// The offending count
        k: i32,
    },

    /// An operation referenced an ISBN absent from the store
    #[error("ISBN {isbn} not found for {operation}")]
    NoSuchIsbn {
        /// The missing ISBN
        isbn: Isbn,
        /// Operation that failed
        operation: String,
    },

    /// An add operation referenced an ISBN already present
    #[error("ISBN {isbn} already exists in the store")]
    DuplicateIsbn {
        /// The already-present ISBN
        isbn: Isbn,
    },

    /// A purchase requested more copies than are in stock
    #[error("insufficient stock for ISBN {isbn}: requested {requested}, in stock {in_stock}")]
    InsufficientStock {
        /// The book that was short
        isbn: Isbn,
        /// Copies requested by the batch entry
        requested: i32,
        /// Copies actually in stock
        in_stock: i32,
    },
}

impl BookStoreError {
    /// The abstract failure kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookStoreError::EmptyBatch { .. }
            | BookStoreError::DuplicateIsbnInBatch { .. }
            | BookStoreError::InvalidIsbn { .. }
            | BookStoreError::InvalidQuantity { .. }
            | BookStoreError::InvalidRating { .. }
            | BookStoreError::InvalidBook { .. }
            | BookStoreError::InvalidTopK { .. } => ErrorKind::InvalidArgument,
            BookStoreError::NoSuchIsbn { .. } => ErrorKind::NoSuchIsbn,
            BookStoreError::DuplicateIsbn { .. } => ErrorKind::DuplicateIsbn,
            BookStoreError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
        }
    }

    /// Create an EmptyBatch error
    pub fn empty_batch(operation: &str) -> Self {
        BookStoreError::EmptyBatch {
            operation: operation.to_string(),
        }
    }

    /// Create a DuplicateIsbnInBatch error
    pub fn duplicate_isbn_in_batch(isbn: Isbn, operation: &str) -> Self {
        BookStoreError::DuplicateIsbnInBatch {
            isbn,
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidIsbn error
    pub fn invalid_isbn(isbn: Isbn) -> Self {
        BookStoreError::InvalidIsbn { isbn }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(isbn: Isbn, num_copies: i32) -> Self {
        BookStoreError::InvalidQuantity { isbn, num_copies }
    }

    /// Create an InvalidRating error
    pub fn invalid_rating(isbn: Isbn, rating: i32, min: i32, max: i32) -> Self {
        BookStoreError::InvalidRating {
            isbn,
            rating,
            min,
            max,
        }
    }

    /// Create an InvalidBook error
    pub fn invalid_book(isbn: Isbn, reason: &str) -> Self {
        BookStoreError::InvalidBook {
            isbn,
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidTopK error
    pub fn invalid_top_k(k: i32) -> Self {
        BookStoreError::InvalidTopK { k }
    }

    /// Create a NoSuchIsbn error
    pub fn no_such_isbn(isbn: Isbn, operation: &str) -> Self {
        BookStoreError::NoSuchIsbn {
            isbn,
            operation: operation.to_string(),
        }
    }

    /// Create a DuplicateIsbn error
    pub fn duplicate_isbn(isbn: Isbn) -> Self {
        BookStoreError::DuplicateIsbn { isbn }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(isbn: Isbn, requested: i32, in_stock: i32) -> Self {
        BookStoreError::InsufficientStock {
            isbn,
            requested,
            in_stock,
        }
    }
}
