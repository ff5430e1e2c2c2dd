//! Types module
//!
//! Contains all core data types used throughout the bookstore engine:
//! - `book` - Book identity, the internal record, and snapshot views
//! - `request` - Batch entry pairs (purchase, rating, editor pick)
//! - `error` - Error types and abstract failure kinds

pub mod book;
pub mod error;
pub mod request;

pub(crate) use book::BookRecord;
pub use book::{Book, Isbn, StockBook};
pub use error::{BookStoreError, ErrorKind};
pub use request::{BookCopy, BookRating, EditorPick};
