//! Request batch entry types
//!
//! A batch is a caller-supplied set of (ISBN, value) pairs processed as one
//! atomic unit. ISBN uniqueness within a batch is a precondition enforced by
//! the surfaces, not something the store repairs.

use super::book::Isbn;
use serde::{Deserialize, Serialize};

/// One entry of a purchase or restock batch: a number of copies of one book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookCopy {
    /// The book being bought or restocked
    pub isbn: Isbn,

    /// Number of copies; must be positive
    pub num_copies: i32,
}

impl BookCopy {
    pub fn new(isbn: Isbn, num_copies: i32) -> Self {
        BookCopy { isbn, num_copies }
    }
}

/// One entry of a rating batch: a rating value for one book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookRating {
    /// The book being rated
    pub isbn: Isbn,

    /// Rating value; must lie within the engine's rating range
    pub rating: i32,
}

impl BookRating {
    pub fn new(isbn: Isbn, rating: i32) -> Self {
        BookRating { isbn, rating }
    }
}

/// One entry of an editor-pick batch: sets or clears the flag for one book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorPick {
    /// The book whose flag is updated
    pub isbn: Isbn,

    /// New value of the editor-pick flag
    pub pick: bool,
}

impl EditorPick {
    pub fn new(isbn: Isbn, pick: bool) -> Self {
        EditorPick { isbn, pick }
    }
}
