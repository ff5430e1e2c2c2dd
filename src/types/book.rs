//! Book-related types for the bookstore engine
//!
//! This module defines the internal mutable book record owned by the
//! inventory store, together with the two immutable snapshot views handed to
//! callers: the full stock view used by store management and the trimmed
//! buyer view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Book identifier
///
/// Signed so that the surfaces can reject non-positive ISBNs as malformed
/// input; only positive values ever reach the store.
pub type Isbn = i64;

/// Internal mutable book record
///
/// Owned exclusively by the inventory store. Callers never receive a
/// reference to a `BookRecord`; all externally visible books are [`StockBook`]
/// or [`Book`] snapshots taken at read time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookRecord {
    /// Unique book identifier (immutable once created)
    pub isbn: Isbn,

    /// Book title (immutable once created)
    pub title: String,

    /// Book author (immutable once created)
    pub author: String,

    /// Sale price, non-negative (immutable once created)
    pub price: Decimal,

    /// Copies currently in stock; never negative
    pub num_copies: i32,

    /// Number of purchase attempts rejected for insufficient stock
    ///
    /// Incremented for every entry of a purchase batch that failed the stock
    /// check, even though the batch as a whole did not commit. Tracks unmet
    /// demand, not inventory state.
    pub num_sale_misses: i32,

    /// Sum of all rating values ever received; non-decreasing
    pub total_rating: i64,

    /// Number of ratings ever received; non-decreasing
    pub num_times_rated: i64,

    /// Whether an editor has picked this book
    pub editor_pick: bool,
}

impl BookRecord {
    /// Average rating, or `None` if the book has never been rated
    pub fn average_rating(&self) -> Option<f64> {
        if self.num_times_rated > 0 {
            Some(self.total_rating as f64 / self.num_times_rated as f64)
        } else {
            None
        }
    }
}

/// Full immutable snapshot of a book record
///
/// This is both the management-facing read view and the input shape for
/// adding books: an add may seed a book with pre-existing counters (for
/// example a catalogue import that carries ratings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBook {
    /// Unique book identifier
    pub isbn: Isbn,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Sale price, non-negative
    pub price: Decimal,

    /// Copies in stock
    pub num_copies: i32,

    /// Purchase attempts rejected for insufficient stock
    pub num_sale_misses: i32,

    /// Sum of all rating values received
    pub total_rating: i64,

    /// Number of ratings received
    pub num_times_rated: i64,

    /// Whether an editor has picked this book
    pub editor_pick: bool,
}

impl StockBook {
    /// Create a fresh stock book with zeroed counters
    ///
    /// Convenience constructor for newly catalogued books: no sale misses,
    /// no ratings, not an editor pick.
    pub fn new(
        isbn: Isbn,
        title: impl Into<String>,
        author: impl Into<String>,
        price: Decimal,
        num_copies: i32,
    ) -> Self {
        StockBook {
            isbn,
            title: title.into(),
            author: author.into(),
            price,
            num_copies,
            num_sale_misses: 0,
            total_rating: 0,
            num_times_rated: 0,
            editor_pick: false,
        }
    }

    /// Average rating, or `None` if the book has never been rated
    pub fn average_rating(&self) -> Option<f64> {
        if self.num_times_rated > 0 {
            Some(self.total_rating as f64 / self.num_times_rated as f64)
        } else {
            None
        }
    }
}

impl From<&BookRecord> for StockBook {
    fn from(record: &BookRecord) -> Self {
        StockBook {
            isbn: record.isbn,
            title: record.title.clone(),
            author: record.author.clone(),
            price: record.price,
            num_copies: record.num_copies,
            num_sale_misses: record.num_sale_misses,
            total_rating: record.total_rating,
            num_times_rated: record.num_times_rated,
            editor_pick: record.editor_pick,
        }
    }
}

impl From<StockBook> for BookRecord {
    fn from(book: StockBook) -> Self {
        BookRecord {
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            price: book.price,
            num_copies: book.num_copies,
            num_sale_misses: book.num_sale_misses,
            total_rating: book.total_rating,
            num_times_rated: book.num_times_rated,
            editor_pick: book.editor_pick,
        }
    }
}

/// Buyer-facing immutable snapshot of a book
///
/// Exposes identity fields only; stock levels and demand counters are a
/// management concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier
    pub isbn: Isbn,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Sale price
    pub price: Decimal,
}

impl From<&BookRecord> for Book {
    fn from(record: &BookRecord) -> Self {
        Book {
            isbn: record.isbn,
            title: record.title.clone(),
            author: record.author.clone(),
            price: record.price,
        }
    }
}

impl From<&StockBook> for Book {
    fn from(book: &StockBook) -> Self {
        Book {
            isbn: book.isbn,
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
        }
    }
}
