//! Request shape validation
//!
//! First stage of the validation pipeline: every public operation passes
//! through these checks before the engine (and therefore the store) is
//! touched, so malformed requests are rejected with no store access at all.
//! Shape means: non-empty batch, no duplicate ISBN within one batch, and
//! correctly signed numeric fields — ISBNs and quantities positive, ratings
//! within the accepted range, book definitions well formed.

use crate::core::rating::{is_valid_rating, RATING_MAX, RATING_MIN};
use crate::types::{BookCopy, BookRating, BookStoreError, EditorPick, Isbn, StockBook};
use std::collections::HashSet;

fn ensure_unique_isbns<I>(isbns: I, operation: &str) -> Result<(), BookStoreError>
where
    I: IntoIterator<Item = Isbn>,
{
    let mut seen = HashSet::new();
    for isbn in isbns {
        if !seen.insert(isbn) {
            return Err(BookStoreError::duplicate_isbn_in_batch(isbn, operation));
        }
    }
    Ok(())
}

fn ensure_valid_isbn(isbn: Isbn) -> Result<(), BookStoreError> {
    if isbn < 1 {
        return Err(BookStoreError::invalid_isbn(isbn));
    }
    Ok(())
}

/// Validate a purchase or restock batch: non-empty, positive ISBNs and
/// quantities, no duplicate ISBN
pub(crate) fn validate_copy_batch(
    batch: &[BookCopy],
    operation: &str,
) -> Result<(), BookStoreError> {
    if batch.is_empty() {
        return Err(BookStoreError::empty_batch(operation));
    }
    for entry in batch {
        ensure_valid_isbn(entry.isbn)?;
        if entry.num_copies < 1 {
            return Err(BookStoreError::invalid_quantity(entry.isbn, entry.num_copies));
        }
    }
    ensure_unique_isbns(batch.iter().map(|e| e.isbn), operation)
}

/// Validate a rating batch: non-empty, positive ISBNs, ratings within
/// range, no duplicate ISBN
pub(crate) fn validate_rating_batch(batch: &[BookRating]) -> Result<(), BookStoreError> {
    if batch.is_empty() {
        return Err(BookStoreError::empty_batch("rate_books"));
    }
    for entry in batch {
        ensure_valid_isbn(entry.isbn)?;
        if !is_valid_rating(entry.rating) {
            return Err(BookStoreError::invalid_rating(
                entry.isbn,
                entry.rating,
                RATING_MIN,
                RATING_MAX,
            ));
        }
    }
    ensure_unique_isbns(batch.iter().map(|e| e.isbn), "rate_books")
}

/// Validate an ISBN set: non-empty, positive ISBNs, no duplicates
pub(crate) fn validate_isbn_set(isbns: &[Isbn], operation: &str) -> Result<(), BookStoreError> {
    if isbns.is_empty() {
        return Err(BookStoreError::empty_batch(operation));
    }
    for &isbn in isbns {
        ensure_valid_isbn(isbn)?;
    }
    ensure_unique_isbns(isbns.iter().copied(), operation)
}

/// Validate an editor-pick batch: non-empty, positive ISBNs, no duplicates
pub(crate) fn validate_editor_pick_batch(batch: &[EditorPick]) -> Result<(), BookStoreError> {
    if batch.is_empty() {
        return Err(BookStoreError::empty_batch("update_editor_picks"));
    }
    for entry in batch {
        ensure_valid_isbn(entry.isbn)?;
    }
    ensure_unique_isbns(batch.iter().map(|e| e.isbn), "update_editor_picks")
}

/// Validate books being added: non-empty batch, well-formed definitions,
/// no duplicate ISBN within the batch
pub(crate) fn validate_stock_books(books: &[StockBook]) -> Result<(), BookStoreError> {
    if books.is_empty() {
        return Err(BookStoreError::empty_batch("add_books"));
    }
    for book in books {
        ensure_valid_isbn(book.isbn)?;
        if book.title.trim().is_empty() {
            return Err(BookStoreError::invalid_book(book.isbn, "empty title"));
        }
        if book.author.trim().is_empty() {
            return Err(BookStoreError::invalid_book(book.isbn, "empty author"));
        }
        if book.price.is_sign_negative() && !book.price.is_zero() {
            return Err(BookStoreError::invalid_book(book.isbn, "negative price"));
        }
        if book.num_copies < 0 {
            return Err(BookStoreError::invalid_book(
                book.isbn,
                "negative number of copies",
            ));
        }
        if book.num_sale_misses < 0 || book.total_rating < 0 || book.num_times_rated < 0 {
            return Err(BookStoreError::invalid_book(book.isbn, "negative counter"));
        }
    }
    ensure_unique_isbns(books.iter().map(|b| b.isbn), "add_books")
}
