//! Rating aggregation and ranking
//!
//! Applies rating batches with the same all-or-nothing commit discipline as
//! the purchase path, and supplies the deterministic ordering used by top-K
//! queries.

use crate::core::inventory_store::InventoryStore;
use crate::types::{BookRating, BookRecord, BookStoreError};
use std::cmp::Ordering;

/// Lowest accepted rating value
pub const RATING_MIN: i32 = 0;

/// Highest accepted rating value
pub const RATING_MAX: i32 = 5;

/// Whether a rating value lies within the accepted range
pub fn is_valid_rating(rating: i32) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}

/// Apply a rating batch against the store as a single atomic unit
///
/// Every entry is validated first: a rating outside `RATING_MIN..=RATING_MAX`
/// aborts with `InvalidRating`, an unknown ISBN with `NoSuchIsbn`, and no
/// partial rating updates are applied in either case. On success each entry
/// adds its value to the book's rating total and bumps the rating count;
/// both counters only ever increase.
pub(crate) fn apply_ratings(
    store: &mut InventoryStore,
    batch: &[BookRating],
) -> Result<(), BookStoreError> {
    for entry in batch {
        if !is_valid_rating(entry.rating) {
            return Err(BookStoreError::invalid_rating(
                entry.isbn,
                entry.rating,
                RATING_MIN,
                RATING_MAX,
            ));
        }
        store.record(entry.isbn, "rate_books")?;
    }

    for entry in batch {
        let record = store.record_mut(entry.isbn, "rate_books")?;
        record.total_rating += entry.rating as i64;
        record.num_times_rated += 1;
    }

    Ok(())
}

/// Ranking function for top-K queries
///
/// Orders by average rating descending; books with zero ratings rank below
/// every rated book. Ties among equal averages break by total rating
/// descending, then ISBN ascending, making the ordering deterministic and
/// reproducible. Averages are compared by integer cross-multiplication so
/// the ordering never depends on float rounding.
pub(crate) fn rank_cmp(a: &BookRecord, b: &BookRecord) -> Ordering {
    match (a.num_times_rated > 0, b.num_times_rated > 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.isbn.cmp(&b.isbn),
        (true, true) => {
            // a.avg vs b.avg without division: cross-multiply the fractions.
            let lhs = a.total_rating as i128 * b.num_times_rated as i128;
            let rhs = b.total_rating as i128 * a.num_times_rated as i128;
            rhs.cmp(&lhs)
                .then_with(|| b.total_rating.cmp(&a.total_rating))
                .then_with(|| a.isbn.cmp(&b.isbn))
        }
    }
}
