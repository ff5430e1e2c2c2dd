//! Capability surfaces
//!
//! Two façades over one shared [`BookStoreEngine`](crate::core::engine::BookStoreEngine):
//!
//! - [`BookStore`] / [`BuyerSurface`] - the buyer capability: purchase,
//!   rate, and browse books through the trimmed [`Book`] view
//! - [`StockManager`] / [`ManagementSurface`] - the management capability:
//!   stock the inventory, inspect full [`StockBook`] records with their
//!   counters, curate editor picks, and remove books
//!
//! Which capability a caller holds is decided purely by which surface it is
//! handed; neither surface exposes the other's operations. Both run every
//! request through the shape checks in [`validate`] before the engine sees
//! it, so malformed batches are rejected without touching the store.

use crate::types::{Book, BookCopy, BookRating, BookStoreError, EditorPick, Isbn, StockBook};

pub(crate) mod validate;

mod buyer;
mod management;

pub use buyer::BuyerSurface;
pub use management::ManagementSurface;

/// The buyer-facing capability
///
/// Buyers see books through the [`Book`] view, which omits stock counts and
/// the internal counters. Every batch operation is atomic: it either commits
/// for all entries or rejects wholesale with the first error found.
pub trait BookStore {
    /// Buy the given number of copies of each listed book
    fn buy_books(&self, batch: &[BookCopy]) -> Result<(), BookStoreError>;

    /// Look up exactly the requested books
    fn get_books(&self, isbns: &[Isbn]) -> Result<Vec<Book>, BookStoreError>;

    /// Submit one rating per listed book
    fn rate_books(&self, batch: &[BookRating]) -> Result<(), BookStoreError>;

    /// The k highest-ranked books by average rating, best first
    fn get_top_rated_books(&self, k: i32) -> Result<Vec<Book>, BookStoreError>;

    /// Up to k editor-pick books, sampled at random
    fn get_editor_picks(&self, k: i32) -> Result<Vec<Book>, BookStoreError>;
}

/// The management-facing capability
pub trait StockManager {
    /// Stock new books, rejected wholesale on any duplicate ISBN
    fn add_books(&self, books: Vec<StockBook>) -> Result<(), BookStoreError>;

    /// Add copies to already-stocked books
    fn add_copies(&self, batch: &[BookCopy]) -> Result<(), BookStoreError>;

    /// Snapshot of every stocked book, order unspecified
    fn get_books(&self) -> Vec<StockBook>;

    /// Full records for exactly the requested books
    fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockBook>, BookStoreError>;

    /// Every book that has missed at least one sale for lack of stock
    fn get_books_in_demand(&self) -> Vec<StockBook>;

    /// Set or clear the editor-pick flag per listed book
    fn update_editor_picks(&self, batch: &[EditorPick]) -> Result<(), BookStoreError>;

    /// Delete the listed books, rejected wholesale on any unknown ISBN
    fn remove_books(&self, isbns: &[Isbn]) -> Result<(), BookStoreError>;

    /// Clear the whole inventory
    fn remove_all_books(&self);
}
