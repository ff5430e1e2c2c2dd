//! Shared bookstore engine
//!
//! `BookStoreEngine` is the one shared instance behind both capability
//! surfaces. It wraps the inventory store in a single store-wide
//! reader-writer lock: every mutating batch holds the write lock for its
//! whole validate-then-apply span, so no interleaving of two batches can
//! produce a result inconsistent with some serial order. Reads hold the read
//! lock, may run concurrently with each other, and return cloned snapshots —
//! they see pre-batch or post-batch state for every record, never a mix.
//!
//! All operations are bounded, synchronous, in-memory computation; the lock
//! is never held across I/O.
//!
//! Batch preconditions (non-empty, unique ISBNs, positive quantities,
//! ratings in range) are enforced by the surfaces in
//! [`crate::surface`] before these methods run.

use crate::core::inventory_store::InventoryStore;
use crate::core::{executor, query, rating};
use crate::types::{BookCopy, BookRating, BookStoreError, EditorPick, Isbn, StockBook};
use parking_lot::RwLock;
use tracing::{debug, warn};

/// The shared inventory engine
///
/// Cheap to share via `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct BookStoreEngine {
    /// The authoritative store, behind one store-wide lock
    state: RwLock<InventoryStore>,
}

impl BookStoreEngine {
    /// Create a new engine with an empty inventory
    pub fn new() -> Self {
        BookStoreEngine {
            state: RwLock::new(InventoryStore::new()),
        }
    }

    /// Insert new book records, rejected wholesale on any duplicate ISBN
    pub fn add_books(&self, books: Vec<StockBook>) -> Result<(), BookStoreError> {
        let count = books.len();
        let result = self.state.write().add_books(books);
        self.trace("add_books", count, &result);
        result
    }

    /// Add copies to existing books, rejected wholesale on any unknown ISBN
    pub fn add_copies(&self, batch: &[BookCopy]) -> Result<(), BookStoreError> {
        let result = self.state.write().add_copies(batch);
        self.trace("add_copies", batch.len(), &result);
        result
    }

    /// Delete the given books, rejected wholesale on any unknown ISBN
    pub fn remove_books(&self, isbns: &[Isbn]) -> Result<(), BookStoreError> {
        let result = self.state.write().remove_books(isbns);
        self.trace("remove_books", isbns.len(), &result);
        result
    }

    /// Clear the whole inventory unconditionally
    pub fn remove_all_books(&self) {
        self.state.write().remove_all_books();
        debug!(operation = "remove_all_books", "batch committed");
    }

    /// Set or clear editor-pick flags, rejected wholesale on any unknown ISBN
    pub fn update_editor_picks(&self, batch: &[EditorPick]) -> Result<(), BookStoreError> {
        let result = self.state.write().update_editor_picks(batch);
        self.trace("update_editor_picks", batch.len(), &result);
        result
    }

    /// Apply a purchase batch atomically
    ///
    /// Takes the write lock unconditionally: even a rejected purchase may
    /// mutate sale-miss counters.
    pub fn buy_books(&self, batch: &[BookCopy]) -> Result<(), BookStoreError> {
        let result = executor::execute_purchase(&mut self.state.write(), batch);
        self.trace("buy_books", batch.len(), &result);
        result
    }

    /// Apply a rating batch atomically
    pub fn rate_books(&self, batch: &[BookRating]) -> Result<(), BookStoreError> {
        let result = rating::apply_ratings(&mut self.state.write(), batch);
        self.trace("rate_books", batch.len(), &result);
        result
    }

    /// Snapshot every book, order unspecified
    pub fn get_books(&self) -> Vec<StockBook> {
        self.state.read().snapshot_all()
    }

    /// Snapshot exactly the requested books, rejected wholesale on any
    /// unknown ISBN
    pub fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockBook>, BookStoreError> {
        self.state.read().snapshot_by_isbn(isbns)
    }

    /// The k highest-ranked books by average rating
    pub fn top_rated_books(&self, k: i32) -> Result<Vec<StockBook>, BookStoreError> {
        if k <= 0 {
            // Rejected before the store is consulted, empty store included.
            return Err(BookStoreError::invalid_top_k(k));
        }
        query::top_rated(&self.state.read(), k)
    }

    /// Up to k randomly sampled editor picks
    pub fn editor_picks(&self, k: i32) -> Result<Vec<StockBook>, BookStoreError> {
        if k <= 0 {
            return Err(BookStoreError::invalid_top_k(k));
        }
        query::editor_picks(&self.state.read(), k)
    }

    /// Every book that has missed at least one sale
    pub fn books_in_demand(&self) -> Vec<StockBook> {
        query::books_in_demand(&self.state.read())
    }

    fn trace(&self, operation: &str, entries: usize, result: &Result<(), BookStoreError>) {
        match result {
            Ok(()) => debug!(operation, entries, "batch committed"),
            Err(err) => warn!(operation, entries, %err, "batch rejected"),
        }
    }
}
