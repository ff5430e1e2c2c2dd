//! Purchase batch execution
//!
//! Implements the two-phase validate-then-apply purchase path. A purchase
//! batch spans multiple records and must commit indivisibly: no caller ever
//! observes a state where some but not all items of one batch were sold.
//! The engine holds the store-wide write lock for the whole call, so the
//! two phases run without interleaving from other batches.

use crate::core::inventory_store::InventoryStore;
use crate::types::{BookCopy, BookStoreError};

/// Apply a purchase batch against the store as a single atomic unit
///
/// Entries are (ISBN, quantity) pairs with quantity > 0 and unique ISBNs;
/// both are surface-validated preconditions.
///
/// Phase 1 resolves every ISBN; an unknown ISBN aborts the whole batch with
/// `NoSuchIsbn` and no stock changes. Phase 2 checks every entry against
/// current stock; if any entry is short, every short entry's sale-miss
/// counter is incremented and the batch aborts with `InsufficientStock` —
/// the counter increment is a deliberate, isolated demand signal, not an
/// inventory mutation. Only if all entries pass does the commit decrement
/// each record's stock.
pub(crate) fn execute_purchase(
    store: &mut InventoryStore,
    batch: &[BookCopy],
) -> Result<(), BookStoreError> {
    // Phase 1: resolve every ISBN before touching anything.
    for entry in batch {
        store.record(entry.isbn, "buy_books")?;
    }

    // Phase 2: stock check across the whole batch.
    let mut short_entries: Vec<(BookCopy, i32)> = Vec::new();
    for entry in batch {
        let record = store.record(entry.isbn, "buy_books")?;
        if entry.num_copies > record.num_copies {
            short_entries.push((*entry, record.num_copies));
        }
    }

    if let Some(&(first_short, in_stock)) = short_entries.first() {
        // Record a sale miss for every short entry, then abort the batch.
        for &(entry, _) in &short_entries {
            store.record_mut(entry.isbn, "buy_books")?.num_sale_misses += 1;
        }
        return Err(BookStoreError::insufficient_stock(
            first_short.isbn,
            first_short.num_copies,
            in_stock,
        ));
    }

    // Commit: every entry passed, decrement all stocks.
    for entry in batch {
        store.record_mut(entry.isbn, "buy_books")?.num_copies -= entry.num_copies;
    }

    Ok(())
}
