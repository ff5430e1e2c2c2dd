//! Read-only derived views over the inventory store
//!
//! These queries run under the engine's read lock and return immutable
//! snapshots; they never expose live records. Listing and keyed lookup live
//! on the store itself as `snapshot_all` / `snapshot_by_isbn`; this module
//! holds the derived views.

use crate::core::inventory_store::InventoryStore;
use crate::core::rating::rank_cmp;
use crate::types::{BookRecord, BookStoreError, StockBook};
use rand::seq::IteratorRandom;

/// The k highest-ranked books by average rating
///
/// Fails with `InvalidTopK` for k ≤ 0, checked before the store is consulted
/// and regardless of store contents. Books with zero ratings rank after every
/// rated book. If k exceeds the number of records, all of them are returned;
/// the result is capped at k, never an error for "too few books".
pub(crate) fn top_rated(store: &InventoryStore, k: i32) -> Result<Vec<StockBook>, BookStoreError> {
    if k <= 0 {
        return Err(BookStoreError::invalid_top_k(k));
    }

    let mut records: Vec<&BookRecord> = store.records().collect();
    records.sort_by(|a, b| rank_cmp(a, b));
    records.truncate(k as usize);

    Ok(records.into_iter().map(StockBook::from).collect())
}

/// Up to k editor-pick books, sampled at random
///
/// Fails with `InvalidTopK` for k ≤ 0. When fewer than k books carry the
/// editor-pick flag, all of them are returned.
pub(crate) fn editor_picks(
    store: &InventoryStore,
    k: i32,
) -> Result<Vec<StockBook>, BookStoreError> {
    if k <= 0 {
        return Err(BookStoreError::invalid_top_k(k));
    }

    let mut rng = rand::rng();
    let picks = store
        .records()
        .filter(|record| record.editor_pick)
        .choose_multiple(&mut rng, k as usize);

    Ok(picks.into_iter().map(StockBook::from).collect())
}

/// Every book that has missed at least one sale
///
/// A book is in demand when a purchase attempt against it was rejected for
/// insufficient stock.
pub(crate) fn books_in_demand(store: &InventoryStore) -> Vec<StockBook> {
    store
        .records()
        .filter(|record| record.num_sale_misses > 0)
        .map(StockBook::from)
        .collect()
}
