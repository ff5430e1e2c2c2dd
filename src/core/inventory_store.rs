//! Authoritative inventory state
//!
//! This module provides the `InventoryStore`, the single owner of all book
//! records. Every mutation validates its whole batch against current state
//! before applying anything, so a rejected batch leaves the mapping
//! untouched.
//!
//! The store itself is not synchronized; [`crate::core::engine::BookStoreEngine`]
//! wraps it in a store-wide lock so that batches serialize against each
//! other.

use crate::types::{BookCopy, BookRecord, BookStoreError, EditorPick, Isbn, StockBook};
use std::collections::HashMap;

/// The authoritative mapping from ISBN to book record
///
/// Created empty at engine start. Records are created by `add_books`, removed
/// individually by `remove_books` or entirely by `remove_all_books`; no
/// record exists outside this mapping.
#[derive(Debug, Default)]
pub(crate) struct InventoryStore {
    /// Map of ISBN to book record
    books: HashMap<Isbn, BookRecord>,
}

impl InventoryStore {
    /// Create a new empty inventory store
    pub fn new() -> Self {
        InventoryStore {
            books: HashMap::new(),
        }
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether a record exists for the given ISBN
    pub fn contains(&self, isbn: Isbn) -> bool {
        self.books.contains_key(&isbn)
    }

    /// Resolve an ISBN to its record
    pub fn record(&self, isbn: Isbn, operation: &str) -> Result<&BookRecord, BookStoreError> {
        self.books
            .get(&isbn)
            .ok_or_else(|| BookStoreError::no_such_isbn(isbn, operation))
    }

    /// Resolve an ISBN to its record, mutably
    pub fn record_mut(
        &mut self,
        isbn: Isbn,
        operation: &str,
    ) -> Result<&mut BookRecord, BookStoreError> {
        self.books
            .get_mut(&isbn)
            .ok_or_else(|| BookStoreError::no_such_isbn(isbn, operation))
    }

    /// Iterate over all records
    pub fn records(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.values()
    }

    /// Insert new book records
    ///
    /// Rejected wholesale with `DuplicateIsbn` if any incoming ISBN already
    /// exists; nothing is partially applied.
    pub fn add_books(&mut self, books: Vec<StockBook>) -> Result<(), BookStoreError> {
        for book in &books {
            if self.books.contains_key(&book.isbn) {
                return Err(BookStoreError::duplicate_isbn(book.isbn));
            }
        }

        for book in books {
            self.books.insert(book.isbn, BookRecord::from(book));
        }

        Ok(())
    }

    /// Delete the records matching the given ISBNs
    ///
    /// Rejected wholesale with `NoSuchIsbn` if any requested ISBN is absent.
    pub fn remove_books(&mut self, isbns: &[Isbn]) -> Result<(), BookStoreError> {
        for &isbn in isbns {
            if !self.books.contains_key(&isbn) {
                return Err(BookStoreError::no_such_isbn(isbn, "remove_books"));
            }
        }

        for isbn in isbns {
            self.books.remove(isbn);
        }

        Ok(())
    }

    /// Clear the store unconditionally
    pub fn remove_all_books(&mut self) {
        self.books.clear();
    }

    /// Add copies to existing books
    ///
    /// Rejected wholesale with `NoSuchIsbn` if any ISBN is absent; no stock
    /// is changed for any entry.
    pub fn add_copies(&mut self, batch: &[BookCopy]) -> Result<(), BookStoreError> {
        for entry in batch {
            self.record(entry.isbn, "add_copies")?;
        }

        for entry in batch {
            self.record_mut(entry.isbn, "add_copies")?.num_copies += entry.num_copies;
        }

        Ok(())
    }

    /// Set or clear the editor-pick flag on existing books
    ///
    /// Rejected wholesale with `NoSuchIsbn` if any ISBN is absent.
    pub fn update_editor_picks(&mut self, batch: &[EditorPick]) -> Result<(), BookStoreError> {
        for entry in batch {
            self.record(entry.isbn, "update_editor_picks")?;
        }

        for entry in batch {
            self.record_mut(entry.isbn, "update_editor_picks")?.editor_pick = entry.pick;
        }

        Ok(())
    }

    /// Immutable snapshots of every record, in unspecified order
    pub fn snapshot_all(&self) -> Vec<StockBook> {
        self.books.values().map(StockBook::from).collect()
    }

    /// Immutable snapshots of exactly the requested records
    ///
    /// Rejected wholesale with `NoSuchIsbn` if any requested ISBN is missing;
    /// no partial result is returned.
    pub fn snapshot_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockBook>, BookStoreError> {
        for &isbn in isbns {
            self.record(isbn, "snapshot_by_isbn")?;
        }

        isbns
            .iter()
            .map(|&isbn| self.record(isbn, "snapshot_by_isbn").map(StockBook::from))
            .collect()
    }
}
