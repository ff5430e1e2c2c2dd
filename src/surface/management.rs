//! Management surface

use crate::core::BookStoreEngine;
use crate::surface::{validate, StockManager};
use crate::types::{BookCopy, BookStoreError, EditorPick, Isbn, StockBook};
use std::sync::Arc;

/// Management capability over a shared engine
#[derive(Debug, Clone)]
pub struct ManagementSurface {
    engine: Arc<BookStoreEngine>,
}

impl ManagementSurface {
    pub fn new(engine: Arc<BookStoreEngine>) -> Self {
        ManagementSurface { engine }
    }
}

impl StockManager for ManagementSurface {
    fn add_books(&self, books: Vec<StockBook>) -> Result<(), BookStoreError> {
        validate::validate_stock_books(&books)?;
        self.engine.add_books(books)
    }

    fn add_copies(&self, batch: &[BookCopy]) -> Result<(), BookStoreError> {
        validate::validate_copy_batch(batch, "add_copies")?;
        self.engine.add_copies(batch)
    }

    fn get_books(&self) -> Vec<StockBook> {
        self.engine.get_books()
    }

    fn get_books_by_isbn(&self, isbns: &[Isbn]) -> Result<Vec<StockBook>, BookStoreError> {
        validate::validate_isbn_set(isbns, "get_books_by_isbn")?;
        self.engine.get_books_by_isbn(isbns)
    }

    fn get_books_in_demand(&self) -> Vec<StockBook> {
        self.engine.books_in_demand()
    }

    fn update_editor_picks(&self, batch: &[EditorPick]) -> Result<(), BookStoreError> {
        validate::validate_editor_pick_batch(batch)?;
        self.engine.update_editor_picks(batch)
    }

    fn remove_books(&self, isbns: &[Isbn]) -> Result<(), BookStoreError> {
        validate::validate_isbn_set(isbns, "remove_books")?;
        self.engine.remove_books(isbns)
    }

    fn remove_all_books(&self) {
        self.engine.remove_all_books();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn book(isbn: Isbn, copies: i32) -> StockBook {
        StockBook::new(isbn, "Title", "Author", Decimal::new(999, 2), copies)
    }

    fn empty_surface() -> ManagementSurface {
        ManagementSurface::new(Arc::new(BookStoreEngine::new()))
    }

    #[test]
    fn test_add_books_rejects_malformed_definition_before_engine() {
        let manager = empty_surface();
        let mut bad = book(1, 5);
        bad.title = String::new();

        let result = manager.add_books(vec![book(2, 5), bad]);

        assert!(matches!(
            result.unwrap_err(),
            BookStoreError::InvalidBook { .. }
        ));
        assert!(manager.get_books().is_empty());
    }

    #[test]
    fn test_add_copies_restocks_existing_book() {
        let manager = empty_surface();
        manager.add_books(vec![book(1, 2)]).unwrap();

        manager.add_copies(&[BookCopy::new(1, 3)]).unwrap();

        assert_eq!(manager.get_books_by_isbn(&[1]).unwrap()[0].num_copies, 5);
    }

    #[test]
    fn test_remove_books_unknown_isbn_rejected_wholesale() {
        let manager = empty_surface();
        manager.add_books(vec![book(1, 5)]).unwrap();

        let result = manager.remove_books(&[1, 99]);

        assert!(matches!(
            result.unwrap_err(),
            BookStoreError::NoSuchIsbn { isbn: 99, .. }
        ));
        assert_eq!(manager.get_books().len(), 1);
    }

    #[test]
    fn test_remove_all_books_clears_inventory() {
        let manager = empty_surface();
        manager.add_books(vec![book(1, 5), book(2, 5)]).unwrap();

        manager.remove_all_books();

        assert!(manager.get_books().is_empty());
    }
}
