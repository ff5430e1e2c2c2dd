//! Buyer surface

use crate::core::BookStoreEngine;
use crate::surface::{validate, BookStore};
use crate::types::{Book, BookCopy, BookRating, BookStoreError, Isbn};
use std::sync::Arc;

/// Buyer capability over a shared engine
///
/// Cheap to clone; clones share the same underlying inventory.
#[derive(Debug, Clone)]
pub struct BuyerSurface {
    engine: Arc<BookStoreEngine>,
}

impl BuyerSurface {
    pub fn new(engine: Arc<BookStoreEngine>) -> Self {
        BuyerSurface { engine }
    }
}

impl BookStore for BuyerSurface {
    fn buy_books(&self, batch: &[BookCopy]) -> Result<(), BookStoreError> {
        validate::validate_copy_batch(batch, "buy_books")?;
        self.engine.buy_books(batch)
    }

    fn get_books(&self, isbns: &[Isbn]) -> Result<Vec<Book>, BookStoreError> {
        validate::validate_isbn_set(isbns, "get_books")?;
        let books = self.engine.get_books_by_isbn(isbns)?;
        Ok(books.iter().map(Book::from).collect())
    }

    fn rate_books(&self, batch: &[BookRating]) -> Result<(), BookStoreError> {
        validate::validate_rating_batch(batch)?;
        self.engine.rate_books(batch)
    }

    fn get_top_rated_books(&self, k: i32) -> Result<Vec<Book>, BookStoreError> {
        let books = self.engine.top_rated_books(k)?;
        Ok(books.iter().map(Book::from).collect())
    }

    fn get_editor_picks(&self, k: i32) -> Result<Vec<Book>, BookStoreError> {
        let books = self.engine.editor_picks(k)?;
        Ok(books.iter().map(Book::from).collect())
    }
}
