//! In-process inventory engine for a book-selling service.
//!
//! The crate keeps a single authoritative map of books keyed by ISBN and
//! exposes it through two capability surfaces: buyers purchase, rate, and
//! browse; management stocks, inspects, curates, and removes. Every batch
//! operation is atomic under concurrent access: it validates all entries
//! against current state and then either commits for all of them or rejects
//! wholesale, with one deliberate exception (failed purchases still record a
//! sale miss on every under-stocked entry).
//!
//! # Architecture
//!
//! - [`types`] - book records and views, request entry types, the error enum
//! - [`core`] - the keyed store, the two-phase batch executors, rating
//!   aggregation and ranking, derived queries, and the lock-guarded engine
//! - [`surface`] - shape validation plus the [`BuyerSurface`] and
//!   [`ManagementSurface`] façades over one shared [`BookStoreEngine`]
//!
//! # Example
//!
//! ```
//! use bookstore_engine::{
//!     BookCopy, BookStore, BookStoreEngine, BuyerSurface, ManagementSurface,
//!     StockBook, StockManager,
//! };
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let engine = Arc::new(BookStoreEngine::new());
//! let manager = ManagementSurface::new(Arc::clone(&engine));
//! let buyer = BuyerSurface::new(Arc::clone(&engine));
//!
//! manager
//!     .add_books(vec![StockBook::new(
//!         3044560,
//!         "Harry Potter and JUnit",
//!         "JK Unit",
//!         Decimal::new(2499, 2),
//!         5,
//!     )])
//!     .unwrap();
//!
//! buyer.buy_books(&[BookCopy::new(3044560, 2)]).unwrap();
//! assert_eq!(manager.get_books()[0].num_copies, 3);
//! ```

pub mod core;
pub mod surface;
pub mod types;

pub use crate::core::{BookStoreEngine, RATING_MAX, RATING_MIN};
pub use crate::surface::{BookStore, BuyerSurface, ManagementSurface, StockManager};
pub use crate::types::{
    Book, BookCopy, BookRating, BookStoreError, EditorPick, ErrorKind, Isbn, StockBook,
};
