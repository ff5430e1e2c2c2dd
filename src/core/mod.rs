//! Core engine module
//!
//! Contains the inventory engine internals:
//! - `inventory_store` - The authoritative ISBN-to-record mapping
//! - `executor` - Two-phase atomic purchase batch execution
//! - `rating` - Rating aggregation and the top-K ranking function
//! - `query` - Read-only derived views (top-K, editor picks, demand)
//! - `engine` - The shared, lock-guarded engine both surfaces delegate to

pub(crate) mod executor;
pub(crate) mod inventory_store;
pub(crate) mod query;
pub mod rating;

pub mod engine;

pub use engine::BookStoreEngine;
pub use rating::{RATING_MAX, RATING_MIN};
