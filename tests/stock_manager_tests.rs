//! Management-surface integration tests

use bookstore_engine::{
    BookCopy, BookRating, BookStore, BookStoreEngine, BookStoreError, BuyerSurface, EditorPick,
    ErrorKind, ManagementSurface, StockBook, StockManager,
};
use rstest::rstest;
use rust_decimal::Decimal;
use std::sync::Arc;

const TEST_ISBN: i64 = 3044560;

fn book(isbn: i64, copies: i32) -> StockBook {
    StockBook::new(isbn, "Title", "Author", Decimal::new(1999, 2), copies)
}

fn setup() -> (ManagementSurface, BuyerSurface) {
    let engine = Arc::new(BookStoreEngine::new());
    let manager = ManagementSurface::new(Arc::clone(&engine));
    let buyer = BuyerSurface::new(engine);
    manager.add_books(vec![book(TEST_ISBN, 5)]).unwrap();
    (manager, buyer)
}

#[test]
fn test_add_books_duplicate_isbn_rejects_whole_batch() {
    let (manager, _buyer) = setup();

    let result = manager.add_books(vec![book(TEST_ISBN + 1, 5), book(TEST_ISBN, 5)]);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::DuplicateIsbn);
    assert_eq!(manager.get_books().len(), 1);
}

#[rstest]
#[case::non_positive_isbn(StockBook::new(0, "Title", "Author", Decimal::new(1000, 2), 5))]
#[case::empty_title(StockBook::new(2, "", "Author", Decimal::new(1000, 2), 5))]
#[case::empty_author(StockBook::new(2, "Title", "", Decimal::new(1000, 2), 5))]
#[case::negative_price(StockBook::new(2, "Title", "Author", Decimal::new(-1000, 2), 5))]
#[case::negative_copies(StockBook::new(2, "Title", "Author", Decimal::new(1000, 2), -5))]
fn test_add_books_malformed_definition_rejects_whole_batch(#[case] bad: StockBook) {
    let (manager, _buyer) = setup();

    let result = manager.add_books(vec![book(TEST_ISBN + 1, 5), bad]);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(manager.get_books().len(), 1);
}

#[test]
fn test_add_books_may_seed_counters() {
    let (manager, buyer) = setup();
    let mut imported = book(TEST_ISBN + 1, 5);
    imported.total_rating = 10;
    imported.num_times_rated = 2;

    manager.add_books(vec![imported]).unwrap();

    // Imported ratings count toward the ranking right away.
    let top = buyer.get_top_rated_books(1).unwrap();
    assert_eq!(top[0].isbn, TEST_ISBN + 1);
}

#[test]
fn test_add_copies_increases_stock() {
    let (manager, _buyer) = setup();

    manager.add_copies(&[BookCopy::new(TEST_ISBN, 3)]).unwrap();

    assert_eq!(
        manager.get_books_by_isbn(&[TEST_ISBN]).unwrap()[0].num_copies,
        8
    );
}

#[test]
fn test_add_copies_unknown_isbn_rejects_whole_batch() {
    let (manager, _buyer) = setup();

    let result = manager.add_copies(&[BookCopy::new(TEST_ISBN, 3), BookCopy::new(100000, 1)]);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NoSuchIsbn);
    assert_eq!(
        manager.get_books_by_isbn(&[TEST_ISBN]).unwrap()[0].num_copies,
        5
    );
}

#[test]
fn test_get_books_by_isbn_returns_full_records() {
    let (manager, buyer) = setup();
    buyer.rate_books(&[BookRating::new(TEST_ISBN, 4)]).unwrap();

    let books = manager.get_books_by_isbn(&[TEST_ISBN]).unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].num_copies, 5);
    assert_eq!(books[0].total_rating, 4);
    assert_eq!(books[0].num_times_rated, 1);
}

#[test]
fn test_remove_books_deletes_listed_books_only() {
    let (manager, _buyer) = setup();
    manager
        .add_books(vec![book(TEST_ISBN + 1, 5), book(TEST_ISBN + 2, 5)])
        .unwrap();

    manager.remove_books(&[TEST_ISBN, TEST_ISBN + 2]).unwrap();

    let books = manager.get_books();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isbn, TEST_ISBN + 1);
}

#[test]
fn test_remove_books_unknown_isbn_rejects_whole_batch() {
    let (manager, _buyer) = setup();

    let result = manager.remove_books(&[TEST_ISBN, 100000]);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NoSuchIsbn);
    assert_eq!(manager.get_books().len(), 1);
}

#[test]
fn test_remove_books_invalid_isbn_rejects_whole_batch() {
    let (manager, _buyer) = setup();

    let result = manager.remove_books(&[TEST_ISBN, -1]);

    assert_eq!(result.unwrap_err(), BookStoreError::invalid_isbn(-1));
    assert_eq!(manager.get_books().len(), 1);
}

#[test]
fn test_remove_all_books_empties_the_store() {
    let (manager, _buyer) = setup();
    manager.add_books(vec![book(TEST_ISBN + 1, 5)]).unwrap();

    manager.remove_all_books();

    assert!(manager.get_books().is_empty());
}

#[test]
fn test_removed_isbn_can_be_stocked_again() {
    let (manager, _buyer) = setup();

    manager.remove_books(&[TEST_ISBN]).unwrap();
    manager.add_books(vec![book(TEST_ISBN, 2)]).unwrap();

    let books = manager.get_books_by_isbn(&[TEST_ISBN]).unwrap();
    assert_eq!(books[0].num_copies, 2);
    // A re-added book starts over: no carried-over counters.
    assert_eq!(books[0].num_sale_misses, 0);
}

#[test]
fn test_editor_picks_round_trip() {
    let (manager, buyer) = setup();
    manager.add_books(vec![book(TEST_ISBN + 1, 5)]).unwrap();

    manager
        .update_editor_picks(&[EditorPick::new(TEST_ISBN, true)])
        .unwrap();

    let picks = buyer.get_editor_picks(10).unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].isbn, TEST_ISBN);

    manager
        .update_editor_picks(&[EditorPick::new(TEST_ISBN, false)])
        .unwrap();
    assert!(buyer.get_editor_picks(10).unwrap().is_empty());
}

#[test]
fn test_editor_picks_sample_is_capped_at_k() {
    let (manager, buyer) = setup();
    manager
        .add_books(vec![book(TEST_ISBN + 1, 5), book(TEST_ISBN + 2, 5)])
        .unwrap();
    manager
        .update_editor_picks(&[
            EditorPick::new(TEST_ISBN, true),
            EditorPick::new(TEST_ISBN + 1, true),
            EditorPick::new(TEST_ISBN + 2, true),
        ])
        .unwrap();

    let picks = buyer.get_editor_picks(2).unwrap();

    assert_eq!(picks.len(), 2);
}

#[test]
fn test_editor_picks_unknown_isbn_rejects_whole_batch() {
    let (manager, buyer) = setup();

    let result = manager.update_editor_picks(&[
        EditorPick::new(TEST_ISBN, true),
        EditorPick::new(100000, true),
    ]);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NoSuchIsbn);
    assert!(buyer.get_editor_picks(10).unwrap().is_empty());
}

#[test]
fn test_books_in_demand_tracks_misses_across_buyers() {
    let (manager, buyer) = setup();

    assert!(manager.get_books_in_demand().is_empty());
    assert!(buyer.buy_books(&[BookCopy::new(TEST_ISBN, 6)]).is_err());
    assert!(buyer.buy_books(&[BookCopy::new(TEST_ISBN, 7)]).is_err());

    let in_demand = manager.get_books_in_demand();
    assert_eq!(in_demand.len(), 1);
    assert_eq!(in_demand[0].num_sale_misses, 2);
}

#[test]
fn test_stock_book_serializes_with_snake_case_fields() {
    let value = serde_json::to_value(book(TEST_ISBN, 5)).unwrap();

    assert_eq!(value["isbn"], TEST_ISBN);
    assert_eq!(value["num_copies"], 5);
    assert_eq!(value["editor_pick"], false);

    let back: StockBook = serde_json::from_value(value).unwrap();
    assert_eq!(back, book(TEST_ISBN, 5));
}
