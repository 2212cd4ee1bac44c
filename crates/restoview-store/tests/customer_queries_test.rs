// Integration tests for customer-level queries and review writes

mod common;

use restoview_core::errors::ExErrorKind;
use restoview_store::queries::customer_queries;
use restoview_store::repo::{AssociationRepo, ReviewRepo};

#[test]
fn test_add_review_then_reviews_includes_rating() {
    let conn = common::setup_test_db();
    let sushi = common::restaurant(&conn, "Sushi Place", 30);
    let jane = common::customer(&conn, "Jane", "Doe");

    let review = customer_queries::add_review(&conn, &jane, 8, sushi.id).unwrap();

    assert_eq!(review.customer_id, jane.id);
    assert_eq!(review.restaurant_id, sushi.id);
    assert!(customer_queries::reviews(&conn, &jane).unwrap().contains(&8));
}

#[test]
fn test_add_review_records_association() {
    let conn = common::setup_test_db();
    let sushi = common::restaurant(&conn, "Sushi Place", 30);
    let jane = common::customer(&conn, "Jane", "Doe");

    customer_queries::add_review(&conn, &jane, 8, sushi.id).unwrap();
    customer_queries::add_review(&conn, &jane, 6, sushi.id).unwrap();

    assert_eq!(AssociationRepo::list(&conn).unwrap().len(), 1);
}

#[test]
fn test_add_review_unknown_restaurant_fails_at_storage() {
    let conn = common::setup_test_db();
    let jane = common::customer(&conn, "Jane", "Doe");

    let err = customer_queries::add_review(&conn, &jane, 8, 11).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(customer_queries::reviews(&conn, &jane).unwrap().is_empty());
}

#[test]
fn test_reviews_in_insertion_order() {
    let conn = common::setup_test_db();
    let a = common::restaurant(&conn, "A", 1);
    let b = common::restaurant(&conn, "B", 2);
    let jane = common::customer(&conn, "Jane", "Doe");

    customer_queries::add_review(&conn, &jane, 3, a.id).unwrap();
    customer_queries::add_review(&conn, &jane, 7, b.id).unwrap();
    customer_queries::add_review(&conn, &jane, 1, a.id).unwrap();

    assert_eq!(customer_queries::reviews(&conn, &jane).unwrap(), vec![3, 7, 1]);
    assert_eq!(
        customer_queries::customer_restaurants(&conn, &jane).unwrap(),
        vec!["A", "B", "A"]
    );
}

#[test]
fn test_favorite_restaurant_is_highest_single_rating() {
    let conn = common::setup_test_db();
    let r1 = common::restaurant(&conn, "R1", 10);
    let r2 = common::restaurant(&conn, "R2", 20);
    let jane = common::customer(&conn, "Jane", "Doe");

    customer_queries::add_review(&conn, &jane, 5, r1.id).unwrap();
    customer_queries::add_review(&conn, &jane, 9, r2.id).unwrap();

    assert_eq!(
        customer_queries::favorite_restaurant(&conn, &jane).unwrap(),
        Some(r2)
    );
}

#[test]
fn test_favorite_restaurant_uses_max_not_average() {
    let conn = common::setup_test_db();
    let r1 = common::restaurant(&conn, "R1", 10);
    let r2 = common::restaurant(&conn, "R2", 20);
    let jane = common::customer(&conn, "Jane", "Doe");

    // R1 averages 5.5, R2 averages 8, but R1 holds the single top rating
    customer_queries::add_review(&conn, &jane, 10, r1.id).unwrap();
    customer_queries::add_review(&conn, &jane, 1, r1.id).unwrap();
    customer_queries::add_review(&conn, &jane, 8, r2.id).unwrap();

    assert_eq!(
        customer_queries::favorite_restaurant(&conn, &jane).unwrap(),
        Some(r1)
    );
}

#[test]
fn test_favorite_restaurant_ignores_other_customers_ratings() {
    let conn = common::setup_test_db();
    let r1 = common::restaurant(&conn, "R1", 10);
    let r2 = common::restaurant(&conn, "R2", 20);
    let jane = common::customer(&conn, "Jane", "Doe");
    let kisuke = common::customer(&conn, "kisuke", "urahara");

    customer_queries::add_review(&conn, &jane, 6, r1.id).unwrap();
    customer_queries::add_review(&conn, &jane, 3, r2.id).unwrap();
    customer_queries::add_review(&conn, &kisuke, 10, r2.id).unwrap();

    assert_eq!(
        customer_queries::favorite_restaurant(&conn, &jane).unwrap(),
        Some(r1)
    );
}

#[test]
fn test_favorite_restaurant_none_without_reviews() {
    let conn = common::setup_test_db();
    let jane = common::customer(&conn, "Jane", "Doe");

    assert_eq!(
        customer_queries::favorite_restaurant(&conn, &jane).unwrap(),
        None
    );
}

#[test]
fn test_delete_reviews_removes_all_and_only_matching() {
    let conn = common::setup_test_db();
    let sushi = common::restaurant(&conn, "Sushi Place", 30);
    let ramen = common::restaurant(&conn, "Ichiraku", 8);
    let jane = common::customer(&conn, "Jane", "Doe");
    let kisuke = common::customer(&conn, "kisuke", "urahara");

    customer_queries::add_review(&conn, &jane, 4, sushi.id).unwrap();
    customer_queries::add_review(&conn, &jane, 5, sushi.id).unwrap();
    let jane_ramen = customer_queries::add_review(&conn, &jane, 9, ramen.id).unwrap();
    let kisuke_sushi = customer_queries::add_review(&conn, &kisuke, 7, sushi.id).unwrap();

    let removed = customer_queries::delete_reviews(&conn, &jane, &sushi).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(customer_queries::reviews(&conn, &jane).unwrap(), vec![9]);
    assert!(ReviewRepo::get(&conn, jane_ramen.id).unwrap().is_some());
    assert!(ReviewRepo::get(&conn, kisuke_sushi.id).unwrap().is_some());

    let pairs = AssociationRepo::list(&conn).unwrap();
    assert!(!pairs
        .iter()
        .any(|p| p.customer_id == jane.id && p.restaurant_id == sushi.id));
    assert_eq!(pairs.len(), 2);
}

#[test]
fn test_delete_reviews_noop_when_none_match() {
    let conn = common::setup_test_db();
    let sushi = common::restaurant(&conn, "Sushi Place", 30);
    let jane = common::customer(&conn, "Jane", "Doe");

    assert_eq!(
        customer_queries::delete_reviews(&conn, &jane, &sushi).unwrap(),
        0
    );
}
