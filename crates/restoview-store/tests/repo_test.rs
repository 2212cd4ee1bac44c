// Integration tests for row-level repositories

mod common;

use restoview_core::errors::ExErrorKind;
use restoview_core::model::{NewReview, RestaurantCustomer};
use restoview_store::repo::{AssociationRepo, CustomerRepo, RestaurantRepo, ReviewRepo};

#[test]
fn test_insert_assigns_sequential_ids() {
    let conn = common::setup_test_db();

    let a = common::restaurant(&conn, "A", 1);
    let b = common::restaurant(&conn, "B", 2);

    assert!(b.id > a.id);
    assert_eq!(RestaurantRepo::get(&conn, a.id).unwrap(), Some(a));
}

#[test]
fn test_get_missing_returns_none() {
    let conn = common::setup_test_db();

    assert_eq!(RestaurantRepo::get(&conn, 99).unwrap(), None);
    assert_eq!(CustomerRepo::get(&conn, 99).unwrap(), None);
    assert_eq!(ReviewRepo::get(&conn, 99).unwrap(), None);
}

#[test]
fn test_list_in_id_order() {
    let conn = common::setup_test_db();
    common::customer(&conn, "kisuke", "urahara");
    common::customer(&conn, "naruto", "uzumaki");

    let names: Vec<String> = CustomerRepo::list(&conn)
        .unwrap()
        .iter()
        .map(|c| c.full_name())
        .collect();

    assert_eq!(names, vec!["kisuke urahara", "naruto uzumaki"]);
}

#[test]
fn test_review_insert_rejects_unknown_restaurant() {
    let conn = common::setup_test_db();
    let jane = common::customer(&conn, "Jane", "Doe");

    let err = ReviewRepo::insert(&conn, &NewReview::new(5, 404, jane.id)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.code(), "ERR_CONSTRAINT_VIOLATION");
}

#[test]
fn test_rating_has_no_bounds() {
    let conn = common::setup_test_db();
    let r = common::restaurant(&conn, "A", 1);
    let c = common::customer(&conn, "Jane", "Doe");

    let low = ReviewRepo::insert(&conn, &NewReview::new(-3, r.id, c.id)).unwrap();
    let high = ReviewRepo::insert(&conn, &NewReview::new(1_000, r.id, c.id)).unwrap();

    assert_eq!(ReviewRepo::get(&conn, low.id).unwrap().unwrap().rating, -3);
    assert_eq!(ReviewRepo::get(&conn, high.id).unwrap().unwrap().rating, 1_000);
}

#[test]
fn test_delete_restaurant_without_reviews() {
    let conn = common::setup_test_db();
    let r = common::restaurant(&conn, "A", 1);

    assert!(RestaurantRepo::delete(&conn, r.id).unwrap());
    assert!(!RestaurantRepo::delete(&conn, r.id).unwrap());
}

#[test]
fn test_delete_does_not_cascade_to_reviews() {
    let conn = common::setup_test_db();
    let r = common::restaurant(&conn, "A", 1);
    let c = common::customer(&conn, "Jane", "Doe");
    let review = ReviewRepo::insert(&conn, &NewReview::new(4, r.id, c.id)).unwrap();

    let err = RestaurantRepo::delete(&conn, r.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    let err = CustomerRepo::delete(&conn, c.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    assert!(ReviewRepo::get(&conn, review.id).unwrap().is_some());
}

#[test]
fn test_association_link_is_idempotent() {
    let conn = common::setup_test_db();
    let r = common::restaurant(&conn, "A", 1);
    let c = common::customer(&conn, "Jane", "Doe");

    assert!(AssociationRepo::link(&conn, r.id, c.id).unwrap());
    assert!(!AssociationRepo::link(&conn, r.id, c.id).unwrap());

    assert_eq!(
        AssociationRepo::list(&conn).unwrap(),
        vec![RestaurantCustomer {
            restaurant_id: r.id,
            customer_id: c.id
        }]
    );

    assert!(AssociationRepo::unlink(&conn, r.id, c.id).unwrap());
    assert!(AssociationRepo::list(&conn).unwrap().is_empty());
}
