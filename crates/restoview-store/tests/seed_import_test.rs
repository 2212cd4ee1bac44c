// Integration tests for YAML seed import

mod common;

use restoview_core::errors::ExErrorKind;
use restoview_store::queries::{customer_queries, restaurant_queries};
use restoview_store::repo::{AssociationRepo, CustomerRepo, RestaurantRepo};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_import_basic_seed() {
    let mut conn = common::setup_test_db();

    let summary =
        restoview_store::seed::import_seed(&fixtures_dir().join("seed_basic.yaml"), &mut conn)
            .unwrap();

    assert_eq!(summary.restaurants, 3);
    assert_eq!(summary.customers, 2);
    assert_eq!(summary.reviews, 4);
    assert_eq!(summary.digest.len(), 64);

    assert_eq!(RestaurantRepo::list(&conn).unwrap().len(), 3);
    assert_eq!(CustomerRepo::list(&conn).unwrap().len(), 2);
    // naruto reviewed ramen twice: one association row
    assert_eq!(AssociationRepo::list(&conn).unwrap().len(), 3);
}

#[test]
fn test_imported_data_answers_queries() {
    let mut conn = common::setup_test_db();
    restoview_store::seed::import_seed(&fixtures_dir().join("seed_basic.yaml"), &mut conn)
        .unwrap();

    let fanciest = restaurant_queries::fanciest(&conn).unwrap().unwrap();
    assert_eq!(fanciest.name, "Prime Cut");

    let jane = CustomerRepo::list(&conn)
        .unwrap()
        .into_iter()
        .find(|c| c.first_name == "Jane")
        .unwrap();
    let favorite = customer_queries::favorite_restaurant(&conn, &jane)
        .unwrap()
        .unwrap();
    assert_eq!(favorite.name, "Prime Cut");
    assert_eq!(customer_queries::reviews(&conn, &jane).unwrap(), vec![4, 7]);
}

#[test]
fn test_bad_reference_rejected_before_writing() {
    let mut conn = common::setup_test_db();

    let err = restoview_store::seed::import_seed(
        &fixtures_dir().join("seed_bad_reference.yaml"),
        &mut conn,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(err.message().contains("unknown restaurant key: pizza"));
    assert!(RestaurantRepo::list(&conn).unwrap().is_empty());
}

#[test]
fn test_missing_file_is_invalid_input() {
    let mut conn = common::setup_test_db();

    let err =
        restoview_store::seed::import_seed(&fixtures_dir().join("nope.yaml"), &mut conn)
            .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_import_from_string() {
    let mut conn = common::setup_test_db();
    let yaml = r#"
schema_version: 0
restaurants:
  - { key: a, name: Alpha, price: 3 }
customers:
  - { key: c, first_name: Cara, last_name: Lee }
reviews:
  - { restaurant: a, customer: c, rating: 6 }
"#;

    let summary = restoview_store::seed::import_seed_str(yaml, &mut conn).unwrap();
    assert_eq!(summary.reviews, 1);

    let alpha = &RestaurantRepo::list(&conn).unwrap()[0];
    assert_eq!(
        restaurant_queries::all_reviews(&conn, alpha).unwrap(),
        vec!["Review for Alpha by Cara Lee: 6 stars."]
    );
}
