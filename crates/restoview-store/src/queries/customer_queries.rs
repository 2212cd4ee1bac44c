#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::{AssociationRepo, ReviewRepo};
use restoview_core::model::{Customer, NewReview, Restaurant, Review};
use restoview_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OptionalExtension};

/// Ratings this customer has left, in review id order
pub fn reviews(conn: &Connection, customer: &Customer) -> Result<Vec<i64>> {
    Ok(ReviewRepo::list_for_customer(conn, customer.id)?
        .into_iter()
        .map(|r| r.rating)
        .collect())
}

/// Names of the restaurants this customer has reviewed, one per review
pub fn customer_restaurants(conn: &Connection, customer: &Customer) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT rs.name
             FROM restaurants rs
             JOIN reviews r ON r.restaurant_id = rs.id
             WHERE r.customer_id = ?1
             ORDER BY r.id",
        )
        .map_err(from_rusqlite)?;

    let names = stmt
        .query_map([customer.id], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;

    Ok(names)
}

/// The restaurant behind this customer's single highest-rated review
///
/// Joined through the association table, so only restaurants the customer
/// is linked to are considered. Equal top ratings go to the earlier review.
pub fn favorite_restaurant(conn: &Connection, customer: &Customer) -> Result<Option<Restaurant>> {
    conn.query_row(
        "SELECT rs.id, rs.name, rs.price
         FROM restaurants rs
         JOIN restaurant_customers rc ON rc.restaurant_id = rs.id
         JOIN reviews r ON r.restaurant_id = rs.id AND r.customer_id = rc.customer_id
         WHERE rc.customer_id = ?1
         ORDER BY r.rating DESC, r.id ASC
         LIMIT 1",
        [customer.id],
        crate::repo::restaurant_repo::map_row,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Leave a review for `restaurant_id` as this customer
///
/// Inserts the review and records the association. Nothing is validated
/// up front: an unknown restaurant is rejected by the foreign key. Both
/// writes land on `conn`; pass a `Transaction` to make them atomic with
/// other work and to decide when they commit.
pub fn add_review(
    conn: &Connection,
    customer: &Customer,
    rating: i64,
    restaurant_id: i64,
) -> Result<Review> {
    log_op_start!(
        "add_review",
        customer_id = customer.id,
        restaurant_id = restaurant_id
    );
    let start = std::time::Instant::now();

    let review = add_review_impl(conn, customer, rating, restaurant_id).map_err(|e| {
        log_op_error!(
            "add_review",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            customer_id = customer.id
        );
        e
    })?;

    log_op_end!(
        "add_review",
        duration_ms = start.elapsed().as_millis() as u64,
        review_id = review.id
    );
    Ok(review)
}

fn add_review_impl(
    conn: &Connection,
    customer: &Customer,
    rating: i64,
    restaurant_id: i64,
) -> Result<Review> {
    let review = ReviewRepo::insert(conn, &NewReview::new(rating, restaurant_id, customer.id))?;
    AssociationRepo::link(conn, restaurant_id, customer.id)?;
    Ok(review)
}

/// Remove every review this customer left for `restaurant`
///
/// Returns how many reviews were deleted; zero is not an error. The
/// association row for the pair goes with them.
pub fn delete_reviews(
    conn: &Connection,
    customer: &Customer,
    restaurant: &Restaurant,
) -> Result<usize> {
    log_op_start!(
        "delete_reviews",
        customer_id = customer.id,
        restaurant_id = restaurant.id
    );
    let start = std::time::Instant::now();

    let removed = delete_reviews_impl(conn, customer, restaurant).map_err(|e| {
        log_op_error!(
            "delete_reviews",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            customer_id = customer.id
        );
        e
    })?;

    log_op_end!(
        "delete_reviews",
        duration_ms = start.elapsed().as_millis() as u64,
        rows_affected = removed as u64
    );
    Ok(removed)
}

fn delete_reviews_impl(
    conn: &Connection,
    customer: &Customer,
    restaurant: &Restaurant,
) -> Result<usize> {
    let removed = ReviewRepo::delete_for_pair(conn, customer.id, restaurant.id)?;
    AssociationRepo::unlink(conn, restaurant.id, customer.id)?;
    Ok(removed)
}
