#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::{customer_repo, restaurant_repo, CustomerRepo, RestaurantRepo};
use restoview_core::errors::RestoError;
use restoview_core::model::{Customer, Restaurant, Review};
use rusqlite::{Connection, OptionalExtension};

/// The customer who wrote review `review_id`
///
/// `Ok(None)` when no such review exists; a missing review is not an error.
pub fn customer(conn: &Connection, review_id: i64) -> Result<Option<Customer>> {
    conn.query_row(
        &format!(
            "SELECT {} FROM customers WHERE id = (SELECT customer_id FROM reviews WHERE id = ?1)",
            customer_repo::COLUMNS
        ),
        [review_id],
        customer_repo::map_row,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// The restaurant that review `review_id` is about
///
/// `Ok(None)` when no such review exists.
pub fn restaurant(conn: &Connection, review_id: i64) -> Result<Option<Restaurant>> {
    conn.query_row(
        &format!(
            "SELECT {} FROM restaurants WHERE id = (SELECT restaurant_id FROM reviews WHERE id = ?1)",
            restaurant_repo::COLUMNS
        ),
        [review_id],
        restaurant_repo::map_row,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// `"Review for {restaurant} by {customer full name}: {rating} stars."`
///
/// Fails with `NotFound` only if the referenced restaurant or customer row
/// is gone, which foreign-key enforcement normally rules out.
pub fn full_review(conn: &Connection, review: &Review) -> Result<String> {
    let restaurant = RestaurantRepo::get(conn, review.restaurant_id)?.ok_or(
        RestoError::RestaurantNotFound {
            restaurant_id: review.restaurant_id,
        },
    )?;
    let customer = CustomerRepo::get(conn, review.customer_id)?.ok_or(
        RestoError::CustomerNotFound {
            customer_id: review.customer_id,
        },
    )?;

    Ok(restoview_core::render::full_review(
        &restaurant,
        &customer,
        review.rating,
    ))
}
