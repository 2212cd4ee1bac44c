#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::{restaurant_repo, ReviewRepo};
use restoview_core::model::{Customer, Restaurant, Review};
use restoview_core::render::full_review;
use rusqlite::{Connection, OptionalExtension};

/// Every review of this restaurant, in id order
pub fn reviews(conn: &Connection, restaurant: &Restaurant) -> Result<Vec<Review>> {
    ReviewRepo::list_for_restaurant(conn, restaurant.id)
}

/// First names of the customers who reviewed this restaurant
///
/// One entry per review, so a customer who reviewed twice appears twice.
pub fn restaurant_customers(conn: &Connection, restaurant: &Restaurant) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.first_name
             FROM customers c
             JOIN reviews r ON r.customer_id = c.id
             WHERE r.restaurant_id = ?1
             ORDER BY r.id",
        )
        .map_err(from_rusqlite)?;

    let names = stmt
        .query_map([restaurant.id], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;

    Ok(names)
}

/// One `"Review for … by …: N stars."` sentence per review of this restaurant
pub fn all_reviews(conn: &Connection, restaurant: &Restaurant) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT r.rating, c.id, c.first_name, c.last_name
             FROM reviews r
             JOIN customers c ON c.id = r.customer_id
             WHERE r.restaurant_id = ?1
             ORDER BY r.id",
        )
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([restaurant.id], |row| {
            let rating: i64 = row.get(0)?;
            let customer = Customer {
                id: row.get(1)?,
                first_name: row.get(2)?,
                last_name: row.get(3)?,
            };
            Ok((rating, customer))
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows
        .iter()
        .map(|(rating, customer)| full_review(restaurant, customer, *rating))
        .collect())
}

/// The restaurant with the highest price, or `None` when there are none
///
/// Ties go to the lowest id.
pub fn fanciest(conn: &Connection) -> Result<Option<Restaurant>> {
    conn.query_row(
        &format!(
            "SELECT {} FROM restaurants ORDER BY price DESC, id ASC LIMIT 1",
            restaurant_repo::COLUMNS
        ),
        [],
        restaurant_repo::map_row,
    )
    .optional()
    .map_err(from_rusqlite)
}
