//! Persistence for the `reviews` table
//!
//! `insert` writes only the review row. Use
//! `queries::customer_queries::add_review` to also record the
//! restaurant/customer association.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, from_rusqlite_in, Result};
use restoview_core::model::{NewReview, Review};
use rusqlite::{Connection, OptionalExtension, Row};

pub(crate) const COLUMNS: &str = "id, rating, restaurant_id, customer_id";

pub(crate) fn map_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        rating: row.get(1)?,
        restaurant_id: row.get(2)?,
        customer_id: row.get(3)?,
    })
}

pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review row
    ///
    /// No bounds check on `rating`. An unknown restaurant or customer id is
    /// rejected by the foreign keys (`ConstraintViolation`) when enforcement
    /// is on.
    pub fn insert(conn: &Connection, review: &NewReview) -> Result<Review> {
        conn.execute(
            "INSERT INTO reviews (rating, restaurant_id, customer_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![review.rating, review.restaurant_id, review.customer_id],
        )
        .map_err(|e| from_rusqlite_in("insert_review", e))?;

        Ok(review.with_id(conn.last_insert_rowid()))
    }

    pub fn get(conn: &Connection, review_id: i64) -> Result<Option<Review>> {
        conn.query_row(
            &format!("SELECT {} FROM reviews WHERE id = ?1", COLUMNS),
            [review_id],
            map_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Reviews of one restaurant, in id order
    pub fn list_for_restaurant(conn: &Connection, restaurant_id: i64) -> Result<Vec<Review>> {
        Self::list_where(conn, "restaurant_id", restaurant_id)
    }

    /// Reviews left by one customer, in id order
    pub fn list_for_customer(conn: &Connection, customer_id: i64) -> Result<Vec<Review>> {
        Self::list_where(conn, "customer_id", customer_id)
    }

    /// Delete every review for the (customer, restaurant) pair; returns the
    /// number of rows removed
    pub fn delete_for_pair(
        conn: &Connection,
        customer_id: i64,
        restaurant_id: i64,
    ) -> Result<usize> {
        conn.execute(
            "DELETE FROM reviews WHERE customer_id = ?1 AND restaurant_id = ?2",
            [customer_id, restaurant_id],
        )
        .map_err(|e| from_rusqlite_in("delete_reviews", e))
    }

    fn list_where(conn: &Connection, column: &str, value: i64) -> Result<Vec<Review>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM reviews WHERE {} = ?1 ORDER BY id",
                COLUMNS, column
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([value], map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }
}
