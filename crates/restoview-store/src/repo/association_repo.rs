//! Persistence for the `restaurant_customers` association table

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, from_rusqlite_in, Result};
use restoview_core::model::RestaurantCustomer;
use rusqlite::Connection;

pub struct AssociationRepo;

impl AssociationRepo {
    /// Record that a customer has interacted with a restaurant
    ///
    /// Returns `true` if a new row was written, `false` if the pair was
    /// already present.
    pub fn link(conn: &Connection, restaurant_id: i64, customer_id: i64) -> Result<bool> {
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO restaurant_customers (restaurant_id, customer_id)
                 VALUES (?1, ?2)",
                [restaurant_id, customer_id],
            )
            .map_err(|e| from_rusqlite_in("link_customer", e))?;

        Ok(inserted > 0)
    }

    /// Remove the pair; returns whether a row was removed
    pub fn unlink(conn: &Connection, restaurant_id: i64, customer_id: i64) -> Result<bool> {
        let removed = conn
            .execute(
                "DELETE FROM restaurant_customers WHERE restaurant_id = ?1 AND customer_id = ?2",
                [restaurant_id, customer_id],
            )
            .map_err(|e| from_rusqlite_in("unlink_customer", e))?;

        Ok(removed > 0)
    }

    /// All pairs, ordered by restaurant then customer
    pub fn list(conn: &Connection) -> Result<Vec<RestaurantCustomer>> {
        let mut stmt = conn
            .prepare(
                "SELECT restaurant_id, customer_id FROM restaurant_customers
                 ORDER BY restaurant_id, customer_id",
            )
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RestaurantCustomer {
                    restaurant_id: row.get(0)?,
                    customer_id: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }
}
