//! Persistence for the `restaurants` table

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, from_rusqlite_in, Result};
use restoview_core::model::{NewRestaurant, Restaurant};
use restoview_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OptionalExtension, Row};

/// Column list matching `map_row`
pub(crate) const COLUMNS: &str = "id, name, price";

/// Build a Restaurant from a row selected with `COLUMNS` (or an aliased
/// equivalent in the same order)
pub(crate) fn map_row(row: &Row<'_>) -> rusqlite::Result<Restaurant> {
    Ok(Restaurant {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
    })
}

pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a restaurant and return it with its assigned id
    pub fn insert(conn: &Connection, restaurant: &NewRestaurant) -> Result<Restaurant> {
        log_op_start!("insert_restaurant", name = restaurant.name.as_str());
        let start = std::time::Instant::now();

        let result = conn
            .execute(
                "INSERT INTO restaurants (name, price) VALUES (?1, ?2)",
                rusqlite::params![restaurant.name, restaurant.price],
            )
            .map(|_| restaurant.clone().with_id(conn.last_insert_rowid()))
            .map_err(|e| {
                let err = from_rusqlite_in("insert_restaurant", e);
                log_op_error!(
                    "insert_restaurant",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                err
            })?;

        log_op_end!(
            "insert_restaurant",
            duration_ms = start.elapsed().as_millis() as u64,
            restaurant_id = result.id
        );
        Ok(result)
    }

    pub fn get(conn: &Connection, restaurant_id: i64) -> Result<Option<Restaurant>> {
        conn.query_row(
            &format!("SELECT {} FROM restaurants WHERE id = ?1", COLUMNS),
            [restaurant_id],
            map_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All restaurants in id order
    pub fn list(conn: &Connection) -> Result<Vec<Restaurant>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM restaurants ORDER BY id", COLUMNS))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Delete a restaurant by id; returns whether a row was removed
    ///
    /// Reviews are not cascaded. With foreign keys enforced, deleting a
    /// restaurant that still has reviews or association rows fails with
    /// `ConstraintViolation`.
    pub fn delete(conn: &Connection, restaurant_id: i64) -> Result<bool> {
        log_op_start!("delete_restaurant", restaurant_id = restaurant_id);
        let start = std::time::Instant::now();

        let removed = conn
            .execute("DELETE FROM restaurants WHERE id = ?1", [restaurant_id])
            .map_err(|e| {
                let err = from_rusqlite_in("delete_restaurant", e);
                log_op_error!(
                    "delete_restaurant",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    restaurant_id = restaurant_id
                );
                err
            })?;

        log_op_end!(
            "delete_restaurant",
            duration_ms = start.elapsed().as_millis() as u64,
            rows_affected = removed as u64
        );
        Ok(removed > 0)
    }
}
