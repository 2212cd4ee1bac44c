//! Persistence for the `customers` table

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, from_rusqlite_in, Result};
use restoview_core::model::{Customer, NewCustomer};
use restoview_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OptionalExtension, Row};

pub(crate) const COLUMNS: &str = "id, first_name, last_name";

pub(crate) fn map_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
    })
}

pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a customer and return it with its assigned id
    pub fn insert(conn: &Connection, customer: &NewCustomer) -> Result<Customer> {
        log_op_start!("insert_customer");
        let start = std::time::Instant::now();

        let result = conn
            .execute(
                "INSERT INTO customers (first_name, last_name) VALUES (?1, ?2)",
                rusqlite::params![customer.first_name, customer.last_name],
            )
            .map(|_| customer.clone().with_id(conn.last_insert_rowid()))
            .map_err(|e| {
                let err = from_rusqlite_in("insert_customer", e);
                log_op_error!(
                    "insert_customer",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                err
            })?;

        log_op_end!(
            "insert_customer",
            duration_ms = start.elapsed().as_millis() as u64,
            customer_id = result.id
        );
        Ok(result)
    }

    pub fn get(conn: &Connection, customer_id: i64) -> Result<Option<Customer>> {
        conn.query_row(
            &format!("SELECT {} FROM customers WHERE id = ?1", COLUMNS),
            [customer_id],
            map_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list(conn: &Connection) -> Result<Vec<Customer>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM customers ORDER BY id", COLUMNS))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Delete a customer by id; returns whether a row was removed
    ///
    /// Fails with `ConstraintViolation` while the customer still has reviews.
    pub fn delete(conn: &Connection, customer_id: i64) -> Result<bool> {
        log_op_start!("delete_customer", customer_id = customer_id);
        let start = std::time::Instant::now();

        let removed = conn
            .execute("DELETE FROM customers WHERE id = ?1", [customer_id])
            .map_err(|e| {
                let err = from_rusqlite_in("delete_customer", e);
                log_op_error!(
                    "delete_customer",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    customer_id = customer_id
                );
                err
            })?;

        log_op_end!(
            "delete_customer",
            duration_ms = start.elapsed().as_millis() as u64,
            rows_affected = removed as u64
        );
        Ok(removed > 0)
    }
}
