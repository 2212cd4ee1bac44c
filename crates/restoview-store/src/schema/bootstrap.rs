//! Idempotent schema creation

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, schema_error, Result};
use crate::schema::tables::all_tables;
use restoview_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;

/// Create every table that does not exist yet, in one transaction
///
/// Safe to call on every startup; existing tables and rows are untouched.
pub fn apply_schema(conn: &mut Connection) -> Result<()> {
    log_op_start!("apply_schema");
    let start = std::time::Instant::now();

    apply_schema_impl(conn).map_err(|e| {
        log_op_error!(
            "apply_schema",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "apply_schema",
        duration_ms = start.elapsed().as_millis() as u64
    );
    Ok(())
}

fn apply_schema_impl(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    for table in all_tables() {
        tx.execute_batch(&table.create_sql())
            .map_err(|e| schema_error(table.name, &e.to_string()))?;
    }

    tx.commit().map_err(from_rusqlite)?;
    Ok(())
}
