//! Constraint naming convention
//!
//! Foreign keys are named `fk_<table>_<column>_<referred_table>`.

/// Name for the foreign key on `table.column` referring to `referred_table`
pub fn foreign_key_name(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{}_{}_{}", table, column, referred_table)
}
