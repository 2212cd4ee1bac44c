//! Schema definition and bootstrap
//!
//! Tables are declared as Rust data (`tables`), rendered to DDL with named
//! foreign-key constraints (`naming`), and created idempotently
//! (`bootstrap`). There is no version ledger: bootstrap only ever issues
//! `CREATE TABLE IF NOT EXISTS`.

mod bootstrap;
pub mod naming;
pub mod tables;

pub use bootstrap::apply_schema;
pub use naming::foreign_key_name;
pub use tables::{all_tables, TableDef};
