//! Restoview Store - SQLite persistence for restaurants, customers and reviews
//!
//! Provides:
//! - Connection opening and pragma configuration (`db`)
//! - Schema declared in Rust with named foreign keys, created idempotently (`schema`)
//! - Row-level CRUD per table (`repo`)
//! - Relationship and aggregate queries (`queries`)
//! - YAML seed import (`seed`)
//!
//! Nothing here holds a global connection. Callers own the `Connection`
//! and decide where transactions begin and end.

pub mod db;
pub mod errors;
pub mod queries;
pub mod repo;
pub mod schema;
pub mod seed;

pub use db::StoreConfig;
pub use errors::Result;
