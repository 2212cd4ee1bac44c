//! Subcommand implementations and the helpers they share

pub mod customer;
pub mod init;
pub mod restaurant;
pub mod review;
pub mod seed;

use restoview_core::errors::{ExError, RestoError};
use restoview_core::model::{Customer, Restaurant};
use restoview_store::repo::{CustomerRepo, RestaurantRepo};
use restoview_store::{db, schema, StoreConfig};
use rusqlite::Connection;
use serde::Serialize;
use std::fmt::Display;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Settings shared by every subcommand
pub struct Context {
    pub config: StoreConfig,
    pub json: bool,
}

impl Context {
    /// Open the configured store and make sure the tables exist
    pub fn open(&self) -> Result<Connection, ExError> {
        let mut conn = db::open_with_config(&self.config)?;
        schema::apply_schema(&mut conn)?;
        Ok(conn)
    }

    /// Print each item on its own line, or the whole list as JSON
    pub fn print_all<T: Serialize + Display>(&self, items: &[T]) -> CmdResult {
        if self.json {
            println!("{}", serde_json::to_string_pretty(items)?);
        } else {
            for item in items {
                println!("{}", item);
            }
        }
        Ok(())
    }

    /// Print one value, or `JSON null` / `none_message` when absent
    pub fn print_one<T: Serialize + Display>(&self, item: Option<&T>, none_message: &str) -> CmdResult {
        match (self.json, item) {
            (true, item) => println!("{}", serde_json::to_string_pretty(&item)?),
            (false, Some(item)) => println!("{}", item),
            (false, None) => println!("{}", none_message),
        }
        Ok(())
    }
}

pub fn require_restaurant(conn: &Connection, restaurant_id: i64) -> Result<Restaurant, ExError> {
    RestaurantRepo::get(conn, restaurant_id)?
        .ok_or_else(|| RestoError::RestaurantNotFound { restaurant_id }.into())
}

pub fn require_customer(conn: &Connection, customer_id: i64) -> Result<Customer, ExError> {
    CustomerRepo::get(conn, customer_id)?
        .ok_or_else(|| RestoError::CustomerNotFound { customer_id }.into())
}
