use restoview_core::model::{Customer, NewCustomer, NewRestaurant, Restaurant};
use restoview_store::repo::{CustomerRepo, RestaurantRepo};
use rusqlite::Connection;

/// In-memory database with foreign keys on and the schema applied
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    let mut conn = restoview_store::db::open_in_memory().unwrap();
    restoview_store::schema::apply_schema(&mut conn).unwrap();
    conn
}

#[allow(dead_code)]
pub fn restaurant(conn: &Connection, name: &str, price: i64) -> Restaurant {
    RestaurantRepo::insert(conn, &NewRestaurant::new(name, price)).unwrap()
}

#[allow(dead_code)]
pub fn customer(conn: &Connection, first: &str, last: &str) -> Customer {
    CustomerRepo::insert(conn, &NewCustomer::new(first, last)).unwrap()
}
