//! Seed importer orchestration

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::queries::customer_queries;
use crate::repo::{CustomerRepo, RestaurantRepo};
use crate::seed::format_v0::SeedV0;
use crate::seed::{compute_seed_digest, parse_seed_file, parse_seed_str};
use restoview_core::errors::RestoError;
use restoview_core::model::{Customer, NewCustomer, NewRestaurant};
use restoview_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;

/// What one seed import wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub digest: String,
    pub restaurants: usize,
    pub customers: usize,
    pub reviews: usize,
}

/// Import a seed file into the database
///
/// 1. Parses and validates the seed YAML
/// 2. Computes the seed digest
/// 3. Inserts restaurants and customers, mapping seed keys to assigned ids
/// 4. Adds each review through `add_review`, so associations are recorded
///
/// Everything happens in one transaction: a failure leaves the database
/// untouched.
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<SeedSummary> {
    let seed = parse_seed_file(path)?;
    import_parsed(&seed, conn)
}

/// Import a seed held in memory
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<SeedSummary> {
    let seed = parse_seed_str(content)?;
    import_parsed(&seed, conn)
}

fn import_parsed(seed: &SeedV0, conn: &mut Connection) -> Result<SeedSummary> {
    log_op_start!("seed_import");
    let start = std::time::Instant::now();

    let summary = import_parsed_impl(seed, conn).map_err(|e| {
        log_op_error!(
            "seed_import",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "seed_import",
        duration_ms = start.elapsed().as_millis() as u64,
        digest = summary.digest.as_str(),
        reviews = summary.reviews as u64
    );
    Ok(summary)
}

fn import_parsed_impl(seed: &SeedV0, conn: &mut Connection) -> Result<SeedSummary> {
    let digest = compute_seed_digest(seed)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let mut restaurant_ids: HashMap<&str, i64> = HashMap::new();
    for r in &seed.restaurants {
        let restaurant = RestaurantRepo::insert(&tx, &NewRestaurant::new(r.name.clone(), r.price))?;
        restaurant_ids.insert(r.key.as_str(), restaurant.id);
    }

    let mut customers: HashMap<&str, Customer> = HashMap::new();
    for c in &seed.customers {
        let customer = CustomerRepo::insert(
            &tx,
            &NewCustomer::new(c.first_name.clone(), c.last_name.clone()),
        )?;
        customers.insert(c.key.as_str(), customer);
    }

    for review in &seed.reviews {
        // Parser already checked references; a miss here is a bug
        let restaurant_id = *restaurant_ids.get(review.restaurant.as_str()).ok_or_else(|| {
            RestoError::Internal {
                message: format!("unresolved restaurant key {}", review.restaurant),
            }
        })?;
        let customer = customers.get(review.customer.as_str()).ok_or_else(|| {
            RestoError::Internal {
                message: format!("unresolved customer key {}", review.customer),
            }
        })?;

        customer_queries::add_review(&tx, customer, review.rating, restaurant_id)?;
    }

    tx.commit().map_err(from_rusqlite)?;

    Ok(SeedSummary {
        digest,
        restaurants: seed.restaurants.len(),
        customers: seed.customers.len(),
        reviews: seed.reviews.len(),
    })
}
