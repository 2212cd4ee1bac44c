//! Seed digest canonicalization
//!
//! The digest identifies seed content independent of the order entries
//! appear in the file.

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::seed::format_v0::SeedV0;
use restoview_core::errors::RestoError;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed {
    schema_version: u32,
    restaurants: Vec<(String, String, i64)>,
    customers: Vec<(String, String, String)>,
    reviews: Vec<(String, String, i64)>,
}

/// SHA256 hex digest of the canonicalized seed
pub fn compute_seed_digest(seed: &SeedV0) -> Result<String> {
    let canonical = canonicalize_seed(seed);

    let json = serde_json::to_string(&canonical).map_err(RestoError::from)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

fn canonicalize_seed(seed: &SeedV0) -> CanonicalSeed {
    let mut restaurants: Vec<_> = seed
        .restaurants
        .iter()
        .map(|r| (r.key.clone(), r.name.clone(), r.price))
        .collect();
    restaurants.sort();

    let mut customers: Vec<_> = seed
        .customers
        .iter()
        .map(|c| (c.key.clone(), c.first_name.clone(), c.last_name.clone()))
        .collect();
    customers.sort();

    let mut reviews: Vec<_> = seed
        .reviews
        .iter()
        .map(|r| (r.restaurant.clone(), r.customer.clone(), r.rating))
        .collect();
    reviews.sort();

    CanonicalSeed {
        schema_version: seed.schema_version,
        restaurants,
        customers,
        reviews,
    }
}
