//! Seed parser with validation
//!
//! Parses YAML and checks schema version, key uniqueness and that every
//! review refers to a restaurant and customer declared in the same file.

#![allow(clippy::result_large_err)]

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut restaurant_keys = HashSet::new();
    for restaurant in &seed.restaurants {
        if !restaurant_keys.insert(restaurant.key.as_str()) {
            return Err(seed_validation(&format!(
                "Duplicate restaurant key: {}",
                restaurant.key
            )));
        }
    }

    let mut customer_keys = HashSet::new();
    for customer in &seed.customers {
        if !customer_keys.insert(customer.key.as_str()) {
            return Err(seed_validation(&format!(
                "Duplicate customer key: {}",
                customer.key
            )));
        }
    }

    for (i, review) in seed.reviews.iter().enumerate() {
        if !restaurant_keys.contains(review.restaurant.as_str()) {
            return Err(seed_validation(&format!(
                "Review {} references unknown restaurant key: {}",
                i, review.restaurant
            )));
        }
        if !customer_keys.contains(review.customer.as_str()) {
            return Err(seed_validation(&format!(
                "Review {} references unknown customer key: {}",
                i, review.customer
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use restoview_core::errors::ExErrorKind;

    #[test]
    fn test_empty_sections_default() {
        let seed = parse_seed_str("schema_version: 0\n").unwrap();
        assert!(seed.restaurants.is_empty());
        assert!(seed.customers.is_empty());
        assert!(seed.reviews.is_empty());
    }

    #[test]
    fn test_wrong_schema_version_rejected() {
        let err = parse_seed_str("schema_version: 1\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("schema_version"));
    }

    #[test]
    fn test_duplicate_restaurant_key_rejected() {
        let yaml = r#"
schema_version: 0
restaurants:
  - { key: a, name: A, price: 1 }
  - { key: a, name: B, price: 2 }
"#;
        let err = parse_seed_str(yaml).unwrap_err();
        assert!(err.message().contains("Duplicate restaurant key: a"));
    }
}
