//! Seed Format v0 schema
//!
//! ```yaml
//! schema_version: 0
//! restaurants:
//!   - { key: sushi, name: Sushi Place, price: 30 }
//! customers:
//!   - { key: jane, first_name: Jane, last_name: Doe }
//! reviews:
//!   - { restaurant: sushi, customer: jane, rating: 4 }
//! ```
//!
//! Keys are local to the file; the store assigns the real ids on import.

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub restaurants: Vec<SeedRestaurant>,

    #[serde(default)]
    pub customers: Vec<SeedCustomer>,

    #[serde(default)]
    pub reviews: Vec<SeedReview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRestaurant {
    /// File-local key referenced by reviews
    pub key: String,
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCustomer {
    pub key: String,
    pub first_name: String,
    pub last_name: String,
}

/// A review linking a seed restaurant and a seed customer by key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReview {
    pub restaurant: String,
    pub customer: String,
    pub rating: i64,
}
