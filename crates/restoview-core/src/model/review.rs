use serde::{Deserialize, Serialize};
use std::fmt;

/// A review row: the only link carrying a rating between one customer and
/// one restaurant.
///
/// `rating` has no enforced bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: i64,
    pub restaurant_id: i64,
    pub customer_id: i64,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(rating = {}, restaurant_id = {}, customer_id = {})",
            self.rating, self.restaurant_id, self.customer_id
        )
    }
}

/// A review that has not been persisted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub rating: i64,
    pub restaurant_id: i64,
    pub customer_id: i64,
}

impl NewReview {
    pub fn new(rating: i64, restaurant_id: i64, customer_id: i64) -> Self {
        Self {
            rating,
            restaurant_id,
            customer_id,
        }
    }

    pub fn with_id(self, id: i64) -> Review {
        Review {
            id,
            rating: self.rating,
            restaurant_id: self.restaurant_id,
            customer_id: self.customer_id,
        }
    }
}
