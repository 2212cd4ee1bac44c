use serde::{Deserialize, Serialize};
use std::fmt;

/// A restaurant row
///
/// Has many reviews and is linked many-to-many with customers through the
/// `restaurant_customers` association table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Store-assigned identity
    pub id: i64,

    pub name: String,

    /// Price level; "fanciest" means the highest value here
    pub price: i64,
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Restaurant = {}, price= {})", self.name, self.price)
    }
}

/// A restaurant that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub price: i64,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Attach the id the store assigned on insert
    pub fn with_id(self, id: i64) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

/// One row of the `restaurant_customers` association table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantCustomer {
    pub restaurant_id: i64,
    pub customer_id: i64,
}
