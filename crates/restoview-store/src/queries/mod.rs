//! Relationship and aggregate queries
//!
//! One module per entity, mirroring the operations each entity exposes:
//! - `restaurant_queries`: reviews, reviewing customers, review sentences, fanciest
//! - `customer_queries`: ratings, reviewed restaurants, favorite, add/delete reviews
//! - `review_queries`: resolve customer/restaurant, full review sentence

pub mod customer_queries;
pub mod restaurant_queries;
pub mod review_queries;
