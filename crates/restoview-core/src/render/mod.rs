//! Human-readable renderings of review data

pub mod review_render;

pub use review_render::{describe_customer, describe_restaurant, full_review};
