//! Restoview Core - domain kernel for restaurant reviews
//!
//! Provides:
//! - Restaurant, Customer and Review models (plus unsaved drafts)
//! - Canonical error facility (`ExError`) and domain errors (`RestoError`)
//! - Structured logging facility and `log_op_*` macros
//! - Rendering of review sentences and lookup descriptions
//!
//! Persistence lives in `restoview-store`; nothing here touches SQLite.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;

// Used by the logging macros so callers need not depend on it directly
pub use restoview_core_types;

pub use errors::{ExError, ExErrorKind, RestoError, Result};
pub use model::{
    Customer, NewCustomer, NewRestaurant, NewReview, Restaurant, RestaurantCustomer, Review,
};
