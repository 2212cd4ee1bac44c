//! Repository layer: row-level CRUD for each table
//!
//! Every function takes the caller's `&Connection`; pass a `Transaction`
//! (it derefs to `Connection`) to group writes atomically.

pub mod association_repo;
pub mod customer_repo;
pub mod restaurant_repo;
pub mod review_repo;

pub use association_repo::AssociationRepo;
pub use customer_repo::CustomerRepo;
pub use restaurant_repo::RestaurantRepo;
pub use review_repo::ReviewRepo;
