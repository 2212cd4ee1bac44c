pub mod customer;
pub mod restaurant;
pub mod review;

pub use customer::{Customer, NewCustomer};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantCustomer};
pub use review::{NewReview, Review};
