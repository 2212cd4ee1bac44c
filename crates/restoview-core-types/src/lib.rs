//! Core types shared across Restoview crates
//!
//! - **Correlation**: `RequestId` stamped on every CLI invocation
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
