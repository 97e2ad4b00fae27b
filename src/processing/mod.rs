//! Subnet partitioning logic.
//!
//! - [`validate`] - policy bounds check
//! - [`partition`] - chained layer / zone carve-out

mod partition;
mod validate;

// Re-export public functions
pub use partition::{partition, zone_modifier};
pub use validate::check_parameters;
