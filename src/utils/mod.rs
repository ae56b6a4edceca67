//! Shared utilities: parameter validation and seeded random streams.

pub mod rng;
pub mod validation;

pub use rng::{resolve_seed, stream_rng, RngStream};
pub use validation::{
    validate_count, validate_node_index, validate_non_negative, validate_positive,
    validate_unit_interval,
};
