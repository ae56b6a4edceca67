//! Error types for simulation operations.

use crate::config::ValidationError;

/// Errors raised by the simulation core
///
/// All variants describe invalid input detected before any state is
/// touched. Stochastic outcomes such as an ant that never reaches the sink
/// are results, not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Node index {index} is out of range for a network of {node_count} nodes")]
    NodeOutOfRange { index: usize, node_count: usize },

    #[error("Expected {expected} {what} entries, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
