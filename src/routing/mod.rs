//! Multi-hop route search.
//!
//! This module contains the ant colony router, its pheromone matrix and
//! the roulette-wheel sampler ants use to pick their next hop.

pub mod ant_colony;
pub mod pheromone;
pub mod sampling;

// Re-export key types and functions for easier access
pub use ant_colony::{run_ant_colony, AcoParams, AntColonyRouter, Route, RouteOutcome};
pub use pheromone::PheromoneMatrix;
pub use sampling::sample_index;
