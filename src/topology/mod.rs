//! Network topology module.
//!
//! This module contains node placement and the complete distance graph
//! that routing runs over.

pub mod types;
pub mod graph;
pub mod generation;

// Re-export key types and functions for easier access
pub use types::{Edge, Position};
pub use graph::Graph;
pub use generation::{build_graph, generate_topology};
