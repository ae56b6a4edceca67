//! Random sensor field generation.
//!
//! Nodes are scattered uniformly over a square deployment area and joined
//! into a complete graph weighted by distance.

use log::{debug, info};
use rand::Rng;

use super::graph::Graph;
use super::types::Position;
use crate::error::{Result, SimError};
use crate::utils::validation::{validate_count, validate_positive};

/// Place `num_nodes` nodes uniformly at random in `[0, area_size)²`.
///
/// Coordinates are drawn node by node, x before y, so a seeded RNG always
/// yields the same field.
///
/// # Arguments
///
/// * `num_nodes` - Number of sensor nodes, at least 1
/// * `area_size` - Side length of the square area, finite and positive
/// * `rng` - Randomness source for node placement
///
/// # Returns
///
/// * One position per node, indexed by node id
pub fn generate_topology<R: Rng + ?Sized>(
    num_nodes: usize,
    area_size: f64,
    rng: &mut R,
) -> Result<Vec<Position>> {
    validate_count("num_nodes", num_nodes).map_err(SimError::InvalidConfiguration)?;
    validate_positive("area_size", area_size).map_err(SimError::InvalidConfiguration)?;

    let positions: Vec<Position> = (0..num_nodes)
        .map(|_| {
            let x = rng.gen_range(0.0..area_size);
            let y = rng.gen_range(0.0..area_size);
            Position::new(x, y)
        })
        .collect();

    info!("Generated {} nodes in a {} x {} area", num_nodes, area_size, area_size);
    Ok(positions)
}

/// Build the complete distance-weighted graph for a set of positions
pub fn build_graph(positions: &[Position]) -> Graph {
    let graph = Graph::from_positions(positions);
    debug!(
        "Built complete graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
