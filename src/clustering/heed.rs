//! HEED-style cluster head election.
//!
//! Each node volunteers as a cluster head with a probability that grows
//! with its residual energy relative to the best-charged node:
//!
//! ```text
//! prob[i] = p + (energy[i] / max(energy)) * (1 - p)
//! ```
//!
//! A single uniform draw per node decides the election. If nobody is
//! elected, one node is picked uniformly at random so that at least one
//! cluster always exists. Every node then joins its nearest head.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::topology::Position;
use crate::utils::validation::validate_unit_interval;

/// Outcome of one election pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterElection {
    /// Elected head indices in ascending order
    pub heads: Vec<usize>,
    /// Head index for every node, indexed by node id
    pub assignment: Vec<usize>,
}

/// Member count of one cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSize {
    pub head: usize,
    pub members: usize,
}

impl ClusterElection {
    pub fn is_head(&self, node: usize) -> bool {
        self.heads.binary_search(&node).is_ok()
    }

    /// Nodes assigned to the given head, heads included
    pub fn members_of(&self, head: usize) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, &h)| h == head)
            .map(|(node, _)| node)
            .collect()
    }

    /// Member counts per head, in head order
    pub fn cluster_sizes(&self) -> Vec<ClusterSize> {
        self.heads
            .iter()
            .map(|&head| ClusterSize {
                head,
                members: self.assignment.iter().filter(|&&h| h == head).count(),
            })
            .collect()
    }
}

/// Per-node election probabilities
///
/// A non-positive maximum energy (all nodes drained) leaves every node at
/// the base probability `p`.
pub fn election_probabilities(energy: &[f64], p: f64) -> Vec<f64> {
    let max_energy = energy.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max_energy <= 0.0 || !max_energy.is_finite() {
        return vec![p; energy.len()];
    }

    energy
        .iter()
        .map(|&e| p + (e / max_energy) * (1.0 - p))
        .collect()
}

/// Elect cluster heads and assign every node to its nearest head.
///
/// # Arguments
///
/// * `positions` - Node positions, indexed by node id
/// * `energy` - Residual energy per node, same length as `positions`
/// * `p` - Base election probability within `[0, 1]`
/// * `rng` - Randomness source for election draws
///
/// # Returns
///
/// * A non-empty head set and a full per-node assignment
pub fn select_cluster_heads<R: Rng + ?Sized>(
    positions: &[Position],
    energy: &[f64],
    p: f64,
    rng: &mut R,
) -> Result<ClusterElection> {
    validate_unit_interval("base_probability", p).map_err(SimError::InvalidConfiguration)?;
    if positions.is_empty() {
        return Err(SimError::InvalidConfiguration(
            "cluster election requires at least one node".to_string(),
        ));
    }
    if energy.len() != positions.len() {
        return Err(SimError::LengthMismatch {
            what: "energy",
            expected: positions.len(),
            actual: energy.len(),
        });
    }

    if energy.iter().all(|&e| e <= 0.0) {
        warn!("All nodes report zero residual energy, electing with base probability {}", p);
    }
    let prob = election_probabilities(energy, p);

    let mut heads: Vec<usize> = prob
        .iter()
        .enumerate()
        .filter(|(_, &chance)| rng.gen::<f64>() < chance)
        .map(|(node, _)| node)
        .collect();

    if heads.is_empty() {
        let forced = rng.gen_range(0..positions.len());
        warn!("No node volunteered as cluster head, forcing node {}", forced);
        heads.push(forced);
    }

    let assignment: Vec<usize> = positions
        .iter()
        .map(|position| nearest_head(position, positions, &heads))
        .collect();

    info!("Elected {} cluster heads among {} nodes", heads.len(), positions.len());
    debug!("Cluster heads: {:?}", heads);

    Ok(ClusterElection { heads, assignment })
}

/// Closest head to a position; ties keep the first head in `heads` order
fn nearest_head(position: &Position, positions: &[Position], heads: &[usize]) -> usize {
    let mut best = heads[0];
    let mut best_dist = position.distance_to(&positions[best]);

    for &head in &heads[1..] {
        let dist = position.distance_to(&positions[head]);
        if dist < best_dist {
            best = head;
            best_dist = dist;
        }
    }

    best
}
