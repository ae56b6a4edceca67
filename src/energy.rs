//! Transmission energy model.
//!
//! Every round, each node on the active route pays a flat cost of
//! `cost_per_hop * path.len()`. Residual energy is floored at zero and the
//! network-wide mean is sampled after each round.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::utils::validation::validate_non_negative;

/// Residual energy of every node in the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyState {
    levels: Vec<f64>,
}

impl EnergyState {
    /// Every node starts with the same charge
    pub fn uniform(node_count: usize, initial: f64) -> Self {
        Self {
            levels: vec![initial; node_count],
        }
    }

    pub fn from_levels(levels: Vec<f64>) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn levels_mut(&mut self) -> &mut [f64] {
        &mut self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Mean residual energy over all nodes
    pub fn mean(&self) -> f64 {
        mean(&self.levels)
    }

    /// Nodes with no energy left
    pub fn depleted_count(&self) -> usize {
        self.levels.iter().filter(|&&e| e <= 0.0).count()
    }
}

/// Mean residual energy sampled after each round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyTrace {
    samples: Vec<f64>,
}

impl EnergyTrace {
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean energy after the last round
    pub fn final_mean(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Drain energy along `path` for `rounds` rounds.
///
/// # Arguments
///
/// * `energy` - Residual energy per node, updated in place
/// * `path` - Route whose nodes pay the transmission cost
/// * `rounds` - Number of rounds to simulate
/// * `cost_per_hop` - Energy per route node per round, scaled by route length
///
/// # Returns
///
/// * Exactly `rounds` mean-energy samples
///
/// A node listed more than once in `path` is charged once per round.
/// Invalid input is rejected before any energy is touched.
pub fn simulate_energy(
    energy: &mut [f64],
    path: &[usize],
    rounds: usize,
    cost_per_hop: f64,
) -> Result<EnergyTrace> {
    if energy.is_empty() {
        return Err(SimError::InvalidConfiguration(
            "energy state must cover at least one node".to_string(),
        ));
    }
    validate_non_negative("cost_per_hop", cost_per_hop).map_err(SimError::InvalidConfiguration)?;
    if let Some(&index) = path.iter().find(|&&node| node >= energy.len()) {
        return Err(SimError::NodeOutOfRange {
            index,
            node_count: energy.len(),
        });
    }

    let mut on_path = vec![false; energy.len()];
    for &node in path {
        on_path[node] = true;
    }

    let cost = cost_per_hop * path.len() as f64;
    let mut samples = Vec::with_capacity(rounds);

    for round in 0..rounds {
        for (level, _) in energy.iter_mut().zip(&on_path).filter(|(_, &active)| active) {
            *level = (*level - cost).max(0.0);
        }
        let avg = mean(energy);
        debug!("Round {}: mean residual energy {:.4}", round + 1, avg);
        samples.push(avg);
    }

    info!(
        "Simulated {} rounds over a {}-node route, cost {:.3} per node per round",
        rounds,
        path.len(),
        cost
    );
    Ok(EnergyTrace { samples })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
