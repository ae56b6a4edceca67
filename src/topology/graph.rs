//! Complete distance-weighted graph over the sensor nodes.
//!
//! Every pair of nodes is connected; the weight is the Euclidean distance
//! between their positions. Weights live in a dense row-major matrix since
//! the graph is complete and the router reads whole rows at every step.

use super::types::{Edge, Position};

/// Dense symmetric distance matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    node_count: usize,
    weights: Vec<f64>,
}

impl Graph {
    /// Build the complete graph for the given positions
    pub fn from_positions(positions: &[Position]) -> Self {
        let node_count = positions.len();
        let mut weights = vec![0.0; node_count * node_count];

        for i in 0..node_count {
            for j in (i + 1)..node_count {
                let dist = positions[i].distance_to(&positions[j]);
                weights[i * node_count + j] = dist;
                weights[j * node_count + i] = dist;
            }
        }

        Self { node_count, weights }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges, `N(N-1)/2`
    pub fn edge_count(&self) -> usize {
        self.node_count * self.node_count.saturating_sub(1) / 2
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.node_count
    }

    /// Edge weight between two nodes
    ///
    /// # Panics
    ///
    /// Panics if either index is not a node of the graph.
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.node_count && j < self.node_count,
            "edge ({}, {}) outside graph of {} nodes",
            i,
            j,
            self.node_count
        );
        self.weights[i * self.node_count + j]
    }

    /// Iterate the unordered edge set, each pair once with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.node_count).flat_map(move |a| {
            ((a + 1)..self.node_count).map(move |b| Edge {
                a,
                b,
                weight: self.weights[a * self.node_count + b],
            })
        })
    }

    /// Sum of edge weights along consecutive path steps
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|step| self.weight(step[0], step[1])).sum()
    }
}
