//! Ant colony route search.
//!
//! Every iteration releases `n_ants` ants from the source. Each ant walks
//! to an unvisited node chosen with probability proportional to
//!
//! ```text
//! τ[current][j]^alpha * (1 / d(current, j))^beta
//! ```
//!
//! until it reaches the sink or runs out of unvisited nodes. After all ants
//! have walked, trails evaporate by `decay` and each ant deposits
//! `1 / cost` on the directed edges it used. The cheapest route seen across
//! the whole run is returned.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pheromone::PheromoneMatrix;
use super::sampling::sample_index;
use crate::config::RoutingConfig;
use crate::error::{Result, SimError};
use crate::topology::Graph;
use crate::utils::validation::{validate_count, validate_non_negative, validate_unit_interval};

/// Distance substituted for zero-length edges in the heuristic term
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// Initial pheromone level on every directed edge
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Colony parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoParams {
    pub n_ants: usize,
    pub n_iterations: usize,
    /// Evaporation rate within `[0, 1]`
    pub decay: f64,
    /// Pheromone influence exponent
    pub alpha: f64,
    /// Distance heuristic influence exponent
    pub beta: f64,
    /// Let a path that never reached the sink become the best route
    pub accept_incomplete: bool,
}

impl AcoParams {
    pub fn new(n_ants: usize, n_iterations: usize, decay: f64) -> Self {
        Self {
            n_ants,
            n_iterations,
            decay,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_count("n_ants", self.n_ants)
            .and_then(|_| validate_count("n_iterations", self.n_iterations))
            .and_then(|_| validate_unit_interval("decay", self.decay))
            .and_then(|_| validate_non_negative("alpha", self.alpha))
            .and_then(|_| validate_non_negative("beta", self.beta))
            .map_err(SimError::InvalidConfiguration)
    }
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            n_ants: 20,
            n_iterations: 50,
            decay: 0.5,
            alpha: 1.0,
            beta: 2.0,
            accept_incomplete: false,
        }
    }
}

impl From<&RoutingConfig> for AcoParams {
    fn from(config: &RoutingConfig) -> Self {
        Self {
            n_ants: config.n_ants,
            n_iterations: config.n_iterations,
            decay: config.decay,
            alpha: config.alpha,
            beta: config.beta,
            accept_incomplete: config.accept_incomplete,
        }
    }
}

/// A walked path and its total edge weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<usize>,
    pub cost: f64,
    /// False when the ant ran out of unvisited nodes before the sink
    pub reached_sink: bool,
}

impl Route {
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a full colony run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOutcome {
    /// Cheapest eligible route, if any ant produced one
    pub best: Option<Route>,
    /// Best cost known at the end of each iteration
    pub iteration_best: Vec<Option<f64>>,
}

/// Pheromone-guided router over a complete distance graph
///
/// The router owns its pheromone matrix and RNG for the duration of one
/// run; create a fresh router for an independent run.
pub struct AntColonyRouter<'g, R> {
    graph: &'g Graph,
    params: AcoParams,
    pheromone: PheromoneMatrix,
    rng: R,
}

impl<'g, R: Rng> AntColonyRouter<'g, R> {
    pub fn new(graph: &'g Graph, params: AcoParams, rng: R) -> Result<Self> {
        params.validate()?;
        if graph.node_count() == 0 {
            return Err(SimError::InvalidConfiguration(
                "cannot route over an empty graph".to_string(),
            ));
        }

        Ok(Self {
            graph,
            pheromone: PheromoneMatrix::new(graph.node_count(), INITIAL_PHEROMONE),
            params,
            rng,
        })
    }

    pub fn params(&self) -> &AcoParams {
        &self.params
    }

    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Walk a single ant from `start` towards `end` using current trails
    pub fn build_path(&mut self, start: usize, end: usize) -> Result<Vec<usize>> {
        self.check_endpoints(start, end)?;
        Ok(self.walk(start, end))
    }

    /// Run all iterations and return the cheapest route found
    pub fn run(&mut self, start: usize, end: usize) -> Result<RouteOutcome> {
        self.check_endpoints(start, end)?;
        info!(
            "Running ant colony from {} to {} ({} ants x {} iterations, decay {})",
            start, end, self.params.n_ants, self.params.n_iterations, self.params.decay
        );

        let mut best: Option<Route> = None;
        let mut iteration_best = Vec::with_capacity(self.params.n_iterations);
        let mut incomplete = 0usize;

        for iteration in 0..self.params.n_iterations {
            let mut walks = Vec::with_capacity(self.params.n_ants);

            for _ in 0..self.params.n_ants {
                let path = self.walk(start, end);
                let cost = self.graph.path_cost(&path);
                let reached_sink = path.last() == Some(&end);
                if !reached_sink {
                    incomplete += 1;
                }

                let eligible = reached_sink || self.params.accept_incomplete;
                let best_cost = best.as_ref().map_or(f64::INFINITY, |route| route.cost);
                if eligible && cost.is_finite() && cost < best_cost {
                    best = Some(Route {
                        path: path.clone(),
                        cost,
                        reached_sink,
                    });
                }

                walks.push((path, cost));
            }

            self.pheromone.evaporate(self.params.decay);
            for (path, cost) in &walks {
                self.pheromone.reinforce_path(path, *cost);
            }

            let best_cost = best.as_ref().map(|route| route.cost);
            debug!("Iteration {}: best cost {:?}", iteration + 1, best_cost);
            iteration_best.push(best_cost);
        }

        if incomplete > 0 {
            warn!("{} ant walks ended before reaching node {}", incomplete, end);
        }
        match &best {
            Some(route) => info!(
                "Best route has {} hops with cost {:.2}",
                route.hops(),
                route.cost
            ),
            None => warn!("No eligible route from {} to {} was found", start, end),
        }

        Ok(RouteOutcome {
            best,
            iteration_best,
        })
    }

    fn check_endpoints(&self, start: usize, end: usize) -> Result<()> {
        let node_count = self.graph.node_count();
        for index in [start, end] {
            if index >= node_count {
                return Err(SimError::NodeOutOfRange { index, node_count });
            }
        }
        Ok(())
    }

    fn walk(&mut self, start: usize, end: usize) -> Vec<usize> {
        let node_count = self.graph.node_count();
        let mut path = vec![start];
        let mut visited = vec![false; node_count];
        visited[start] = true;

        let mut current = start;
        let mut candidates = Vec::with_capacity(node_count);
        let mut weights = Vec::with_capacity(node_count);

        while current != end {
            candidates.clear();
            candidates.extend((0..node_count).filter(|&node| !visited[node]));
            if candidates.is_empty() {
                break;
            }

            weights.clear();
            for &candidate in &candidates {
                weights.push(self.desirability(current, candidate));
            }

            let next = candidates[sample_index(&weights, &mut self.rng)];
            path.push(next);
            visited[next] = true;
            current = next;
        }

        path
    }

    fn desirability(&self, from: usize, to: usize) -> f64 {
        let mut distance = self.graph.weight(from, to);
        if distance == 0.0 {
            distance = DISTANCE_EPSILON;
        }
        let trail = self.pheromone.get(from, to).powf(self.params.alpha);
        trail * (1.0 / distance).powf(self.params.beta)
    }
}

/// Run a fresh colony over `graph` from `start` to `end`
pub fn run_ant_colony<R: Rng>(
    graph: &Graph,
    params: &AcoParams,
    start: usize,
    end: usize,
    rng: R,
) -> Result<RouteOutcome> {
    AntColonyRouter::new(graph, params.clone(), rng)?.run(start, end)
}
