//! # WSNSim - HEED clustering and ant colony routing for sensor networks
//!
//! This library simulates energy-aware multi-hop routing in a wireless
//! sensor network. A HEED-style heuristic elects cluster heads weighted by
//! residual energy, and an ant colony searches the distance-weighted graph
//! for a cheap route from a source node to the sink.
//!
//! ## Overview
//!
//! A run places nodes at random in a square field, builds the complete
//! graph of pairwise distances, elects cluster heads, searches for a route
//! and finally drains energy along that route for a number of rounds. Each
//! step returns plain data (positions, cluster assignment, path, cost,
//! energy trace) for a presentation layer to display.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: Type-safe configuration structures and validation
//! - `config_loader`: YAML loading and command-line overrides
//! - `topology`: Node placement and the complete distance graph
//! - `clustering`: HEED-style cluster head election
//! - `routing`: Ant colony route search and pheromone trails
//! - `energy`: Flat per-hop transmission energy model
//! - `orchestrator`: One complete simulation run
//! - `report`: JSON and text report generation
//! - `utils`: Parameter validation and seeded random streams
//!
//! ## Example Usage
//!
//! ```rust
//! use wsnsim::config::SimulationConfig;
//! use wsnsim::orchestrator::run_simulation;
//!
//! let mut config = SimulationConfig::default();
//! config.general.seed = Some(42);
//! config.network.num_nodes = 20;
//! config.routing.n_iterations = 10;
//!
//! let report = run_simulation(&config)?;
//! assert_eq!(report.positions.len(), 20);
//! assert_eq!(report.energy.trace.len(), 10);
//! # Ok::<(), wsnsim::error::SimError>(())
//! ```
//!
//! The components can also be driven one at a time:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wsnsim::clustering::select_cluster_heads;
//! use wsnsim::energy::simulate_energy;
//! use wsnsim::routing::{run_ant_colony, AcoParams};
//! use wsnsim::topology::{build_graph, generate_topology};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let positions = generate_topology(30, 100.0, &mut rng)?;
//! let mut energy = vec![1.0; positions.len()];
//!
//! let election = select_cluster_heads(&positions, &energy, 0.05, &mut rng)?;
//! assert!(!election.heads.is_empty());
//!
//! let graph = build_graph(&positions);
//! let outcome = run_ant_colony(&graph, &AcoParams::new(10, 20, 0.5), 0, 29, &mut rng)?;
//! let route = outcome.best.expect("complete graphs always yield a route");
//!
//! let trace = simulate_energy(&mut energy, &route.path, 10, 0.01)?;
//! assert_eq!(trace.len(), 10);
//! # Ok::<(), wsnsim::error::SimError>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```yaml
//! general:
//!   seed: 42
//! network:
//!   num_nodes: 50
//!   area_size: 100.0
//! routing:
//!   n_ants: 20
//!   n_iterations: 50
//!   decay: 0.5
//! ```
//!
//! ## Error Handling
//!
//! Simulation operations return [`error::SimError`]; configuration
//! problems surface as [`config::ValidationError`]. File loading and report
//! writing use `color_eyre` for error reporting with context.

pub mod config;
pub mod config_loader;
pub mod error;

pub mod topology;
pub mod clustering;
pub mod routing;
pub mod energy;

pub mod orchestrator;
pub mod report;
pub mod utils;
