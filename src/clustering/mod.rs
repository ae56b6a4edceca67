//! Energy-aware clustering.
//!
//! Cluster heads are elected with the HEED-style heuristic in [`heed`].

pub mod heed;

pub use heed::{election_probabilities, select_cluster_heads, ClusterElection, ClusterSize};
