use serde::{Deserialize, Serialize};

use crate::utils::validation::{
    validate_count, validate_node_index, validate_non_negative, validate_positive,
    validate_unit_interval,
};

/// Default base probability for cluster head election
pub const DEFAULT_BASE_PROBABILITY: f64 = 0.05;
/// Default per-hop energy cost used by the transmission model
pub const DEFAULT_COST_PER_HOP: f64 = 0.01;
/// Default number of transmission rounds
pub const DEFAULT_ROUNDS: usize = 10;

/// Complete simulation configuration
///
/// Every section has defaults, so an empty YAML document describes the
/// standard 50-node scenario.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub general: GeneralConfig,
    pub network: NetworkConfig,
    pub clustering: ClusteringConfig,
    pub routing: RoutingConfig,
    pub energy: EnergyConfig,
}

impl SimulationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate network settings
        validate_count("num_nodes", self.network.num_nodes).map_err(ValidationError::InvalidNetwork)?;
        validate_positive("area_size", self.network.area_size).map_err(ValidationError::InvalidNetwork)?;
        validate_non_negative("initial_energy", self.network.initial_energy)
            .map_err(ValidationError::InvalidNetwork)?;

        // Validate clustering settings
        validate_unit_interval("base_probability", self.clustering.base_probability)
            .map_err(ValidationError::InvalidClustering)?;

        // Validate routing settings
        self.validate_routing().map_err(ValidationError::InvalidRouting)?;

        // Validate energy settings
        validate_count("rounds", self.energy.rounds).map_err(ValidationError::InvalidEnergy)?;
        validate_non_negative("cost_per_hop", self.energy.cost_per_hop)
            .map_err(ValidationError::InvalidEnergy)?;

        if let Some(level) = &self.general.log_level {
            if level.parse::<log::LevelFilter>().is_err() {
                return Err(ValidationError::InvalidGeneral(format!(
                    "unknown log_level '{}'",
                    level
                )));
            }
        }

        Ok(())
    }

    fn validate_routing(&self) -> Result<(), String> {
        let routing = &self.routing;
        validate_count("n_ants", routing.n_ants)?;
        validate_count("n_iterations", routing.n_iterations)?;
        validate_unit_interval("decay", routing.decay)?;
        validate_non_negative("alpha", routing.alpha)?;
        validate_non_negative("beta", routing.beta)?;

        let (source, sink) = self.endpoints();
        validate_node_index("source", source, self.network.num_nodes)?;
        validate_node_index("sink", sink, self.network.num_nodes)?;
        Ok(())
    }

    /// Route endpoints: the configured source (default node 0) and sink
    /// (default the last node)
    pub fn endpoints(&self) -> (usize, usize) {
        let sink = self
            .routing
            .sink
            .unwrap_or_else(|| self.network.num_nodes.saturating_sub(1));
        (self.routing.source, sink)
    }
}

/// General run settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Seed for all random streams; a fresh seed is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Sensor field settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub num_nodes: usize,
    /// Side length of the square deployment area
    pub area_size: f64,
    /// Residual energy every node starts with
    pub initial_energy: f64,
}

/// Cluster head election settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClusteringConfig {
    pub base_probability: f64,
}

/// Ant colony routing settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RoutingConfig {
    pub n_ants: usize,
    pub n_iterations: usize,
    /// Pheromone evaporation rate
    pub decay: f64,
    /// Pheromone influence exponent
    pub alpha: f64,
    /// Distance heuristic influence exponent
    pub beta: f64,
    pub source: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sink: Option<usize>,
    /// Allow paths that never reached the sink to become the best route
    pub accept_incomplete: bool,
}

/// Transmission energy model settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnergyConfig {
    pub rounds: usize,
    pub cost_per_hop: f64,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid clustering configuration: {0}")]
    InvalidClustering(String),
    #[error("Invalid routing configuration: {0}")]
    InvalidRouting(String),
    #[error("Invalid energy configuration: {0}")]
    InvalidEnergy(String),
}

/// Default implementations
impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            num_nodes: 50,
            area_size: 100.0,
            initial_energy: 1.0,
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            base_probability: DEFAULT_BASE_PROBABILITY,
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            n_ants: 20,
            n_iterations: 50,
            decay: 0.5,
            alpha: 1.0,
            beta: 2.0,
            source: 0,
            sink: None,
            accept_incomplete: false,
        }
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            cost_per_hop: DEFAULT_COST_PER_HOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: SimulationConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert!(config.validate().is_ok());

        assert_eq!(config.network.num_nodes, 50);
        assert_eq!(config.routing.n_ants, 20);
        assert_eq!(config.routing.n_iterations, 50);
        assert_eq!(config.routing.decay, 0.5);
        assert_eq!(config.endpoints(), (0, 49));
    }

    #[test]
    fn test_partial_config_parsing() {
        let yaml = r#"
general:
  seed: 7
  log_level: debug
network:
  num_nodes: 12
routing:
  n_ants: 5
  sink: 3
energy:
  rounds: 4
"#;

        let config: SimulationConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.general.seed, Some(7));
        assert_eq!(config.network.num_nodes, 12);
        assert_eq!(config.network.area_size, 100.0);
        assert_eq!(config.routing.n_ants, 5);
        assert_eq!(config.routing.n_iterations, 50);
        assert_eq!(config.endpoints(), (0, 3));
        assert_eq!(config.energy.rounds, 4);
        assert_eq!(config.energy.cost_per_hop, DEFAULT_COST_PER_HOP);
    }

    #[test]
    fn test_validation_errors() {
        // Zero nodes
        let mut config = SimulationConfig::default();
        config.network.num_nodes = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidNetwork(_))));

        // Non-positive area
        let mut config = SimulationConfig::default();
        config.network.area_size = 0.0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidNetwork(_))));

        // Probability out of range
        let mut config = SimulationConfig::default();
        config.clustering.base_probability = 1.2;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidClustering(_))));

        // Decay out of range
        let mut config = SimulationConfig::default();
        config.routing.decay = -0.1;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidRouting(_))));

        // No ants
        let mut config = SimulationConfig::default();
        config.routing.n_ants = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidRouting(_))));

        // Sink outside the network
        let mut config = SimulationConfig::default();
        config.routing.sink = Some(50);
        assert!(matches!(config.validate(), Err(ValidationError::InvalidRouting(_))));

        // Zero rounds
        let mut config = SimulationConfig::default();
        config.energy.rounds = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidEnergy(_))));

        // Unknown log level
        let mut config = SimulationConfig::default();
        config.general.log_level = Some("loud".to_string());
        assert!(matches!(config.validate(), Err(ValidationError::InvalidGeneral(_))));
    }

    #[test]
    fn test_boundary_values_are_accepted() {
        let mut config = SimulationConfig::default();
        config.network.num_nodes = 1;
        config.clustering.base_probability = 0.0;
        config.routing.decay = 1.0;
        config.network.initial_energy = 0.0;
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoints(), (0, 0));
    }
}
