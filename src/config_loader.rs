use crate::config::SimulationConfig;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<SimulationConfig> {
    info!("Loading configuration from: {:?}", config_path);

    // Open the configuration file
    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    // Parse the YAML content
    let config: SimulationConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    // Validate the configuration
    config.validate()?;

    Ok(config)
}

/// CLI arguments that override YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub nodes: Option<usize>,
    pub area: Option<f64>,
    pub ants: Option<usize>,
    pub iterations: Option<usize>,
    pub rounds: Option<usize>,
    pub seed: Option<u64>,
}

/// Apply CLI overrides to a configuration
pub fn apply_cli_overrides(config: &mut SimulationConfig, overrides: &CliOverrides) -> Result<()> {
    if let Some(nodes) = overrides.nodes {
        info!("Overriding node count: {}", nodes);
        config.network.num_nodes = nodes;
    }

    if let Some(area) = overrides.area {
        info!("Overriding area size: {}", area);
        config.network.area_size = area;
    }

    if let Some(ants) = overrides.ants {
        info!("Overriding ant count: {}", ants);
        config.routing.n_ants = ants;
    }

    if let Some(iterations) = overrides.iterations {
        info!("Overriding iteration count: {}", iterations);
        config.routing.n_iterations = iterations;
    }

    if let Some(rounds) = overrides.rounds {
        info!("Overriding energy rounds: {}", rounds);
        config.energy.rounds = rounds;
    }

    if let Some(seed) = overrides.seed {
        info!("Overriding seed: {}", seed);
        config.general.seed = Some(seed);
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let yaml = r#"
general:
  seed: 11
network:
  num_nodes: 30
  area_size: 250.0
routing:
  n_ants: 10
  n_iterations: 20
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.general.seed, Some(11));
        assert_eq!(config.network.num_nodes, 30);
        assert_eq!(config.network.area_size, 250.0);
        assert_eq!(config.routing.n_iterations, 20);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let yaml = r#"
routing:
  decay: 1.5
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("decay"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/nonexistent/wsnsim.yaml")).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = SimulationConfig::default();
        let overrides = CliOverrides {
            nodes: Some(80),
            ants: Some(5),
            seed: Some(3),
            ..Default::default()
        };

        apply_cli_overrides(&mut config, &overrides).unwrap();
        assert_eq!(config.network.num_nodes, 80);
        assert_eq!(config.routing.n_ants, 5);
        assert_eq!(config.routing.n_iterations, 50);
        assert_eq!(config.general.seed, Some(3));
    }

    #[test]
    fn test_overrides_are_revalidated() {
        let mut config = SimulationConfig::default();
        config.routing.sink = Some(40);

        let overrides = CliOverrides {
            nodes: Some(10),
            ..Default::default()
        };
        assert!(apply_cli_overrides(&mut config, &overrides).is_err());
    }
}
