#[cfg(test)]
mod simulation_tests {
    use std::io::Write;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::{tempdir, NamedTempFile};

    use wsnsim::clustering::select_cluster_heads;
    use wsnsim::config::SimulationConfig;
    use wsnsim::config_loader::load_config;
    use wsnsim::energy::{simulate_energy, EnergyState};
    use wsnsim::orchestrator::run_simulation;
    use wsnsim::report::{generate_json_report, generate_text_report, render_text_report};
    use wsnsim::routing::{run_ant_colony, AcoParams, AntColonyRouter};
    use wsnsim::topology::{build_graph, generate_topology, Position};

    /// Positions, graph edge count and symmetry for a range of sizes
    #[test]
    fn test_topology_properties() {
        let mut rng = StdRng::seed_from_u64(100);

        for &count in &[1usize, 2, 7, 50] {
            let positions = generate_topology(count, 100.0, &mut rng).unwrap();
            assert_eq!(positions.len(), count);
            assert!(positions.iter().all(|p| p.is_within(100.0)));

            let graph = build_graph(&positions);
            assert_eq!(graph.edge_count(), count * (count - 1) / 2);
            assert_eq!(graph.edges().count(), graph.edge_count());

            for edge in graph.edges() {
                assert_eq!(graph.weight(edge.a, edge.b), graph.weight(edge.b, edge.a));
                assert!(edge.weight >= 0.0);
            }
        }
    }

    /// Election always yields heads and every node joins one of them
    #[test]
    fn test_election_properties() {
        let mut rng = StdRng::seed_from_u64(200);
        let positions = generate_topology(60, 100.0, &mut rng).unwrap();

        for energy in [vec![1.0; 60], vec![0.0; 60], (0..60).map(|i| i as f64 / 60.0).collect()] {
            for &p in &[0.0, 0.05, 0.5, 1.0] {
                let election = select_cluster_heads(&positions, &energy, p, &mut rng).unwrap();
                assert!(!election.heads.is_empty());
                assert!(election.assignment.iter().all(|h| election.heads.contains(h)));
                for &head in &election.heads {
                    assert_eq!(election.assignment[head], head);
                }
            }
        }
    }

    /// Cheapest route on a line of nodes is the direct hop sequence
    #[test]
    fn test_colony_prefers_short_hops() {
        let positions: Vec<Position> = (0..5).map(|i| Position::new(i as f64, 0.0)).collect();
        let graph = build_graph(&positions);

        let outcome = run_ant_colony(
            &graph,
            &AcoParams::new(20, 30, 0.5),
            0,
            4,
            StdRng::seed_from_u64(300),
        )
        .unwrap();

        // Any simple path from 0 to 4 on a line costs at least 4
        let best = outcome.best.unwrap();
        assert!((best.cost - 4.0).abs() < 1e-9, "best route {:?}", best);
    }

    /// Each router starts from fresh trails
    #[test]
    fn test_router_owns_its_pheromone() {
        let positions = generate_topology(6, 50.0, &mut StdRng::seed_from_u64(400)).unwrap();
        let graph = build_graph(&positions);

        let mut first =
            AntColonyRouter::new(&graph, AcoParams::new(3, 4, 0.2), StdRng::seed_from_u64(1)).unwrap();
        first.run(0, 5).unwrap();

        let second =
            AntColonyRouter::new(&graph, AcoParams::new(3, 4, 0.2), StdRng::seed_from_u64(1)).unwrap();
        assert!(second.pheromone().levels().iter().all(|&l| l == 1.0));
        assert_ne!(first.pheromone(), second.pheromone());
    }

    /// Energy drained along a routed path
    #[test]
    fn test_energy_along_route() {
        let positions = generate_topology(25, 100.0, &mut StdRng::seed_from_u64(500)).unwrap();
        let graph = build_graph(&positions);
        let outcome =
            run_ant_colony(&graph, &AcoParams::default(), 0, 24, StdRng::seed_from_u64(501)).unwrap();
        let route = outcome.best.unwrap();

        let mut energy = EnergyState::uniform(25, 1.0);
        let trace = simulate_energy(energy.levels_mut(), &route.path, 10, 0.01).unwrap();

        assert_eq!(trace.len(), 10);
        assert!(trace.samples().windows(2).all(|w| w[1] <= w[0]));
        assert!(trace.samples().iter().all(|&s| s >= 0.0));
        for (node, &level) in energy.levels().iter().enumerate() {
            if route.path.contains(&node) {
                assert!(level < 1.0);
            } else {
                assert_eq!(level, 1.0);
            }
        }
    }

    /// End-to-end run from a YAML file to written reports
    #[test]
    fn test_config_to_reports() {
        let yaml = r#"
general:
  seed: 77
network:
  num_nodes: 20
  area_size: 150.0
routing:
  n_ants: 6
  n_iterations: 12
  sink: 10
energy:
  rounds: 5
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();
        let config = load_config(temp_file.path()).unwrap();

        let report = run_simulation(&config).unwrap();
        assert_eq!(report.routing.source, 0);
        assert_eq!(report.routing.sink, 10);
        assert_eq!(report.energy.trace.len(), 5);

        let dir = tempdir().unwrap();
        let json_path = dir.path().join("report.json");
        let text_path = dir.path().join("summary.txt");
        generate_json_report(&report, &json_path).unwrap();
        generate_text_report(&report, &text_path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["metadata"]["seed"], 77);
        assert_eq!(json["positions"].as_array().unwrap().len(), 20);
        assert_eq!(json["energy"]["trace"].as_array().unwrap().len(), 5);
        assert_eq!(json["routing"]["best"]["path"][0], 0);

        let text = std::fs::read_to_string(&text_path).unwrap();
        assert!(text.contains("Seed: 77"));
        assert!(text.contains("Routing cost:"));
        assert_eq!(text, render_text_report(&report));
    }

    /// Seeded runs agree; different seeds explore different fields
    #[test]
    fn test_seed_controls_the_run() {
        let mut config = SimulationConfig::default();
        config.network.num_nodes = 12;
        config.routing.n_iterations = 5;

        config.general.seed = Some(1);
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        config.general.seed = Some(2);
        let c = run_simulation(&config).unwrap();

        assert_eq!(a.positions, b.positions);
        assert_eq!(a.routing.best, b.routing.best);
        assert_ne!(a.positions, c.positions);
    }
}
