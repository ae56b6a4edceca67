//! Simulation report types and writers.
//!
//! Generates both JSON and human-readable text reports.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clustering::ClusterSize;
use crate::config::SimulationConfig;
use crate::energy::EnergyTrace;
use crate::routing::Route;
use crate::topology::Position;

/// Everything a presentation layer needs from one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub metadata: ReportMetadata,
    pub config: SimulationConfig,
    pub positions: Vec<Position>,
    pub clusters: ClusterReport,
    pub routing: RoutingReport,
    pub energy: EnergyReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// Seed every random stream of the run was derived from
    pub seed: u64,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterReport {
    pub heads: Vec<usize>,
    /// Head index per node
    pub assignment: Vec<usize>,
    pub sizes: Vec<ClusterSize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingReport {
    pub source: usize,
    pub sink: usize,
    pub best: Option<Route>,
    /// Best cost after each iteration
    pub convergence: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyReport {
    pub initial_mean: f64,
    pub trace: EnergyTrace,
    pub depleted_nodes: usize,
    /// Residual energy per node after the last round
    pub residual: Vec<f64>,
}

impl EnergyReport {
    pub fn final_mean(&self) -> f64 {
        self.trace.final_mean().unwrap_or(self.initial_mean)
    }
}

/// Generate JSON report
pub fn generate_json_report(report: &SimulationReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Generate human-readable text report
pub fn generate_text_report(report: &SimulationReport, output_path: &Path) -> Result<()> {
    fs::write(output_path, render_text_report(report))
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}

/// Render the text summary of a run
pub fn render_text_report(report: &SimulationReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    let network = &report.config.network;
    let routing = &report.config.routing;

    // Header
    lines.push("=".repeat(72));
    lines.push("              WSNSIM HEED + ANT COLONY ROUTING SUMMARY".to_string());
    lines.push("=".repeat(72));
    lines.push(String::new());

    // Metadata
    lines.push(format!("Generated: {}", report.metadata.generated_at.to_rfc3339()));
    lines.push(format!("Seed: {}", report.metadata.seed));
    lines.push(format!("Version: {}", report.metadata.version));
    lines.push(String::new());

    // Network
    lines.push(format!("Nodes:              {}", network.num_nodes));
    lines.push(format!("Area:               {} x {}", network.area_size, network.area_size));
    lines.push(format!(
        "Ants / iterations:  {} / {} (decay {}, alpha {}, beta {})",
        routing.n_ants, routing.n_iterations, routing.decay, routing.alpha, routing.beta
    ));
    lines.push(String::new());

    // Clustering
    lines.push(format!("Cluster heads ({}): {:?}", report.clusters.heads.len(), report.clusters.heads));
    for size in &report.clusters.sizes {
        lines.push(format!("  head {:>4}: {} members", size.head, size.members));
    }
    lines.push(String::new());

    // Routing
    match &report.routing.best {
        Some(route) => {
            lines.push(format!("Route {} -> {}: {:?}", report.routing.source, report.routing.sink, route.path));
            lines.push(format!("Routing cost:       {:.2}", route.cost));
            lines.push(format!("Hops:               {}", route.hops()));
            if !route.reached_sink {
                lines.push("  (route ends before the sink)".to_string());
            }
        }
        None => {
            lines.push(format!(
                "Route {} -> {}: no route found",
                report.routing.source, report.routing.sink
            ));
        }
    }
    lines.push(String::new());

    // Energy
    lines.push(format!("Initial mean energy: {:.2}", report.energy.initial_mean));
    lines.push(format!("Final mean energy:   {:.2}", report.energy.final_mean()));
    lines.push(format!("Depleted nodes:      {}", report.energy.depleted_nodes));
    lines.push(String::new());

    lines.join("\n")
}
