//! Command handlers

pub mod import;
pub mod route;
pub mod slots;
pub mod travel;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use route_engine::config::Config;
use route_engine::services::{RoutingNetwork, RoutingParams, TravelTimeEstimator};

use crate::cli::{Cli, Command};

/// Everything a command needs to run the engine.
pub struct Engine {
    network: RoutingNetwork,
    params: RoutingParams,
    default_start: String,
}

impl Engine {
    pub fn new(network: RoutingNetwork, params: RoutingParams, default_start: String) -> Self {
        Self {
            network,
            params,
            default_start,
        }
    }

    pub fn estimator(&self) -> TravelTimeEstimator<'_> {
        TravelTimeEstimator::new(&self.network, &self.params)
    }

    pub fn start_location<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(self.default_start.as_str())
    }
}

/// Load the network named on the command line or in the config, else the
/// built-in Melbourne tables.
pub fn load_network(config: &Config, override_path: Option<&Path>) -> Result<RoutingNetwork> {
    match override_path.or(config.network_file.as_deref()) {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read network file {}", path.display()))?;
            let network = RoutingNetwork::from_json(&content)
                .with_context(|| format!("Invalid network file {}", path.display()))?;
            info!(
                "Loaded network from {} ({} table entries)",
                path.display(),
                network.entry_count()
            );
            Ok(network)
        }
        None => {
            info!("Using built-in Melbourne network");
            Ok(RoutingNetwork::melbourne())
        }
    }
}

/// Run the selected command and return its JSON output.
pub fn dispatch(cli: &Cli, config: &Config) -> Result<String> {
    let engine = || -> Result<Engine> {
        let network = load_network(config, cli.network.as_deref())?;
        Ok(Engine::new(
            network,
            config.routing.clone(),
            config.start_location.clone(),
        ))
    };

    match &cli.command {
        Command::Optimize(args) => route::handle_optimize(&engine()?, args),
        Command::Summary(args) => route::handle_summary(&engine()?, args),
        Command::Travel { from, to, at } => {
            travel::handle_travel(&engine()?, from, to, at.as_deref())
        }
        Command::Slots { today, days } => slots::handle_slots(*today, *days),
    }
}
