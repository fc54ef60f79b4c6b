mod config;
mod error;
mod export;
mod routes;
mod topology;

use config::Config;
use error::{AppError, AppResult};

fn main() {
    if let Err(e) = run() {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let config = Config::load().map_err(|e| AppError::Config(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Network Topology Mapper starting...");

    let table = routes::parser::read_route_table(&config.input)?;
    tracing::info!("Parsed {} route entries from {}", table.entries.len(), table.source);

    let mut graph = topology::builder::build_topology(&table.entries);
    tracing::info!(
        "Topology graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut classification = topology::classifier::classify(&graph, &table.entries)?;

    if config.synthesis_enabled {
        topology::hosts::attach_leaf_hosts(&mut graph, &mut classification.roles);
        tracing::info!("Leaf hosts attached: {} nodes total", graph.node_count());
    } else {
        tracing::info!("Leaf host synthesis disabled");
    }

    let document = export::build_document(&graph, &classification, &table);
    export::json::write_document(&document, config.output.as_deref(), config.pretty)?;

    Ok(())
}
