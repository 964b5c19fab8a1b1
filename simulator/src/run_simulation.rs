use netsim::{
    types::RouterName,
    utils::logging,
    NetworkSimulator, SimulatorNode,
};
use thiserror::Error;

use crate::config::Config;
use crate::simulation_results::{MessageOutcome, SimulationResults};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Failed to build topology: {0}")]
    Topology(String),
    #[error("Failed to send message {src} -> {dest}: {reason}")]
    Message { src: String, dest: String, reason: String },
}

// ------------------------------------------------------------------------------------------------
// Main Simulation Function
// ------------------------------------------------------------------------------------------------

/// Builds the scenario topology on `node`, then sends every scenario message in order
pub async fn run_simulation(
    node: &SimulatorNode,
    config: &Config,
    results: &mut SimulationResults,
) -> Result<(), SimulationError> {
    setup_topology(node, config).await?;

    let data = node.get_data().await.map_err(|e| SimulationError::Topology(e.to_string()))?;
    results.routers = data.routers.len();
    results.links = data.edges.len();
    logging::log("SIMULATOR", &format!("Topology ready: {} routers, {} links", results.routers, results.links));

    for message in &config.messages {
        let response = node
            .send_message(RouterName(message.src.clone()), RouterName(message.dest.clone()), message.text.clone())
            .await
            .map_err(|e| SimulationError::Message {
                src: message.src.clone(),
                dest: message.dest.clone(),
                reason: e.to_string(),
            })?;
        logging::log("SIMULATOR", &format!("{} -> {}: {:?}", message.src, message.dest, response));
        results.record(MessageOutcome {
            src: message.src.clone(),
            dest: message.dest.clone(),
            text: message.text.clone(),
            response,
        });
    }
    Ok(())
}

async fn setup_topology(node: &SimulatorNode, config: &Config) -> Result<(), SimulationError> {
    for router in &config.routers {
        node.add_router(RouterName(router.clone()))
            .await
            .map_err(|e| SimulationError::Topology(e.to_string()))?;
    }
    for link in &config.links {
        let (source, target) = (RouterName(link.source.clone()), RouterName(link.target.clone()));
        let result = if link.duplex {
            node.add_duplex_link(source, target, link.weight).await
        } else {
            node.add_link(source, target, link.weight).await
        };
        result.map_err(|e| SimulationError::Topology(e.to_string()))?;
    }
    Ok(())
}
