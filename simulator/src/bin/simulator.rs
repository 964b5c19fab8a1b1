use netsim::utils::logging;
use netsim::SimulatorNode;
use simulator::{run_simulation, Config, SimulationResults};
use std::env;

const DEFAULT_CONFIG: &str = "simulator/scenarios/config_simple.toml";
const RESULTS_DIR: &str = "simulator/results";

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Loads a scenario, runs it and writes the results file
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = Config::load(&config_path)?;
    logging::log("SIMULATOR", &format!("Loaded scenario {}", config_path));

    let node = SimulatorNode::new(config.pipeline.clone())?;
    let mut results = SimulationResults::default();
    run_simulation(&node, &config, &mut results).await?;

    let file = results.save(RESULTS_DIR).map_err(anyhow::Error::msg)?;
    println!(
        "Sent {} messages: {} delivered, {} without a path. Results in {}",
        results.messages_sent,
        results.delivered,
        results.not_found,
        file.display()
    );
    Ok(())
}
