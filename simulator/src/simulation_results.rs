use chrono::Local;
use netsim::service::SendResponse;
use netsim::utils::logging;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of one scenario message
#[derive(Debug, Clone, Serialize)]
pub struct MessageOutcome {
    pub src: String,
    pub dest: String,
    pub text: String,
    pub response: SendResponse,
}

#[derive(Debug)]
pub struct SimulationResults {
    // Topology
    pub routers: usize,
    pub links: usize,

    // Message counts
    pub messages_sent: u64,
    pub delivered: u64,
    pub not_found: u64,

    // Per-message detail
    pub outcomes: Vec<MessageOutcome>,

    pub start_time: Instant,
}

impl Default for SimulationResults {
    fn default() -> Self {
        Self {
            routers: 0,
            links: 0,
            messages_sent: 0,
            delivered: 0,
            not_found: 0,
            outcomes: Vec::new(),
            start_time: Instant::now(),
        }
    }
}

impl SimulationResults {
    /// Record the outcome of one message
    pub fn record(&mut self, outcome: MessageOutcome) {
        self.messages_sent += 1;
        match &outcome.response {
            SendResponse::Delivered(_) => self.delivered += 1,
            SendResponse::NotFound(_) => self.not_found += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Sum of route distances over all delivered messages
    pub fn total_distance(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.response {
                SendResponse::Delivered(record) => Some(record.distance),
                SendResponse::NotFound(_) => None,
            })
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "topology": {
                "routers": self.routers,
                "links": self.links,
            },
            "results": {
                "messages_sent": self.messages_sent,
                "delivered": self.delivered,
                "not_found": self.not_found,
                "total_distance": self.total_distance(),
                "elapsed_ms": self.start_time.elapsed().as_millis() as u64,
            },
            "messages": self.outcomes,
        })
    }

    /// Saves the simulation results as a timestamped JSON file under `dir`
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, String> {
        logging::log("SIMULATOR", "=== Simulation Statistics ===");
        logging::log("SIMULATOR", &format!("Messages sent: {}", self.messages_sent));
        logging::log("SIMULATOR", &format!("Delivered: {}", self.delivered));
        logging::log("SIMULATOR", &format!("Not found: {}", self.not_found));
        logging::log("SIMULATOR", "=============================");

        fs::create_dir_all(dir.as_ref()).map_err(|e| e.to_string())?;
        let file = dir
            .as_ref()
            .join(format!("simulation_{}.json", Local::now().format("%Y%m%d_%H%M%S")));
        let body = serde_json::to_string_pretty(&self.to_json()).map_err(|e| e.to_string())?;
        fs::write(&file, body).map_err(|e| e.to_string())?;
        logging::log("SIMULATOR", &format!("Saved simulation results to {}", file.display()));
        Ok(file)
    }
}
