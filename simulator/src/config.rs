//! Configuration loader and validator for the network simulator scenarios.
//! A scenario describes a topology, pipeline parameters and the messages to send.

use netsim::layers::PipelineConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for a scenario run.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Pipeline parameters; any omitted field keeps its library default
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Routers created before any link, in this order
    #[serde(default)]
    pub routers: Vec<String>,
    /// Links to add; endpoints that are not listed in `routers` are created implicitly
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    /// Messages to send once the topology is in place
    #[serde(default)]
    pub messages: Vec<MessageConfig>,
}

/// A link of the scenario topology.
#[derive(Debug, Deserialize, Clone)]
pub struct LinkConfig {
    pub source: String,
    pub target: String,
    /// Link cost; must be a positive integer
    pub weight: i64,
    /// Whether the reverse link is added as well
    #[serde(default)]
    pub duplex: bool,
}

/// A message to simulate.
#[derive(Debug, Deserialize, Clone)]
pub struct MessageConfig {
    pub src: String,
    pub dest: String,
    pub text: String,
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Read, parse and validate a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::parse(&config_str)
    }

    /// Parse and validate a scenario from TOML text
    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.segment_size == 0 {
            return Err(ConfigError::ValidationError("Segment size must be positive".into()));
        }
        for router in &self.routers {
            if router.trim().is_empty() {
                return Err(ConfigError::ValidationError("Router names must not be blank".into()));
            }
        }
        for link in &self.links {
            if link.source.trim().is_empty() || link.target.trim().is_empty() {
                return Err(ConfigError::ValidationError("Link endpoints must not be blank".into()));
            }
            if link.weight < 1 {
                return Err(ConfigError::ValidationError(format!(
                    "Link {} -> {} has weight {}, weights must be positive",
                    link.source, link.target, link.weight
                )));
            }
        }
        if self.messages.is_empty() {
            return Err(ConfigError::ValidationError("At least one message is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"
        routers = ["Sender", "Receiver"]

        [pipeline]
        segment_size = 4

        [[links]]
        source = "Sender"
        target = "Receiver"
        weight = 5
        duplex = true

        [[messages]]
        src = "Sender"
        dest = "Receiver"
        text = "HELLO"
    "#;

    #[test]
    fn test_parse_simple_scenario() {
        let config = Config::parse(SIMPLE).expect("valid scenario");
        assert_eq!(config.routers, vec!["Sender", "Receiver"]);
        assert_eq!(config.pipeline.segment_size, 4);
        // omitted pipeline fields keep their defaults
        assert_eq!(config.pipeline.cipher_key, PipelineConfig::default().cipher_key);
        assert_eq!(config.links.len(), 1);
        assert!(config.links[0].duplex);
        assert_eq!(config.messages[0].text, "HELLO");
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let scenario = SIMPLE.replace("weight = 5", "weight = 0");
        assert!(matches!(Config::parse(&scenario), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_zero_segment_size() {
        let scenario = SIMPLE.replace("segment_size = 4", "segment_size = 0");
        assert!(matches!(Config::parse(&scenario), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_missing_messages() {
        let scenario = r#"routers = ["A"]"#;
        assert!(matches!(Config::parse(scenario), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(Config::parse("routers = ["), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("does/not/exist.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
