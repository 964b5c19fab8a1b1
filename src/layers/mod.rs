//! The five-layer encode/decode pipeline.
//!
//! Each layer wraps the unit handed down from the layer above on the sending
//! side and unwraps it again on the receiving side, appending one or more
//! entries to the [`Trace`] as it goes. Every transform is deterministic and
//! exactly reversible.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::types::constants;

pub mod addressing;
pub mod application;
pub mod data_link;
pub mod network;
pub mod physical;
pub mod pipeline;
pub mod transport;

pub use addressing::{ip_for, mac_for, MacAddress};
pub use application::ApplicationLayer;
pub use data_link::{DataLinkLayer, Frame};
pub use network::{Datagram, NetworkLayer};
pub use physical::PhysicalLayer;
pub use pipeline::{run_pipeline, Delivery, ReceiverStack, SenderData, SenderStack, Transmission, TransmissionRecord};
pub use transport::{TransportLayer, TransportPdu};


#[derive(Debug, Error)]
pub enum LayerError {
    #[error("Invalid segment size: {0} (must be at least 1)")]
    InvalidSegmentSize(usize),
    #[error("Route must contain at least one router")]
    EmptyRoute,
    #[error("IP mismatch: expected {expected}, got {actual}")]
    IpMismatch { expected: String, actual: String },
    #[error("MAC mismatch: expected {expected}, got {actual}")]
    MacMismatch { expected: String, actual: String },
    #[error("Frame check failed: expected {expected:08x}, computed {actual:08x}")]
    FrameCheckFailed { expected: u32, actual: u32 },
    #[error("Invalid MAC address: {0}")]
    InvalidMac(String),
    #[error("Bit stream encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// The layer that produced a trace entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Application,
    Transport,
    Network,
    DataLink,
    Physical,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Application => write!(f, "Application"),
            LayerKind::Transport => write!(f, "Transport"),
            LayerKind::Network => write!(f, "Network"),
            LayerKind::DataLink => write!(f, "Data Link"),
            LayerKind::Physical => write!(f, "Physical"),
        }
    }
}

/// Which side of the transmission a trace entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Send,
    Receive,
}

/// One human-readable action taken by a layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub layer: LayerKind,
    pub direction: Direction,
    pub detail: String,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.direction {
            Direction::Send => "sender",
            Direction::Receive => "receiver",
        };
        write!(f, "{} Layer ({}): {}", self.layer, side, self.detail)
    }
}

/// Ordered record of every layer action in one transmission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, layer: LayerKind, direction: Direction, detail: impl Into<String>) {
        let entry = TraceEntry { layer, direction, detail: detail.into() };
        tracing::info!("{}", entry);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

/// Fixed parameters of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Characters per transport segment
    pub segment_size: usize,
    /// Rotation used by the application-layer cipher
    pub cipher_key: u8,
    /// Port of the sending application
    pub source_port: u16,
    /// Port of the receiving application
    pub dest_port: u16,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            segment_size: constants::SEGMENT_SIZE,
            cipher_key: constants::CIPHER_KEY,
            source_port: constants::SOURCE_PORT,
            dest_port: constants::DEST_PORT,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), LayerError> {
        if self.segment_size == 0 {
            return Err(LayerError::InvalidSegmentSize(self.segment_size));
        }
        Ok(())
    }
}
