use crate::graph_store::GraphStoreError;
use crate::layers::{LayerError, TransmissionRecord};
use crate::types::{constants, GraphData, Route, RouterName};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod node;
pub mod requests;
pub use node::SimulatorNode;
pub use requests::{handle_json, handle_request, Request};


#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Graph(#[from] GraphStoreError),
    #[error("Pipeline failure: {0}")]
    Pipeline(#[from] LayerError),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable name of the failure reported to clients
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Graph(GraphStoreError::InvalidName { .. }) => "InvalidName",
            ServiceError::Graph(GraphStoreError::InvalidWeight(_)) => "InvalidWeight",
            ServiceError::BadRequest(_) => "BadRequest",
            ServiceError::Pipeline(_) | ServiceError::Internal(_) => "Internal",
        }
    }

    /// The request field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ServiceError::Graph(e) => Some(e.field()),
            _ => None,
        }
    }
}

/// Outcome reported when no route can be produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFound {
    /// Always `false`
    pub found: bool,
    pub message: String,
}

impl NotFound {
    pub fn no_path() -> Self {
        Self { found: false, message: constants::PATH_NOT_FOUND.to_string() }
    }

    pub fn unknown_router(name: &RouterName) -> Self {
        Self { found: false, message: format!("Unknown router: {}", name) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathResponse {
    Found(Route),
    NotFound(NotFound),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SendResponse {
    Delivered(Box<TransmissionRecord>),
    NotFound(NotFound),
}

/// The boundary of the simulator: every client request goes through here.
#[async_trait]
pub trait NetworkSimulator: Send + Sync {
    /// Add a router; re-adding an existing name succeeds without change
    async fn add_router(&self, name: RouterName) -> Result<(), ServiceError>;

    /// Add a directed link, creating missing endpoints
    async fn add_link(&self, source: RouterName, target: RouterName, weight: i64) -> Result<(), ServiceError>;

    /// Add a link in both directions
    async fn add_duplex_link(&self, a: RouterName, b: RouterName, weight: i64) -> Result<(), ServiceError>;

    /// Least-cost route between two routers, or a not-found outcome
    async fn shortest_path(&self, start: RouterName, end: RouterName) -> Result<PathResponse, ServiceError>;

    /// Route a message and simulate it through all five layers
    async fn send_message(&self, src: RouterName, dest: RouterName, message: String) -> Result<SendResponse, ServiceError>;

    /// All routers and links currently stored
    async fn get_data(&self) -> Result<GraphData, ServiceError>;
}
