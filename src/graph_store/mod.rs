use crate::types::{Link, RouterName};
use async_trait::async_trait;
use thiserror::Error;

pub mod node;
pub mod snapshot;
pub use node::GraphStoreNode;
pub use snapshot::GraphSnapshot;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphStoreError {
    #[error("Invalid router name in field '{field}': {value:?}")]
    InvalidName { field: String, value: String },
    #[error("Invalid weight: {0} (must be a positive integer)")]
    InvalidWeight(String),
}

impl GraphStoreError {
    /// The request field that failed validation
    pub fn field(&self) -> &str {
        match self {
            GraphStoreError::InvalidName { field, .. } => field,
            GraphStoreError::InvalidWeight(_) => "weight",
        }
    }
}

/// Checks that `name` can identify a router, reporting `field` on failure
pub fn validate_name(field: &str, name: &RouterName) -> Result<(), GraphStoreError> {
    if name.is_valid() {
        Ok(())
    } else {
        Err(GraphStoreError::InvalidName {
            field: field.to_string(),
            value: name.0.clone(),
        })
    }
}

/// Checks that `weight` is a positive integer small enough to store
pub fn validate_weight(weight: i64) -> Result<u32, GraphStoreError> {
    if weight < 1 {
        return Err(GraphStoreError::InvalidWeight(weight.to_string()));
    }
    u32::try_from(weight).map_err(|_| GraphStoreError::InvalidWeight(weight.to_string()))
}

/// The Graph Store owns every router and link of the simulated network.
/// All mutations are validated before any state is touched.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Add a router; returns `false` if a router with this name already existed
    async fn add_router(&self, name: RouterName) -> Result<bool, GraphStoreError>;

    /// Add a directed link, creating either endpoint if absent
    async fn add_link(&self, source: RouterName, target: RouterName, weight: i64) -> Result<Link, GraphStoreError>;

    /// Add a link in both directions with the same weight
    async fn add_duplex_link(&self, a: RouterName, b: RouterName, weight: i64) -> Result<(Link, Link), GraphStoreError>;

    /// Take an immutable copy of the current routers and links
    async fn snapshot(&self) -> GraphSnapshot;
}
