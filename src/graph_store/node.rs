use crate::types::{GraphData, Link, RouterName};
use crate::utils::logging;
use super::{validate_name, validate_weight, GraphSnapshot, GraphStore, GraphStoreError};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The internal state of the GraphStoreNode
#[derive(Debug, Default)]
pub struct GraphState {
    /// Router names in insertion order
    pub routers: Vec<RouterName>,
    /// Set of router names for membership checks
    pub known: HashSet<RouterName>,
    /// Links in insertion order, parallel links included
    pub links: Vec<Link>,
}

impl GraphState {
    /// Insert a router if absent; returns whether it was new
    fn insert_router(&mut self, name: &RouterName) -> bool {
        if self.known.contains(name) {
            return false;
        }
        self.known.insert(name.clone());
        self.routers.push(name.clone());
        true
    }

    fn insert_link(&mut self, link: Link) {
        self.insert_router(&link.source);
        self.insert_router(&link.target);
        self.links.push(link);
    }
}

/// A node that implements the GraphStore trait.
/// Clones share the same underlying graph.
#[derive(Clone, Default)]
pub struct GraphStoreNode {
    /// The graph, guarded by a single lock for mutations and snapshot reads
    pub state: Arc<Mutex<GraphState>>,
}

impl GraphStoreNode {
    /// Create a GraphStoreNode holding an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of routers currently stored
    pub async fn router_count(&self) -> usize {
        self.state.lock().await.routers.len()
    }

    /// Number of links currently stored
    pub async fn link_count(&self) -> usize {
        self.state.lock().await.links.len()
    }

    /// Current routers and links in the client synchronization shape
    pub async fn data(&self) -> GraphData {
        self.snapshot().await.to_data()
    }
}

#[async_trait]
impl GraphStore for GraphStoreNode {
    async fn add_router(&self, name: RouterName) -> Result<bool, GraphStoreError> {
        validate_name("name", &name)?;
        let inserted = self.state.lock().await.insert_router(&name);
        if inserted {
            logging::log("GS", &format!("Router '{}' added", name));
        } else {
            logging::log("GS", &format!("Router '{}' already present", name));
        }
        Ok(inserted)
    }

    async fn add_link(&self, source: RouterName, target: RouterName, weight: i64) -> Result<Link, GraphStoreError> {
        validate_name("source", &source)?;
        validate_name("target", &target)?;
        let weight = validate_weight(weight)?;

        let link = Link { source, target, weight };
        self.state.lock().await.insert_link(link.clone());
        logging::log("GS", &format!("Link {} -> {} added with weight {}", link.source, link.target, link.weight));
        Ok(link)
    }

    async fn add_duplex_link(&self, a: RouterName, b: RouterName, weight: i64) -> Result<(Link, Link), GraphStoreError> {
        validate_name("source", &a)?;
        validate_name("target", &b)?;
        let weight = validate_weight(weight)?;

        let forward = Link { source: a.clone(), target: b.clone(), weight };
        let backward = Link { source: b, target: a, weight };
        {
            let mut state = self.state.lock().await;
            state.insert_link(forward.clone());
            state.insert_link(backward.clone());
        }
        logging::log("GS", &format!("Duplex link {} <-> {} added with weight {}", forward.source, forward.target, weight));
        Ok((forward, backward))
    }

    async fn snapshot(&self) -> GraphSnapshot {
        let state = self.state.lock().await;
        GraphSnapshot::new(state.routers.clone(), state.links.clone())
    }
}
