use crate::graph_store::{GraphSnapshot, GraphStore, GraphStoreNode};
use crate::layers::{run_pipeline, PipelineConfig};
use crate::path_finder::{self, PathFinderError};
use crate::types::{constants, GraphData, Route, RouterName};
use crate::utils::logging;
use super::{NetworkSimulator, NotFound, PathResponse, SendResponse, ServiceError};
use async_trait::async_trait;

/// A node that implements the NetworkSimulator trait on top of a shared graph store.
/// Clones share the same graph, so one node can serve concurrent requests.
#[derive(Clone, Default)]
pub struct SimulatorNode {
    store: GraphStoreNode,
    config: PipelineConfig,
}

impl SimulatorNode {
    /// Create a SimulatorNode with an empty graph
    pub fn new(config: PipelineConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        Ok(Self { store: GraphStoreNode::new(), config })
    }

    /// Create a SimulatorNode whose graph already holds the default Sender and Receiver routers
    pub async fn with_default_routers(config: PipelineConfig) -> Result<Self, ServiceError> {
        let node = Self::new(config)?;
        node.add_router(constants::sender()).await?;
        node.add_router(constants::receiver()).await?;
        Ok(node)
    }

    /// Resolve a route over one snapshot, mapping expected failures to a not-found outcome
    fn route(snapshot: &GraphSnapshot, start: &RouterName, end: &RouterName) -> Result<Result<Route, NotFound>, ServiceError> {
        match path_finder::shortest_path(snapshot, start, end) {
            Ok(Some(route)) => Ok(Ok(route)),
            Ok(None) => Ok(Err(NotFound::no_path())),
            Err(PathFinderError::UnknownRouter(name)) => Ok(Err(NotFound::unknown_router(&name))),
            Err(PathFinderError::Internal(e)) => Err(ServiceError::Internal(e)),
        }
    }
}

#[async_trait]
impl NetworkSimulator for SimulatorNode {
    async fn add_router(&self, name: RouterName) -> Result<(), ServiceError> {
        self.store.add_router(name).await?;
        Ok(())
    }

    async fn add_link(&self, source: RouterName, target: RouterName, weight: i64) -> Result<(), ServiceError> {
        self.store.add_link(source, target, weight).await?;
        Ok(())
    }

    async fn add_duplex_link(&self, a: RouterName, b: RouterName, weight: i64) -> Result<(), ServiceError> {
        self.store.add_duplex_link(a, b, weight).await?;
        Ok(())
    }

    async fn shortest_path(&self, start: RouterName, end: RouterName) -> Result<PathResponse, ServiceError> {
        let snapshot = self.store.snapshot().await;
        match Self::route(&snapshot, &start, &end)? {
            Ok(route) => {
                logging::log("SVC", &format!("Route {} -> {}: {:?} (distance {})", start, end, route.path, route.distance));
                Ok(PathResponse::Found(route))
            }
            Err(not_found) => {
                logging::log("SVC", &format!("No route {} -> {}: {}", start, end, not_found.message));
                Ok(PathResponse::NotFound(not_found))
            }
        }
    }

    async fn send_message(&self, src: RouterName, dest: RouterName, message: String) -> Result<SendResponse, ServiceError> {
        let snapshot = self.store.snapshot().await;
        let route = match Self::route(&snapshot, &src, &dest)? {
            Ok(route) => route,
            Err(not_found) => {
                logging::log("SVC", &format!("Message {} -> {} not sent: {}", src, dest, not_found.message));
                return Ok(SendResponse::NotFound(not_found));
            }
        };
        let record = run_pipeline(&self.config, &route, &message)?;
        Ok(SendResponse::Delivered(Box::new(record)))
    }

    async fn get_data(&self) -> Result<GraphData, ServiceError> {
        Ok(self.store.data().await)
    }
}
