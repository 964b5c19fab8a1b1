pub mod types;
pub mod graph_store;
pub mod path_finder;
pub mod layers;
pub mod service;
pub mod utils;

pub use graph_store::{GraphStore, GraphStoreNode};
pub use layers::PipelineConfig;
pub use service::{NetworkSimulator, SimulatorNode};
