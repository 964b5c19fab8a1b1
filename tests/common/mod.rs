use netsim::{layers::PipelineConfig, types::RouterName, NetworkSimulator, SimulatorNode};

pub fn name(s: &str) -> RouterName {
    RouterName(s.to_string())
}

/// A ring r0 -> r1 -> ... -> r(n-1) -> r0 with unit weights
pub async fn setup_ring(n: usize) -> SimulatorNode {
    let node = SimulatorNode::new(PipelineConfig::default()).expect("default config is valid");
    for i in 0..n {
        node.add_link(RouterName(format!("r{}", i)), RouterName(format!("r{}", (i + 1) % n)), 1)
            .await
            .expect("ring link");
    }
    node
}
