use crate::types::{GraphData, Link, RouterName};
use std::collections::HashSet;

/// A read-only copy of the graph taken under the store lock.
/// Later mutations of the store are never visible through it.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    routers: Vec<RouterName>,
    known: HashSet<RouterName>,
    links: Vec<Link>,
}

impl GraphSnapshot {
    /// Build a snapshot from raw parts. Link endpoints missing from `routers` are added.
    pub fn new(routers: Vec<RouterName>, links: Vec<Link>) -> Self {
        let mut snapshot = GraphSnapshot::default();
        for router in routers {
            snapshot.insert_router(router);
        }
        for link in &links {
            snapshot.insert_router(link.source.clone());
            snapshot.insert_router(link.target.clone());
        }
        snapshot.links = links;
        snapshot
    }

    fn insert_router(&mut self, router: RouterName) {
        if self.known.insert(router.clone()) {
            self.routers.push(router);
        }
    }

    pub fn contains(&self, name: &RouterName) -> bool {
        self.known.contains(name)
    }

    /// Routers in insertion order
    pub fn routers(&self) -> &[RouterName] {
        &self.routers
    }

    /// Links in insertion order, parallel links included
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn to_data(&self) -> GraphData {
        GraphData {
            routers: self.routers.clone(),
            edges: self.links.clone(),
        }
    }
}
