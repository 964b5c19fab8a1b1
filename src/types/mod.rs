use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constants;

/// The name of a router, unique within a graph and case-sensitive
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouterName(pub String);

impl RouterName {
    /// Whether the name can identify a router (non-empty after trimming whitespace)
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouterName {
    fn from(name: &str) -> Self {
        RouterName(name.to_string())
    }
}

impl From<String> for RouterName {
    fn from(name: String) -> Self {
        RouterName(name)
    }
}

impl fmt::Display for RouterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted link between two routers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The router the link leaves from
    #[serde(rename = "from")]
    pub source: RouterName,
    /// The router the link arrives at
    #[serde(rename = "to")]
    pub target: RouterName,
    /// The cost of traversing the link, always at least 1
    pub weight: u32,
}

/// A least-cost route between two routers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Routers in traversal order, starting at the source and ending at the destination
    pub path: Vec<RouterName>,
    /// Sum of the weights of the traversed links
    pub distance: u64,
}

impl Route {
    /// Number of links traversed along the route
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&RouterName> {
        self.path.first()
    }

    pub fn destination(&self) -> Option<&RouterName> {
        self.path.last()
    }
}

/// The full contents of a graph, as handed to clients for synchronization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    /// All router names in insertion order
    pub routers: Vec<RouterName>,
    /// All links in insertion order, duplicates included
    pub edges: Vec<Link>,
}
