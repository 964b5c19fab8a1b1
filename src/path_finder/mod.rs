//! Least-cost routing over a graph snapshot.
//!
//! Distances to the destination are computed with Dijkstra over the reversed
//! links; the route is then rebuilt from the source by always stepping to the
//! smallest-named neighbor that stays on a least-cost path. The result is the
//! lexicographically smallest of all minimum-distance paths.

use crate::graph_store::GraphSnapshot;
use crate::types::{Route, RouterName};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathFinderError {
    #[error("Unknown router: {0}")]
    UnknownRouter(RouterName),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Cheapest link weight per ordered pair, neighbors sorted by name
type Adjacency<'a> = BTreeMap<&'a RouterName, BTreeMap<&'a RouterName, u64>>;

/// Compute the least-cost route from `start` to `end`.
///
/// Returns `Ok(None)` when both routers exist but no directed path connects them.
pub fn shortest_path(
    snapshot: &GraphSnapshot,
    start: &RouterName,
    end: &RouterName,
) -> Result<Option<Route>, PathFinderError> {
    for name in [start, end] {
        if !snapshot.contains(name) {
            return Err(PathFinderError::UnknownRouter(name.clone()));
        }
    }
    if start == end {
        return Ok(Some(Route { path: vec![start.clone()], distance: 0 }));
    }

    let (forward, backward) = adjacency(snapshot);
    let to_end = distances_from(&backward, end);
    let Some(&distance) = to_end.get(start) else {
        return Ok(None);
    };

    let mut path = vec![start.clone()];
    let mut current = start;
    while current != end {
        let remaining = to_end[current];
        let next = forward
            .get(current)
            .and_then(|neighbors| {
                neighbors
                    .iter()
                    .find(|(neighbor, weight)| to_end.get(*neighbor).is_some_and(|d| d + **weight == remaining))
            })
            .map(|(neighbor, _)| *neighbor)
            .ok_or_else(|| PathFinderError::Internal(format!("no least-cost successor for {}", current)))?;
        path.push(next.clone());
        current = next;
    }

    Ok(Some(Route { path, distance }))
}

/// Build forward and reversed adjacency, keeping only the cheapest parallel link
fn adjacency(snapshot: &GraphSnapshot) -> (Adjacency<'_>, Adjacency<'_>) {
    let mut forward: Adjacency = BTreeMap::new();
    let mut backward: Adjacency = BTreeMap::new();
    for link in snapshot.links() {
        let weight = u64::from(link.weight);
        keep_cheapest(&mut forward, &link.source, &link.target, weight);
        keep_cheapest(&mut backward, &link.target, &link.source, weight);
    }
    (forward, backward)
}

fn keep_cheapest<'a>(adjacency: &mut Adjacency<'a>, from: &'a RouterName, to: &'a RouterName, weight: u64) {
    adjacency
        .entry(from)
        .or_default()
        .entry(to)
        .and_modify(|w| *w = (*w).min(weight))
        .or_insert(weight);
}

/// Dijkstra from `origin`; unreachable routers are absent from the result
fn distances_from<'a>(adjacency: &Adjacency<'a>, origin: &'a RouterName) -> HashMap<&'a RouterName, u64> {
    let mut dist: HashMap<&RouterName, u64> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(origin, 0);
    heap.push(Reverse((0u64, origin)));

    while let Some(Reverse((current_dist, current))) = heap.pop() {
        if dist.get(current).is_some_and(|&d| current_dist > d) {
            continue;
        }
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };
        for (&neighbor, &weight) in neighbors {
            let alt = current_dist + weight;
            if dist.get(neighbor).map_or(true, |&d| alt < d) {
                dist.insert(neighbor, alt);
                heap.push(Reverse((alt, neighbor)));
            }
        }
    }
    dist
}
