use crate::{
    graph_store::GraphSnapshot,
    path_finder::shortest_path,
    types::{Link, RouterName},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

fn random_graph(rng: &mut StdRng, routers: usize, links: usize) -> GraphSnapshot {
    let names: Vec<RouterName> = (0..routers).map(|i| RouterName(format!("r{}", i))).collect();
    let links = (0..links)
        .map(|_| Link {
            source: names[rng.gen_range(0..routers)].clone(),
            target: names[rng.gen_range(0..routers)].clone(),
            weight: rng.gen_range(1..=9),
        })
        .collect();
    GraphSnapshot::new(names, links)
}

/// Bellman-Ford reference distances from `start`
fn reference_distances(snapshot: &GraphSnapshot, start: &RouterName) -> HashMap<RouterName, u64> {
    let mut dist = HashMap::new();
    dist.insert(start.clone(), 0u64);
    for _ in 0..snapshot.routers().len() {
        for link in snapshot.links() {
            if let Some(&d) = dist.get(&link.source) {
                let alt = d + u64::from(link.weight);
                if dist.get(&link.target).map_or(true, |&cur| alt < cur) {
                    dist.insert(link.target.clone(), alt);
                }
            }
        }
    }
    dist
}

/// Routes are valid, minimal, positive and reproducible on random graphs
#[test]
fn test_random_graphs_match_reference() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let snapshot = random_graph(&mut rng, 8, 14);
        for start in snapshot.routers() {
            let reference = reference_distances(&snapshot, start);
            for end in snapshot.routers() {
                let route = shortest_path(&snapshot, start, end).expect("routers exist");
                let again = shortest_path(&snapshot, start, end).expect("routers exist");
                assert_eq!(route, again, "routing must be deterministic");

                match (route, reference.get(end)) {
                    (None, None) => {}
                    (Some(route), Some(&expected)) => {
                        assert_eq!(route.distance, expected);
                        assert_eq!(route.path.first(), Some(start));
                        assert_eq!(route.path.last(), Some(end));
                        if start == end {
                            assert_eq!(route.distance, 0);
                        } else {
                            assert!(route.distance > 0);
                        }
                        // every consecutive pair is joined by a link and weights add up
                        let mut total = 0u64;
                        for pair in route.path.windows(2) {
                            let cheapest = snapshot
                                .links()
                                .iter()
                                .filter(|l| l.source == pair[0] && l.target == pair[1])
                                .map(|l| u64::from(l.weight))
                                .min()
                                .expect("consecutive routers must be linked");
                            total += cheapest;
                        }
                        assert_eq!(total, route.distance);
                    }
                    (route, expected) => panic!("mismatch for {} -> {}: {:?} vs {:?}", start, end, route, expected),
                }
            }
        }
    }
}
