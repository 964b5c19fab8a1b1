use crate::{
    graph_store::GraphSnapshot,
    path_finder::{shortest_path, PathFinderError},
    types::{Link, Route, RouterName},
};

fn name(s: &str) -> RouterName {
    RouterName(s.to_string())
}

fn link(from: &str, to: &str, weight: u32) -> Link {
    Link { source: name(from), target: name(to), weight }
}

fn names(path: &[&str]) -> Vec<RouterName> {
    path.iter().map(|s| name(s)).collect()
}

#[test]
fn test_single_link() {
    let snapshot = GraphSnapshot::new(names(&["Sender", "Receiver"]), vec![link("Sender", "Receiver", 5)]);
    let route = shortest_path(&snapshot, &name("Sender"), &name("Receiver")).unwrap();
    assert_eq!(route, Some(Route { path: names(&["Sender", "Receiver"]), distance: 5 }));
}

#[test]
fn test_prefers_cheaper_indirect_route() {
    let snapshot = GraphSnapshot::new(
        names(&["A", "B", "C"]),
        vec![link("A", "B", 1), link("B", "C", 1), link("A", "C", 5)],
    );
    let route = shortest_path(&snapshot, &name("A"), &name("C")).unwrap().expect("path expected");
    assert_eq!(route.path, names(&["A", "B", "C"]));
    assert_eq!(route.distance, 2);
    assert_eq!(route.hop_count(), 2);
}

#[test]
fn test_start_equals_end() {
    let snapshot = GraphSnapshot::new(names(&["A"]), vec![]);
    let route = shortest_path(&snapshot, &name("A"), &name("A")).unwrap();
    assert_eq!(route, Some(Route { path: names(&["A"]), distance: 0 }));
}

#[test]
fn test_unknown_router() {
    let snapshot = GraphSnapshot::new(names(&["A"]), vec![]);
    assert_eq!(
        shortest_path(&snapshot, &name("X"), &name("A")),
        Err(PathFinderError::UnknownRouter(name("X")))
    );
    assert_eq!(
        shortest_path(&snapshot, &name("A"), &name("Y")),
        Err(PathFinderError::UnknownRouter(name("Y")))
    );
    // checked before the start == end shortcut
    assert_eq!(
        shortest_path(&snapshot, &name("X"), &name("X")),
        Err(PathFinderError::UnknownRouter(name("X")))
    );
}

#[test]
fn test_disconnected_components() {
    let snapshot = GraphSnapshot::new(vec![], vec![link("A", "B", 1), link("C", "D", 1)]);
    assert_eq!(shortest_path(&snapshot, &name("A"), &name("C")), Ok(None));
}

#[test]
fn test_links_are_directed() {
    let snapshot = GraphSnapshot::new(vec![], vec![link("A", "B", 1)]);
    assert!(shortest_path(&snapshot, &name("A"), &name("B")).unwrap().is_some());
    assert_eq!(shortest_path(&snapshot, &name("B"), &name("A")), Ok(None));
}

#[test]
fn test_parallel_links_use_cheapest() {
    let snapshot = GraphSnapshot::new(
        vec![],
        vec![link("A", "B", 9), link("A", "B", 2), link("A", "B", 4)],
    );
    let route = shortest_path(&snapshot, &name("A"), &name("B")).unwrap().unwrap();
    assert_eq!(route.distance, 2);
    assert_eq!(route.path, names(&["A", "B"]));
}

/// Equal-cost routes resolve to the smallest next hop
#[test]
fn test_tie_break_prefers_smallest_next_hop() {
    // insertion order deliberately lists the larger hop first
    let snapshot = GraphSnapshot::new(
        vec![],
        vec![link("S", "Z", 1), link("Z", "T", 1), link("S", "M", 1), link("M", "T", 1)],
    );
    let route = shortest_path(&snapshot, &name("S"), &name("T")).unwrap().unwrap();
    assert_eq!(route.path, names(&["S", "M", "T"]));
    assert_eq!(route.distance, 2);
}

/// The tie-break applies at every hop, not only the first
#[test]
fn test_tie_break_applies_to_later_hops() {
    let snapshot = GraphSnapshot::new(
        vec![],
        vec![
            link("S", "A", 1),
            link("A", "Y", 1),
            link("A", "B", 1),
            link("Y", "T", 1),
            link("B", "T", 1),
        ],
    );
    let route = shortest_path(&snapshot, &name("S"), &name("T")).unwrap().unwrap();
    assert_eq!(route.path, names(&["S", "A", "B", "T"]));
}

/// A cheaper route with more hops still wins over a short expensive one
#[test]
fn test_distance_beats_hop_count() {
    let snapshot = GraphSnapshot::new(
        vec![],
        vec![
            link("A", "E", 10),
            link("A", "B", 2),
            link("B", "C", 2),
            link("C", "D", 2),
            link("D", "E", 2),
        ],
    );
    let route = shortest_path(&snapshot, &name("A"), &name("E")).unwrap().unwrap();
    assert_eq!(route.path, names(&["A", "B", "C", "D", "E"]));
    assert_eq!(route.distance, 8);
}

/// Cycles do not trap the search
#[test]
fn test_cycle() {
    let snapshot = GraphSnapshot::new(
        vec![],
        vec![link("A", "B", 1), link("B", "A", 1), link("B", "C", 3), link("C", "A", 1)],
    );
    let route = shortest_path(&snapshot, &name("C"), &name("B")).unwrap().unwrap();
    assert_eq!(route.path, names(&["C", "A", "B"]));
    assert_eq!(route.distance, 2);
}
