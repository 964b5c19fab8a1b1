use crate::{
    graph_store::{GraphStore, GraphStoreError, GraphStoreNode},
    types::{Link, RouterName},
    utils::logging,
};

fn name(s: &str) -> RouterName {
    RouterName(s.to_string())
}

/// Adding the same router twice leaves exactly one router of that name
#[tokio::test]
async fn test_add_router_is_idempotent() {
    logging::init_logging().ok();
    let store = GraphStoreNode::new();

    assert!(store.add_router(name("Sender")).await.expect("first add failed"));
    assert!(!store.add_router(name("Sender")).await.expect("second add failed"));

    let data = store.data().await;
    assert_eq!(data.routers, vec![name("Sender")]);
    assert!(data.edges.is_empty());
}

/// Router names are case-sensitive
#[tokio::test]
async fn test_router_names_are_case_sensitive() {
    let store = GraphStoreNode::new();
    store.add_router(name("a")).await.unwrap();
    store.add_router(name("A")).await.unwrap();
    assert_eq!(store.router_count().await, 2);
}

/// Empty and whitespace-only names are rejected and nothing is stored
#[tokio::test]
async fn test_add_router_rejects_blank_names() {
    let store = GraphStoreNode::new();

    for bad in ["", "   ", "\t\n"] {
        let err = store.add_router(name(bad)).await.unwrap_err();
        assert_eq!(err, GraphStoreError::InvalidName { field: "name".to_string(), value: bad.to_string() });
        assert_eq!(err.field(), "name");
    }
    assert_eq!(store.router_count().await, 0);
}

/// Adding a link creates both endpoints
#[tokio::test]
async fn test_add_link_creates_missing_endpoints() {
    let store = GraphStoreNode::new();
    store.add_router(name("A")).await.unwrap();

    let link = store.add_link(name("A"), name("B"), 4).await.expect("add_link failed");
    assert_eq!(link, Link { source: name("A"), target: name("B"), weight: 4 });

    let data = store.data().await;
    assert_eq!(data.routers, vec![name("A"), name("B")]);
    assert_eq!(data.edges, vec![link]);
}

/// Non-positive weights are rejected before any mutation
#[tokio::test]
async fn test_add_link_rejects_non_positive_weight() {
    let store = GraphStoreNode::new();

    for bad in [0, -1, -100] {
        let err = store.add_link(name("A"), name("B"), bad).await.unwrap_err();
        assert_eq!(err, GraphStoreError::InvalidWeight(bad.to_string()));
        assert_eq!(err.field(), "weight");
    }
    // the implicit endpoints must not have been created
    assert_eq!(store.router_count().await, 0);
    assert_eq!(store.link_count().await, 0);
}

/// Weights that do not fit the stored width are rejected
#[tokio::test]
async fn test_add_link_rejects_oversized_weight() {
    let store = GraphStoreNode::new();
    let too_big = i64::from(u32::MAX) + 1;
    let err = store.add_link(name("A"), name("B"), too_big).await.unwrap_err();
    assert!(matches!(err, GraphStoreError::InvalidWeight(_)));
    assert_eq!(store.router_count().await, 0);
}

/// A blank endpoint names the failing field
#[tokio::test]
async fn test_add_link_reports_failing_field() {
    let store = GraphStoreNode::new();

    let err = store.add_link(name(""), name("B"), 1).await.unwrap_err();
    assert_eq!(err.field(), "source");
    let err = store.add_link(name("A"), name(" "), 1).await.unwrap_err();
    assert_eq!(err.field(), "target");
    assert_eq!(store.router_count().await, 0);
}

/// Re-adding an identical link stores a parallel duplicate
#[tokio::test]
async fn test_duplicate_links_are_kept() {
    let store = GraphStoreNode::new();
    store.add_link(name("A"), name("B"), 2).await.unwrap();
    store.add_link(name("A"), name("B"), 2).await.unwrap();

    let data = store.data().await;
    assert_eq!(data.routers.len(), 2);
    assert_eq!(data.edges.len(), 2);
    assert_eq!(data.edges[0], data.edges[1]);
}

/// A duplex link stores one link per direction
#[tokio::test]
async fn test_add_duplex_link() {
    let store = GraphStoreNode::new();
    let (forward, backward) = store.add_duplex_link(name("A"), name("B"), 7).await.unwrap();

    assert_eq!(forward, Link { source: name("A"), target: name("B"), weight: 7 });
    assert_eq!(backward, Link { source: name("B"), target: name("A"), weight: 7 });
    assert_eq!(store.data().await.edges, vec![forward, backward]);
}

/// A snapshot does not observe mutations made after it was taken
#[tokio::test]
async fn test_snapshot_is_isolated_from_later_mutation() {
    let store = GraphStoreNode::new();
    store.add_link(name("A"), name("B"), 1).await.unwrap();

    let snapshot = store.snapshot().await;
    store.add_link(name("B"), name("C"), 1).await.unwrap();

    assert!(!snapshot.contains(&name("C")));
    assert_eq!(snapshot.links().len(), 1);
    assert_eq!(store.snapshot().await.links().len(), 2);
}
