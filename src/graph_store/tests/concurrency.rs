use crate::{
    graph_store::{GraphStore, GraphStoreNode},
    types::RouterName,
};

/// Concurrent writers through cloned handles never lose an update
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mutations_are_serialized() {
    let store = GraphStoreNode::new();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let from = RouterName(format!("r{}", i));
            let to = RouterName(format!("r{}", (i + 1) % 16));
            store.add_router(from.clone()).await.unwrap();
            store.add_link(from, to, 1).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.expect("writer task panicked");
    }

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.routers().len(), 16);
    assert_eq!(snapshot.links().len(), 16);
    // every link endpoint resolves to a stored router
    for link in snapshot.links() {
        assert!(snapshot.contains(&link.source));
        assert!(snapshot.contains(&link.target));
    }
}
