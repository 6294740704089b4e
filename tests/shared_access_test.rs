//! Single-writer / multiple-reader access through an external lock.

use ccnetwork::algo::{connected, distance};
use ccnetwork::graph::Graph;
use std::sync::{Arc, RwLock};
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_graph_is_send_and_sync() {
    assert_send_sync::<Graph<u64>>();
    assert_send_sync::<Graph<String>>();
}

#[test]
fn test_readers_and_writer_behind_rwlock() {
    let shared = Arc::new(RwLock::new(Graph::from_nodes(false, 0u32..50)));

    let writer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for i in 0..49u32 {
                let mut g = shared.write().unwrap();
                g.add_edge(i, i + 1, 1.0).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..20 {
                    let g = shared.read().unwrap();
                    // Any prefix of the chain is a consistent snapshot
                    if let Some(d) = distance(&g, &0, &10).unwrap() {
                        assert_eq!(d, 10.0);
                    }
                    assert!(connected(&g, &3, &3).unwrap());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let g = shared.read().unwrap();
    assert_eq!(g.edge_count(), 49);
    assert_eq!(distance(&g, &0, &49).unwrap(), Some(49.0));
}
