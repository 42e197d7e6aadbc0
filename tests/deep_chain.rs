//! Stack-safety checks: traversal depth must stay constant no matter how
//! deep the graph is.
//!
//! Each computation runs on a spawned thread with a deliberately small,
//! fixed stack. A recursive traversal of a multi-thousand-node chain would
//! overflow it; the worklist engine must not care.

use graph_access::{accessibility, components, mutual_accessibility, Graph};

/// Small enough that a recursion whose depth scales with the chain length
/// would overflow, large enough for the constant-depth engine.
const SMALL_STACK: usize = 256 * 1024;

fn on_small_stack<F: FnOnce() + Send + 'static>(f: F) {
    std::thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .expect("spawn traversal thread")
        .join()
        .expect("traversal thread panicked");
}

#[test]
fn deep_directed_chain_traverses_on_a_small_stack() {
    on_small_stack(|| {
        let n = 2048;
        let mut gr = Graph::directed();
        gr.add_nodes(0..n);
        for i in 0..n - 1 {
            gr.add_edge(i, i + 1).unwrap();
        }

        let access = accessibility(&gr).unwrap();
        assert_eq!(access[&0].len(), n - 1);
        assert_eq!(access[&(n / 2)].len(), n / 2 - 1);
        assert!(access[&(n - 1)].is_empty());
        // No node lies on a cycle, so none reaches itself.
        assert!(access.iter().all(|(node, reached)| !reached.contains(node)));
    });
}

#[test]
fn deep_chain_cluster_partition_on_a_small_stack() {
    on_small_stack(|| {
        let n = 2048;
        let mut gr = Graph::directed();
        gr.add_nodes(0..n);
        for i in 0..n - 1 {
            gr.add_edge(i, i + 1).unwrap();
        }

        // An acyclic chain is all singleton clusters.
        let clusters = components(&gr).unwrap();
        assert_eq!(clusters.len(), n);
        assert!(clusters.iter().all(|c| c.len() == 1));
    });
}

#[test]
fn reference_benchmark_workload() {
    // The 311-node undirected path graph from the reference benchmark:
    // every node reaches all 310 others and never itself.
    on_small_stack(|| {
        let n = 311;
        let mut gr = Graph::undirected();
        gr.add_nodes(0..n);
        for i in 0..n - 1 {
            gr.add_edge(i, i + 1).unwrap();
        }

        let access = accessibility(&gr).unwrap();
        assert_eq!(access.len(), n);
        for (node, reached) in &access {
            assert_eq!(reached.len(), n - 1);
            assert!(!reached.contains(node));
        }

        // The whole path is one mutually-reachable cluster, self included.
        let mutual = mutual_accessibility(&gr).unwrap();
        assert!(mutual.values().all(|members| members.len() == n));

        let clusters = components(&gr).unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), n);
    });
}
