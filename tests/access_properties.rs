use graph_access::{accessibility, Graph};
use proptest::prelude::*;

/// Reference oracle: Floyd-Warshall boolean transitive closure.
///
/// `closure[i][j]` is true iff `j` is reachable from `i` via at least one
/// edge traversal, which matches the engine's self-exclusion semantics: the
/// diagonal only lights up when a cycle routes back.
fn brute_force_closure(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut closure = vec![vec![false; n]; n];
    for &(a, b) in edges {
        closure[a][b] = true;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if closure[i][k] && closure[k][j] {
                    closure[i][j] = true;
                }
            }
        }
    }
    closure
}

fn build_directed(n: usize, edges: &[(usize, usize)]) -> Graph<usize> {
    let mut g = Graph::directed();
    g.add_nodes(0..n);
    for &(a, b) in edges {
        g.add_edge(a, b).unwrap();
    }
    g
}

/// A small directed graph: node count plus an arbitrary in-bounds edge list.
fn small_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..10).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..30),
        )
    })
}

proptest! {
    #[test]
    fn accessibility_matches_brute_force_closure((n, edges) in small_graph()) {
        let g = build_directed(n, &edges);
        let access = accessibility(&g).unwrap();
        let closure = brute_force_closure(n, &edges);

        prop_assert_eq!(access.len(), n);
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(
                    access[&i].contains(&j),
                    closure[i][j],
                    "reachability mismatch for {} -> {}", i, j
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical((n, edges) in small_graph()) {
        let g = build_directed(n, &edges);
        prop_assert_eq!(accessibility(&g).unwrap(), accessibility(&g).unwrap());
    }

    #[test]
    fn adding_an_edge_never_shrinks_any_set(
        (n, edges) in small_graph(),
        extra in (any::<usize>(), any::<usize>()),
    ) {
        let mut g = build_directed(n, &edges);
        let before = accessibility(&g).unwrap();

        g.add_edge(extra.0 % n, extra.1 % n).unwrap();
        let after = accessibility(&g).unwrap();

        for (node, reached) in &before {
            prop_assert!(
                reached.is_subset(&after[node]),
                "accessibility of {:?} shrank after edge addition", node
            );
        }
    }
}
