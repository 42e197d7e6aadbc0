//! Reachability and connectivity analysis over a read-only graph snapshot.
//!
//! Every function here is a pure function of the graph it is given: nothing
//! is cached between calls, nothing in the graph is mutated, and independent
//! calls may run concurrently against the same store.
//!
//! All traversals use an explicit [`Worklist`] frontier rather than call-stack
//! recursion, so a 2000+ node chain walks in O(V+E) per source with constant
//! call depth. The strongly-connected-component pass is an iterative Kosaraju:
//! an iterator-stacking sweep for finishing order, then a transpose sweep.

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

pub(crate) mod worklist;

use worklist::Worklist;

/// Mapping from each node to a set of related nodes.
///
/// Returned by [`accessibility`] (reachable sets) and
/// [`mutual_accessibility`] (cluster member sets).
pub type AccessMap<N> = HashMap<N, HashSet<N>>;

/// Computes, for every node, the set of nodes reachable from it.
///
/// A node's accessibility set contains only nodes reachable via at least one
/// edge traversal; the node itself appears only when a cycle (including a
/// self-loop) routes back to it. An empty graph yields an empty map.
///
/// Worst case O(V·(V+E)): one worklist walk per source node.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if the adjacency view references a
/// node missing from the node table. That cannot happen for a graph built
/// through [`Graph`]'s own insertion API.
pub fn accessibility<N>(graph: &Graph<N>) -> Result<AccessMap<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "computing accessibility"
    );

    let mut map = AccessMap::with_capacity(graph.node_count());
    for source in graph.nodes() {
        map.insert(source.clone(), reach_from(graph, source)?);
    }
    Ok(map)
}

/// Like [`accessibility`], but fans the per-source walks out across the
/// rayon thread pool.
///
/// The graph is only read, so the walks are independent; the result is
/// identical to the serial computation.
///
/// # Errors
///
/// Same failure surface as [`accessibility`].
#[cfg(feature = "parallel")]
pub fn par_accessibility<N>(graph: &Graph<N>) -> Result<AccessMap<N>>
where
    N: Eq + Hash + Clone + Debug + Send + Sync,
{
    use rayon::prelude::*;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "computing accessibility in parallel"
    );

    let sources: Vec<&N> = graph.nodes().collect();
    sources
        .into_par_iter()
        .map(|source| Ok((source.clone(), reach_from(graph, source)?)))
        .collect()
}

/// Computes, for every node, the full member set of its cluster.
///
/// For directed graphs a cluster is a strongly-connected component; for
/// undirected graphs it is a connected component. Unlike [`accessibility`],
/// every node is a member of its own cluster, so the node always appears in
/// its own set.
///
/// # Errors
///
/// Same failure surface as [`accessibility`].
pub fn mutual_accessibility<N>(graph: &Graph<N>) -> Result<AccessMap<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut map = AccessMap::with_capacity(graph.node_count());
    for cluster in components(graph)? {
        let members: HashSet<N> = cluster.iter().cloned().collect();
        for node in cluster {
            map.insert(node, members.clone());
        }
    }
    Ok(map)
}

/// Partitions the graph into mutually-reachable clusters.
///
/// Every node lands in exactly one cluster; members are listed in node
/// insertion order. Directed graphs are partitioned into strongly-connected
/// components via iterative two-pass Kosaraju in O(V+E); an undirected
/// adjacency view is its own transpose, so the same passes yield connected
/// components.
///
/// # Errors
///
/// Same failure surface as [`accessibility`].
pub fn components<N>(graph: &Graph<N>) -> Result<Vec<Vec<N>>>
where
    N: Eq + Hash + Clone + Debug,
{
    let n = graph.node_count();
    debug!(nodes = n, edges = graph.edge_count(), "partitioning into clusters");

    // Resolve ids to dense indices once; the passes below work on indices.
    let order: Vec<&N> = graph.nodes().collect();
    let index: HashMap<&N, usize> = order
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i))
        .collect();

    let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(n);
    for id in &order {
        let mut nbrs = Vec::new();
        for v in graph.neighbors(id).map_err(|_| Error::dangling_neighbor(*id))? {
            let vi = *index.get(v).ok_or_else(|| Error::dangling_neighbor(v))?;
            nbrs.push(vi);
        }
        adjacency.push(nbrs);
    }

    // First pass: finishing order via an explicit stack of (node, iterator).
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut stack = vec![(start, adjacency[start].iter())];

        while let Some((u, mut it)) = stack.pop() {
            if let Some(&v) = it.next() {
                // Put the node back with its advanced iterator.
                stack.push((u, it));
                if !visited[v] {
                    visited[v] = true;
                    stack.push((v, adjacency[v].iter()));
                }
            } else {
                // All neighbors explored, record finishing order.
                finish_order.push(u);
            }
        }
    }

    // Second pass: sweep the transpose in reverse finishing order.
    let mut transpose = vec![Vec::<usize>::new(); n];
    for (u, nbrs) in adjacency.iter().enumerate() {
        for &v in nbrs {
            transpose[v].push(u);
        }
    }

    let mut component = vec![usize::MAX; n];
    let mut component_count = 0usize;
    let mut frontier = Worklist::new();
    for &start in finish_order.iter().rev() {
        if component[start] != usize::MAX {
            continue;
        }
        component[start] = component_count;
        frontier.push(start);
        while let Some(u) = frontier.pop() {
            for &v in &transpose[u] {
                if component[v] == usize::MAX {
                    component[v] = component_count;
                    frontier.push(v);
                }
            }
        }
        component_count += 1;
        debug_assert!(frontier.is_empty());
    }

    // Fill clusters in node insertion order so member order is stable.
    let mut clusters: Vec<Vec<N>> = vec![Vec::new(); component_count];
    for (i, id) in order.iter().enumerate() {
        clusters[component[i]].push((*id).clone());
    }
    Ok(clusters)
}

/// Walks the frontier outward from `source`, returning every node reached
/// via at least one edge traversal.
fn reach_from<N>(graph: &Graph<N>, source: &N) -> Result<HashSet<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    let mut reached = HashSet::new();
    let mut frontier = Worklist::with_capacity(16);
    frontier.extend(adjacency_of(graph, source)?.iter().cloned());

    while let Some(node) = frontier.pop() {
        if reached.contains(&node) {
            continue;
        }
        frontier.extend(adjacency_of(graph, &node)?.iter().cloned());
        reached.insert(node);
    }
    Ok(reached)
}

/// Reads a node's adjacency slice, surfacing a missing entry as the
/// internal-consistency failure it is rather than a caller error.
fn adjacency_of<'g, N>(graph: &'g Graph<N>, id: &N) -> Result<&'g [N]>
where
    N: Eq + Hash + Clone + Debug,
{
    graph.neighbors(id).map_err(|_| Error::dangling_neighbor(id))
}
