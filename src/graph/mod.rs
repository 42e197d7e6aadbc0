//! A dynamic adjacency-list graph over arbitrary hashable node identifiers.
//!
//! This representation prioritizes **cheap insertion** and an adjacency view
//! that traversals can read without mutating the store:
//! - nodes live in an insertion-ordered list plus a hash-indexed adjacency map
//! - edges are recorded as ordered neighbor lists per node
//! - undirected graphs record each edge as a neighbor relation in both directions
//!
//! Nodes are never removed, so every recorded edge endpoint stays a member of
//! the node set for the lifetime of the graph.

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// A graph over node identifiers of type `N`.
///
/// `N` may be any cloneable, hashable value: integers in the reference
/// benchmark, but interned strings or richer ids work the same way. The
/// `Debug` bound exists only so errors can name the offending id.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Appends to internal structures |
/// | `add_edge` | \(O(\text{degree})\) | Checks for existence first |
/// | `neighbors` | \(O(1)\) | Returns the stored neighbor slice |
/// | `has_edge` | \(O(\text{degree})\) | Linear scan of one neighbor list |
/// | `nodes` | \(O(n)\) to drain | Insertion-order iteration |
#[derive(Debug, Clone)]
pub struct Graph<N> {
    order: Vec<N>,
    adjacency: HashMap<N, Vec<N>>,
    directed: bool,
    edge_count: usize,
}

impl<N: Eq + Hash + Clone + Debug> Graph<N> {
    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            directed: true,
            edge_count: 0,
        }
    }

    /// Creates an empty undirected graph.
    ///
    /// Every edge added to an undirected graph makes each endpoint a
    /// neighbor of the other.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::directed()
        }
    }

    /// Returns `true` for graphs created with [`Graph::directed`].
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a node to the graph.
    ///
    /// Returns `true` if the node was newly inserted. Re-adding an existing
    /// id is a no-op and keeps its neighbor list intact.
    pub fn add_node(&mut self, id: N) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Adds every node yielded by `ids`, skipping duplicates.
    pub fn add_nodes<I: IntoIterator<Item = N>>(&mut self, ids: I) {
        for id in ids {
            self.add_node(id);
        }
    }

    /// Adds an edge between `a` and `b` if it is not already present.
    ///
    /// For undirected graphs the neighbor relation is recorded in both
    /// directions. Re-adding an existing edge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if either endpoint is absent from the
    /// node set; the graph is left unchanged in that case.
    pub fn add_edge(&mut self, a: N, b: N) -> Result<()> {
        if !self.adjacency.contains_key(&a) {
            return Err(Error::unknown_node(&a));
        }
        if !self.adjacency.contains_key(&b) {
            return Err(Error::unknown_node(&b));
        }
        if self.has_edge(&a, &b) {
            return Ok(());
        }

        if self.directed || a == b {
            self.neighbor_list_mut(&a).push(b);
        } else {
            self.neighbor_list_mut(&a).push(b.clone());
            self.neighbor_list_mut(&b).push(a);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the direct successors of `id` in insertion order.
    ///
    /// For undirected graphs these are the adjacent nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` is absent.
    pub fn neighbors(&self, id: &N) -> Result<&[N]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unknown_node(id))
    }

    /// Returns `true` if `id` is a member of the node set.
    pub fn contains(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Checks if an edge exists from `from` to `to`.
    ///
    /// Unknown endpoints simply yield `false`; use [`Graph::neighbors`] when
    /// the absence of a node should surface as an error.
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|nbrs| nbrs.iter().any(|v| v == to))
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbor_list_mut(&mut self, id: &N) -> &mut Vec<N> {
        // Both call sites validate membership before reaching here.
        self.adjacency
            .get_mut(id)
            .unwrap_or_else(|| unreachable!("endpoint validated before mutation"))
    }
}
