//! # `graph-access` - Graph Connectivity and Accessibility Analysis
//!
//! A small library for answering "what can this node reach?" over directed
//! or undirected graphs: per-node reachable sets ("accessibility") and the
//! partition of nodes into mutually-reachable clusters (strongly-connected
//! components for directed graphs, connected components for undirected).
//!
//! ## Stack Safety
//!
//! Every traversal keeps its frontier in an explicit heap-allocated
//! work-list, never in call-stack recursion, so visit depth stays constant
//! no matter how long or deep the graph is. A 2000+ node chain walks in
//! O(nodes + edges) per source without touching any recursion limit. The
//! strongly-connected-component pass is an iterative two-pass Kosaraju built
//! on the same frontier discipline.
//!
//! ## Architecture
//!
//! 1. **Graph store** ([`Graph`]): nodes and edges over arbitrary hashable
//!    identifiers, with an insertion-ordered adjacency view. Every edge
//!    endpoint is validated at insertion and nodes are never removed, so the
//!    adjacency view can be read without re-validation.
//!
//! 2. **Accessibility engine** ([`access`]): pure functions over a graph
//!    snapshot. Nothing is cached between calls and the store is never
//!    mutated during computation, so independent calls may run concurrently
//!    against the same graph (the optional `parallel` feature fans per-node
//!    walks across rayon).
//!
//! ## Example
//!
//! ```rust
//! use graph_access::{accessibility, Graph};
//!
//! let mut gr = Graph::directed();
//! gr.add_nodes(0..3);
//! gr.add_edge(0, 1)?;
//! gr.add_edge(1, 2)?;
//!
//! let access = accessibility(&gr)?;
//! assert!(access[&0].contains(&2));
//! assert!(access[&2].is_empty());
//! # Ok::<(), graph_access::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod access;
pub mod error;
pub mod graph;

pub use access::{accessibility, components, mutual_accessibility, AccessMap};
#[cfg(feature = "parallel")]
pub use access::par_accessibility;
pub use error::{Error, Result};
pub use graph::Graph;
