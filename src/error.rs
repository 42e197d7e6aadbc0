//! Error types for graph store and accessibility operations.

use thiserror::Error;

/// The error type for graph-access operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A graph operation referenced a node id that is not in the node set.
    ///
    /// This is a caller error; there is no recovery short of fixing the
    /// input. The offending id is captured in `Debug` form.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// The adjacency view referenced a node missing from the node table.
    ///
    /// This indicates a bug in the graph store itself, never bad user
    /// input. It is fatal and must not be silently recovered.
    #[error("graph invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Builds an [`Error::UnknownNode`] from any debuggable node id.
    pub(crate) fn unknown_node<N: core::fmt::Debug>(id: &N) -> Self {
        Self::UnknownNode(format!("{id:?}"))
    }

    /// Builds an [`Error::InvariantViolation`] for an adjacency entry that
    /// references a node missing from the node table.
    pub(crate) fn dangling_neighbor<N: core::fmt::Debug>(id: &N) -> Self {
        Self::InvariantViolation(format!("adjacency references unknown node {id:?}"))
    }
}

/// A specialized Result type for graph-access operations.
pub type Result<T> = std::result::Result<T, Error>;
