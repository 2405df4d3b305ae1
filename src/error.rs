//! Error type shared by the graph layer, the engines and the coordinator.

use thiserror::Error;

/// Errors raised when a graph, labeling or engine is built from
/// inconsistent inputs.
#[derive(Debug, Error)]
pub enum DrdError {
    /// The graph has no vertices.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A vertex id is outside `0..order`.
    #[error("vertex {vertex} out of range for graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },

    /// An edge from a vertex to itself.
    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),

    /// Edge probability outside `[0, 1]`.
    #[error("edge probability {0} outside [0, 1]")]
    InvalidProbability(f64),

    /// A labeling whose length differs from the graph order.
    #[error("expected {expected} genes, found {found}")]
    GeneCountMismatch { expected: usize, found: usize },

    /// An integer that is not one of -1, 0, 2, 3.
    #[error("invalid label {0}")]
    InvalidLabel(i32),

    /// Heuristic selector outside 1..=3.
    #[error("unknown construction heuristic {0} (expected 1, 2 or 3)")]
    UnknownHeuristic(u8),

    /// Rejected engine configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed graph text.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DrdError>;
