use thiserror::Error;

/// Top-level error type for the polydie kernel.
#[derive(Debug, Error)]
pub enum PolydieError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while deriving a die model or composing a die.
///
/// All of these are fatal at shape-initialization time: they indicate a
/// defect in the fixed shape definition, not a runtime condition.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("edge {edge} borders {count} faces, expected exactly 2")]
    NonManifoldEdge { edge: usize, count: usize },

    #[error("discovered {found} faces, expected {expected}")]
    FaceCountMismatch { expected: usize, found: usize },

    #[error("degenerate vertex {vertex}: {reason}")]
    DegenerateVertex { vertex: usize, reason: String },

    #[error("result table of length {found} is not a permutation of 1..={expected}")]
    ResultsNotPermutation { expected: usize, found: usize },
}

/// Errors related to geometric parameters and computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("rounding radius must be positive, got {0}")]
    InvalidRounding(f64),

    #[error("edge detail must be at least 1, got {0}")]
    InvalidEdgeDetail(usize),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological lookups.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`PolydieError`].
pub type Result<T> = std::result::Result<T, PolydieError>;
