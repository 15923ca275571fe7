use thiserror::Error;

/// Top-level error type for the polyloom engine.
#[derive(Debug, Error)]
pub enum PolyloomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to shape topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("shape not found in store")]
    ShapeNotFound,

    #[error("a closed shape needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to shape operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PolyloomError`].
pub type Result<T> = std::result::Result<T, PolyloomError>;
