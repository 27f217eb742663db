use thiserror::Error;

/// Top-level error type for the Planix kernel.
#[derive(Debug, Error)]
pub enum PlanixError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to region and offset operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to mesh construction.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("mesh construction failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlanixError`].
pub type Result<T> = std::result::Result<T, PlanixError>;
