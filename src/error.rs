use thiserror::Error;

/// Top-level error type for the rounded path generator.
#[derive(Debug, Error)]
pub enum RoundPathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while mapping host parameters onto the geometry core.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("database unit must be positive and finite, got {0}")]
    InvalidDatabaseUnit(f64),

    #[error("parameter {parameter} is not finite: {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`RoundPathError`].
pub type Result<T> = std::result::Result<T, RoundPathError>;
