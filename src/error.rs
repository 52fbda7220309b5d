use thiserror::Error;

/// Top-level error type for the curve tessellation engine.
#[derive(Debug, Error)]
pub enum CurvetessError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised by structurally invalid curve definitions.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degree must be at least 1 (linear), got {degree}")]
    DegreeTooLow { degree: usize },

    #[error("degree {degree} exceeds control point count - 1 ({point_count} points)")]
    DegreeTooHigh { degree: usize, point_count: usize },

    #[error("bad knot vector length: expected {expected}, got {actual}")]
    KnotCount { expected: usize, actual: usize },

    #[error("bad weight vector length: expected {expected}, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    #[error("knot vector decreases at index {index}")]
    DecreasingKnots { index: usize },

    #[error("weight {index} = {weight} must be positive")]
    NonPositiveWeight { index: usize, weight: f64 },
}

/// Errors related to tessellation parameters.
#[derive(Debug, Error, PartialEq)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`CurvetessError`].
pub type Result<T> = std::result::Result<T, CurvetessError>;
