//! Error types for construction-time validation.
//!
//! Drawing and hit-testing never fail: geometric degeneracies and projection
//! failures are normalized to "skip this shape". Errors exist only at the
//! construction seam, so a partially-built shape is never observable.

use thiserror::Error;

/// Failure to parse a color from a hex string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 3 or 6 hex digits, got {0}")]
    BadLength(usize),

    #[error("invalid hex digit in color {0:?}")]
    BadDigit(String),
}

/// Invalid input handed to a shape constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("at least {min} vertices required, got {got}")]
    TooFewVertices { min: usize, got: usize },

    #[error("sky coordinate is not finite")]
    NonFiniteCoordinate,

    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("semi-axes must be positive, finite and ordered, got {major} x {minor}")]
    InvalidAxes { major: f64, minor: f64 },

    #[error("position angle is not finite")]
    NonFiniteAngle,
}
