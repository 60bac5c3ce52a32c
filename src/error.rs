//! Error types for the censtrend library.

use thiserror::Error;

/// Result type alias for trend-analysis operations.
pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors that can occur during classification and dispatch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Dimension mismatch between parallel input slices.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Recensoring was requested for data without a single non-detect.
    #[error("no censored observations: recensoring requires at least one detection limit")]
    NoCensoredObservations,

    /// Too few distinct season groups for a group-difference test.
    #[error("insufficient season groups: need at least {needed}, got {got}")]
    InsufficientGroups { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An external statistical estimator failed.
    #[error("estimator failure: {0}")]
    Estimator(String),
}
