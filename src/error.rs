//! Error types for the mechanics kernel
//!
//! Every error here is a caller-supplied invalid configuration or input.
//! Nothing is retried: construction errors stop a demo from starting, and a
//! degenerate per-tick sample is rejected for that tick only.

use thiserror::Error;

/// Result alias for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// Errors raised by the geometry and lever computations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// A zero-length vector was used as a projection direction
    #[error("projection direction has zero length")]
    DegenerateDirection,

    /// A zero-length vector was normalized
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// A query point coincides with the circle center
    #[error("query position coincides with the circle center")]
    DegeneratePosition,

    /// Lever ratios are not pairwise distinct
    #[error("lever points must be different (fulcrum {fulcrum}, effort {effort}, load {load})")]
    DegeneratePoints { fulcrum: f64, effort: f64, load: f64 },

    /// A lever ratio lies outside [0, 1]
    #[error("lever {name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },

    /// Beam length must be positive and finite
    #[error("lever length must be positive, got {0}")]
    InvalidLength(f64),

    /// Channel half-length must be positive and finite
    #[error("channel reach must be positive, got {0}")]
    InvalidReach(f64),
}
