//! Error type shared by the model, the hull, and the marcher.
//!
//! Policy
//! - No fallback hull: every failure is returned to the caller unchanged.
//! - `DegenerateGeometry` is an algorithmic outcome (bad input cloud); every
//!   other variant is a caller contract violation.

use thiserror::Error;

/// Errors raised by geometry primitives, the point cloud, the hull and the marcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// A point or parameter the operation cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An angle was requested to or from a zero-length vector.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The target is in a state that forbids the operation (e.g. a closed hull).
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// The cloud admits no hull: fewer than 3 points, or no candidate wraps the
    /// current edge (colinear remainder).
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl HullError {
    /// True for errors caused by misuse of the API rather than by the input cloud.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, HullError::DegenerateGeometry(_))
    }
}
