//! Error type shared by the whole crate.

use thiserror::Error;

/// Errors raised by graph configuration and the experiment harness.
///
/// The optimizers themselves never fail: an infeasible perturbation
/// degrades to a no-op and a degenerate bound pair (`L > U`) simply
/// yields a mostly empty clustering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("{which} bound must be non-negative, got {value}")]
    NegativeBound { which: &'static str, value: i64 },

    #[error("cluster count must be at least 1, got {0}")]
    InvalidClusterCount(usize),

    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ClusterError>;
