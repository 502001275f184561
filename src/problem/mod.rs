//! Search problem abstraction shared by the refiners.
//!
//! [`LocalSearchRunner`](crate::local::LocalSearchRunner) and
//! [`SaRunner`](crate::sa::SaRunner) only need a score and a way to draw a
//! neighbor. [`ClusteringProblem`] provides both for capacitated clustering.

mod clustering;
mod types;

pub use clustering::ClusteringProblem;
pub use types::SearchProblem;
