//! Capacitated graph clustering.
//!
//! Partitions a weighted node set into `k` clusters whose total node weight
//! must lie within `[L, U]`, maximizing the weight of edges kept inside
//! clusters. The problem is NP-hard; this crate provides heuristics:
//!
//! - **Greedy construction**: deterministic first-fit by descending weight.
//! - **Local Search**: strict hill climbing over random feasible swaps.
//! - **Simulated Annealing (SA)**: metropolis acceptance with pluggable
//!   cooling schedules.
//! - **Experiment harness**: repeated independent runs per algorithm with
//!   best / mean / standard deviation / mean time statistics.
//!
//! # Architecture
//!
//! [`graph`] and [`cluster`] hold the data model and the objective.
//! [`greedy`] and [`perturb`] build and modify clusterings. The refiners in
//! [`local`] and [`sa`] are generic over [`problem::SearchProblem`], which
//! [`problem::ClusteringProblem`] implements. [`experiment`] drives it all
//! and returns a self-contained report; no state is kept between calls.

pub mod cluster;
pub mod error;
pub mod experiment;
pub mod graph;
pub mod greedy;
pub mod local;
pub mod perturb;
pub mod problem;
pub mod random;
pub mod sa;

pub use error::{ClusterError, Result};
