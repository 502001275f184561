//! Greedy construction heuristic.
//!
//! Single pass, no backtracking: nodes are visited by descending weight and
//! each goes into the first cluster that can take it without breaking the
//! capacity window. Output is fully deterministic for a given graph, bounds
//! and cluster count.

mod builder;

pub use builder::{GreedyBuilder, GreedyOutcome};
