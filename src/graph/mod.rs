//! Graph model and weight evaluation.
//!
//! A [`GraphModel`] is a read-only view of weighted nodes and weighted
//! undirected edges. Edges are keyed by [`EdgeKey`], a canonical unordered
//! pair, so lookup and insertion never depend on the order in which the
//! endpoints were given.
//!
//! Cluster weights are checked against [`Bounds`], the `[L, U]` capacity
//! window every cluster is expected to respect.

mod model;
mod types;

pub use model::{GraphBuilder, GraphModel};
pub use types::{Bounds, EdgeKey, NodeId};
