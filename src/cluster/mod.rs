//! Clusters, clusterings and the objective score.
//!
//! A [`Clustering`] is a fixed-size ordered collection of [`Cluster`]s.
//! Its score is the sum of edge weights over every unordered pair of
//! members that share a cluster; see [`score`].

mod clustering;
pub mod score;

pub use clustering::{Cluster, Clustering};
pub use score::{breakdown, cluster_score, score, ClusterBreakdown};
