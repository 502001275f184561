//! Objective score: the total weight of intra-cluster edges.
//!
//! For every cluster, every unordered pair of distinct members contributes
//! the weight of the edge between them (0 when there is none). Edge lookup
//! goes through the graph's canonical pair table, so a pair is counted once
//! no matter which ordering it was inserted under.
//!
//! Sums saturate at `u64::MAX` rather than wrapping, so a clustering with
//! huge edge weights ranks at the top instead of near zero.
//!
//! Cost is `O(sum |c|^2)` over the clusters, which is fine for the small
//! graphs this crate targets.

use super::clustering::{Cluster, Clustering};
use crate::graph::{EdgeKey, GraphModel, NodeId};

/// Score contribution of a single cluster.
pub fn cluster_score(graph: &GraphModel, cluster: &Cluster) -> u64 {
    let members = cluster.members();
    let mut total = 0u64;
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            if a != b {
                total = total.saturating_add(graph.edge_weight(a, b));
            }
        }
    }
    total
}

/// Score of a whole clustering.
pub fn score(graph: &GraphModel, clustering: &Clustering) -> u64 {
    clustering
        .clusters()
        .iter()
        .map(|c| cluster_score(graph, c))
        .fold(0u64, u64::saturating_add)
}

/// Per-cluster detail of a clustering's score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterBreakdown {
    pub members: Vec<NodeId>,
    pub weight: u64,
    /// Intra-cluster edges with non-zero weight, in member order.
    pub edges: Vec<(EdgeKey, u64)>,
    pub edge_sum: u64,
}

/// Breaks a clustering's score down cluster by cluster.
pub fn breakdown(graph: &GraphModel, clustering: &Clustering) -> Vec<ClusterBreakdown> {
    clustering
        .clusters()
        .iter()
        .map(|cluster| {
            let members = cluster.members();
            let mut edges = Vec::new();
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    if a == b {
                        continue;
                    }
                    let w = graph.edge_weight(a, b);
                    if w > 0 {
                        edges.push((EdgeKey::new(a.clone(), b.clone()), w));
                    }
                }
            }
            ClusterBreakdown {
                members: members.to_vec(),
                weight: graph.cluster_weight(cluster),
                edge_sum: edges.iter().fold(0u64, |acc, &(_, w)| acc.saturating_add(w)),
                edges,
            }
        })
        .collect()
}
