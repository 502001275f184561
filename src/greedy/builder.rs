//! First-fit-decreasing construction.
//!
//! # Algorithm
//!
//! 1. Sort nodes by descending weight, ties by ascending id
//! 2. Start with `k` empty clusters of weight 0
//! 3. For each node, place it into the first cluster `i` with
//!    `w(i) + w <= U` and (`w(i) + w >= L` or cluster `i` empty)
//! 4. A node that fits nowhere stays unassigned
//!
//! Dropping unplaceable nodes is part of the heuristic, not an error, so the
//! resulting clustering can weigh less than the whole graph.

use crate::cluster::Clustering;
use crate::graph::{Bounds, GraphModel, NodeId};

/// Output of the greedy builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyOutcome {
    pub clustering: Clustering,
    /// Nodes that fit no cluster, in visiting order.
    pub unassigned: Vec<NodeId>,
}

impl GreedyOutcome {
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

/// Deterministic greedy clustering builder.
#[derive(Debug, Clone, Copy)]
pub struct GreedyBuilder {
    cluster_count: usize,
}

impl Default for GreedyBuilder {
    fn default() -> Self {
        Self { cluster_count: 2 }
    }
}

impl GreedyBuilder {
    pub fn new(cluster_count: usize) -> Self {
        Self { cluster_count }
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Builds a clustering of `graph` under `bounds`.
    pub fn build(&self, graph: &GraphModel, bounds: Bounds) -> GreedyOutcome {
        // `nodes()` yields ascending ids and the sort is stable, so equal
        // weights keep id order.
        let mut order: Vec<(&NodeId, u64)> = graph.nodes().collect();
        order.sort_by(|a, b| b.1.cmp(&a.1));

        let mut clustering = Clustering::with_count(self.cluster_count);
        let mut weights = vec![0u64; self.cluster_count];
        let mut unassigned = Vec::new();

        for (id, weight) in order {
            let slot = (0..self.cluster_count).find(|&i| {
                let candidate = weights[i].saturating_add(weight);
                let empty = clustering.clusters()[i].is_empty();
                candidate <= bounds.upper && (candidate >= bounds.lower || empty)
            });

            match slot {
                Some(i) => {
                    clustering.cluster_mut(i).push(id.clone());
                    weights[i] = weights[i].saturating_add(weight);
                }
                None => unassigned.push(id.clone()),
            }
        }

        if !unassigned.is_empty() {
            tracing::debug!(
                unassigned = unassigned.len(),
                nodes = graph.node_count(),
                "greedy: some nodes fit no cluster and were left out"
            );
        }

        GreedyOutcome {
            clustering,
            unassigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{score, Cluster};

    fn four_nodes() -> GraphModel {
        GraphModel::builder()
            .add_node("A", 5)
            .add_node("B", 5)
            .add_node("C", 5)
            .add_node("D", 5)
            .add_edge("A", "B", 10)
            .add_edge("C", "D", 10)
            .add_edge("A", "C", 1)
            .build()
    }

    #[test]
    fn test_four_node_scenario() {
        let g = four_nodes();
        let bounds = Bounds::new(5, 10).unwrap();
        let out = GreedyBuilder::new(2).build(&g, bounds);

        assert!(out.is_complete());
        assert_eq!(g.cluster_weights(&out.clustering), vec![10, 10]);
        assert_eq!(
            out.clustering.clusters(),
            &[
                Cluster::from_members(["A", "B"]),
                Cluster::from_members(["C", "D"])
            ]
        );
        assert_eq!(score(&g, &out.clustering), 20);
    }

    #[test]
    fn test_deterministic() {
        let g = four_nodes();
        let bounds = Bounds::new(5, 10).unwrap();
        let builder = GreedyBuilder::new(2);
        assert_eq!(builder.build(&g, bounds), builder.build(&g, bounds));
    }

    #[test]
    fn test_heaviest_first() {
        let g = GraphModel::builder()
            .add_node("light", 1)
            .add_node("heavy", 9)
            .add_node("mid", 4)
            .build();
        let out = GreedyBuilder::new(2).build(&g, Bounds::new(0, 10).unwrap());
        assert_eq!(
            out.clustering.clusters()[0],
            Cluster::from_members(["heavy", "light"])
        );
        assert_eq!(out.clustering.clusters()[1], Cluster::from_members(["mid"]));
    }

    #[test]
    fn test_oversized_node_is_dropped() {
        let g = GraphModel::builder()
            .add_node("big", 20)
            .add_node("small", 3)
            .build();
        let out = GreedyBuilder::new(2).build(&g, Bounds::new(0, 10).unwrap());
        assert_eq!(out.unassigned, vec![NodeId::from("big")]);
        assert_eq!(out.clustering.assigned_count(), 1);
        let assigned: u64 = g.cluster_weights(&out.clustering).iter().sum();
        assert!(assigned < g.total_weight());
    }

    #[test]
    fn test_lower_bound_blocks_second_member() {
        // Second node would leave cluster 0 at 4 < L, but 0 is non-empty by then.
        let g = GraphModel::builder()
            .add_node("A", 3)
            .add_node("B", 1)
            .add_node("C", 1)
            .build();
        let out = GreedyBuilder::new(2).build(&g, Bounds::new(5, 10).unwrap());
        assert_eq!(out.clustering.clusters()[0], Cluster::from_members(["A"]));
        assert_eq!(out.clustering.clusters()[1], Cluster::from_members(["B"]));
        assert_eq!(out.unassigned, vec![NodeId::from("C")]);
    }

    #[test]
    fn test_empty_graph() {
        let out = GreedyBuilder::new(2).build(&GraphModel::default(), Bounds::new(5, 10).unwrap());
        assert_eq!(out.clustering, Clustering::with_count(2));
        assert!(out.is_complete());
    }

    #[test]
    fn test_single_node_at_upper_bound() {
        let g = GraphModel::builder().add_node("A", 10).build();
        let out = GreedyBuilder::new(2).build(&g, Bounds::new(5, 10).unwrap());
        assert_eq!(g.cluster_weights(&out.clustering), vec![10, 0]);
        assert_eq!(score(&g, &out.clustering), 0);
    }

    #[test]
    fn test_inverted_bounds_only_seed_empty_clusters() {
        let g = four_nodes();
        let out = GreedyBuilder::new(2).build(&g, Bounds::new(10, 5).unwrap());
        // Each cluster accepts one node while empty, nothing afterwards.
        assert_eq!(out.clustering.assigned_count(), 2);
        assert_eq!(out.unassigned.len(), 2);
        assert_eq!(score(&g, &out.clustering), 0);
    }
}
