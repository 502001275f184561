//! Read-only graph view and weight evaluation.

use std::collections::{BTreeMap, HashMap};

use super::types::{Bounds, EdgeKey, NodeId};
use crate::cluster::{Cluster, Clustering};

/// Weighted nodes and weighted undirected edges.
///
/// Nodes iterate in ascending [`NodeId`] order, which is the tie-break the
/// greedy builder relies on for reproducible output.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: BTreeMap<NodeId, u64>,
    edges: HashMap<EdgeKey, u64>,
    // Symmetric lookup table derived from `edges`; both directions hold the same weight.
    adjacency: HashMap<NodeId, HashMap<NodeId, u64>>,
}

impl GraphModel {
    /// Creates a graph from node and edge weight mappings.
    ///
    /// Repeated keys overwrite earlier ones. Since [`EdgeKey`] is canonical,
    /// an edge given under both orderings ends up stored once.
    pub fn new(
        nodes: impl IntoIterator<Item = (NodeId, u64)>,
        edges: impl IntoIterator<Item = (EdgeKey, u64)>,
    ) -> Self {
        let nodes: BTreeMap<NodeId, u64> = nodes.into_iter().collect();
        let edges: HashMap<EdgeKey, u64> = edges.into_iter().collect();

        let mut adjacency: HashMap<NodeId, HashMap<NodeId, u64>> = HashMap::new();
        for (key, &weight) in &edges {
            let (a, b) = key.endpoints();
            adjacency
                .entry(a.clone())
                .or_default()
                .insert(b.clone(), weight);
            adjacency
                .entry(b.clone())
                .or_default()
                .insert(a.clone(), weight);
        }

        Self {
            nodes,
            edges,
            adjacency,
        }
    }

    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes with their weights, in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, u64)> {
        self.nodes.iter().map(|(id, &w)| (id, w))
    }

    /// Edges with their weights, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, u64)> {
        self.edges.iter().map(|(key, &w)| (key, w))
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Weight of a node; 0 for ids not in the graph.
    pub fn node_weight(&self, id: &NodeId) -> u64 {
        self.nodes.get(id).copied().unwrap_or(0)
    }

    /// Weight of the edge between `a` and `b` in either direction; 0 if absent.
    pub fn edge_weight(&self, a: &NodeId, b: &NodeId) -> u64 {
        self.adjacency
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all node weights, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.nodes.values().fold(0u64, |acc, &w| acc.saturating_add(w))
    }

    /// Sum of member weights, counting unknown ids as 0. Saturates at `u64::MAX`.
    pub fn cluster_weight(&self, cluster: &Cluster) -> u64 {
        cluster
            .members()
            .iter()
            .fold(0u64, |acc, id| acc.saturating_add(self.node_weight(id)))
    }

    /// Weight of every cluster, in clustering order.
    pub fn cluster_weights(&self, clustering: &Clustering) -> Vec<u64> {
        clustering
            .clusters()
            .iter()
            .map(|c| self.cluster_weight(c))
            .collect()
    }

    /// True iff every cluster's weight lies within `bounds`.
    ///
    /// Empty clusters are checked too: their weight is 0, so they only pass
    /// when the lower bound is 0.
    pub fn is_feasible(&self, clustering: &Clustering, bounds: Bounds) -> bool {
        clustering
            .clusters()
            .iter()
            .all(|c| bounds.contains(self.cluster_weight(c)))
    }
}

/// Incremental construction of a [`GraphModel`].
///
/// ```
/// use u_capclust::graph::GraphModel;
///
/// let graph = GraphModel::builder()
///     .add_node("A", 5)
///     .add_node("B", 5)
///     .add_edge("A", "B", 10)
///     .build();
/// assert_eq!(graph.edge_weight(&"B".into(), &"A".into()), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<(NodeId, u64)>,
    edges: Vec<(EdgeKey, u64)>,
}

impl GraphBuilder {
    pub fn add_node(mut self, id: impl Into<NodeId>, weight: u64) -> Self {
        self.nodes.push((id.into(), weight));
        self
    }

    /// Adds an undirected edge. Re-adding the same pair in either order
    /// replaces the previous weight.
    pub fn add_edge(mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, weight: u64) -> Self {
        self.edges.push((EdgeKey::new(a, b), weight));
        self
    }

    pub fn build(self) -> GraphModel {
        GraphModel::new(self.nodes, self.edges)
    }
}
