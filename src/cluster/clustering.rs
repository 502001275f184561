//! Cluster and clustering containers.

use crate::graph::NodeId;

/// A group of node ids. Member order does not affect the score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    members: Vec<NodeId>,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members<I, T>(members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.members.contains(id)
    }

    pub fn push(&mut self, id: NodeId) {
        self.members.push(id);
    }
}

/// An ordered collection of `k` clusters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clustering {
    clusters: Vec<Cluster>,
}

impl Clustering {
    /// Creates `k` empty clusters.
    pub fn with_count(k: usize) -> Self {
        Self {
            clusters: vec![Cluster::default(); k],
        }
    }

    pub fn from_clusters(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn cluster(&self, index: usize) -> Option<&Cluster> {
        self.clusters.get(index)
    }

    /// Number of clusters (`k`), empty ones included.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of assigned nodes across all clusters.
    pub fn assigned_count(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Index of the cluster holding `id`, if any.
    pub fn cluster_of(&self, id: &NodeId) -> Option<usize> {
        self.clusters.iter().position(|c| c.contains(id))
    }

    pub(crate) fn cluster_mut(&mut self, index: usize) -> &mut Cluster {
        &mut self.clusters[index]
    }

    /// Exchanges member `a_pos` of cluster `a` with member `b_pos` of cluster `b`.
    ///
    /// Both clusters must differ and both positions must be in range.
    pub(crate) fn swap_members(&mut self, a: usize, a_pos: usize, b: usize, b_pos: usize) {
        debug_assert_ne!(a, b);
        let (lo, hi, lo_pos, hi_pos) = if a < b {
            (a, b, a_pos, b_pos)
        } else {
            (b, a, b_pos, a_pos)
        };
        let (head, tail) = self.clusters.split_at_mut(hi);
        std::mem::swap(
            &mut head[lo].members[lo_pos],
            &mut tail[0].members[hi_pos],
        );
    }
}
