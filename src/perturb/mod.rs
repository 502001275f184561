//! Random swap perturbation with a capacity check.
//!
//! Two cluster indices are drawn uniformly with replacement. When they
//! differ and both clusters are non-empty, one random member of each is
//! exchanged. The candidate is kept only if every cluster weight still lies
//! within the bounds; otherwise the input comes back unchanged. The move is
//! never retried, so a rejected draw is a plain no-op.

use rand::Rng;

use crate::cluster::Clustering;
use crate::graph::{Bounds, GraphModel};

/// Generate-and-test swap operator over a fixed graph and bounds.
#[derive(Debug, Clone, Copy)]
pub struct SwapPerturbation<'a> {
    graph: &'a GraphModel,
    bounds: Bounds,
}

impl<'a> SwapPerturbation<'a> {
    pub fn new(graph: &'a GraphModel, bounds: Bounds) -> Self {
        Self { graph, bounds }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Attempts one swap. Returns `None` when there are no clusters or the
    /// candidate breaks the bounds.
    ///
    /// A draw that picks the same cluster twice (or an empty cluster) leaves
    /// the clustering as is; that unchanged candidate is still returned when
    /// it is itself feasible.
    pub fn try_swap<R: Rng>(
        &self,
        clustering: &Clustering,
        rng: &mut R,
    ) -> Option<Clustering> {
        let k = clustering.len();
        if k == 0 {
            return None;
        }

        let a = rng.random_range(0..k);
        let b = rng.random_range(0..k);

        let mut candidate = clustering.clone();
        let (len_a, len_b) = (clustering.clusters()[a].len(), clustering.clusters()[b].len());
        if a != b && len_a > 0 && len_b > 0 {
            let pos_a = rng.random_range(0..len_a);
            let pos_b = rng.random_range(0..len_b);
            candidate.swap_members(a, pos_a, b, pos_b);
        }

        if self.graph.is_feasible(&candidate, self.bounds) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Returns a feasible neighbor of `clustering`, or a copy of it when the
    /// swap is rejected.
    pub fn apply<R: Rng>(&self, clustering: &Clustering, rng: &mut R) -> Clustering {
        self.try_swap(clustering, rng)
            .unwrap_or_else(|| clustering.clone())
    }
}
