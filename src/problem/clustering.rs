//! Capacitated clustering as a [`SearchProblem`].

use rand::Rng;

use super::types::SearchProblem;
use crate::cluster::{self, Clustering};
use crate::graph::{Bounds, GraphModel};
use crate::perturb::SwapPerturbation;

/// Binds a graph and its bounds to the swap neighborhood and the
/// intra-cluster edge score.
#[derive(Debug, Clone, Copy)]
pub struct ClusteringProblem<'a> {
    graph: &'a GraphModel,
    perturbation: SwapPerturbation<'a>,
}

impl<'a> ClusteringProblem<'a> {
    pub fn new(graph: &'a GraphModel, bounds: Bounds) -> Self {
        Self {
            graph,
            perturbation: SwapPerturbation::new(graph, bounds),
        }
    }

    pub fn graph(&self) -> &'a GraphModel {
        self.graph
    }

    pub fn bounds(&self) -> Bounds {
        self.perturbation.bounds()
    }
}

impl SearchProblem for ClusteringProblem<'_> {
    type Solution = Clustering;

    fn score(&self, clustering: &Clustering) -> u64 {
        cluster::score(self.graph, clustering)
    }

    fn neighbor<R: Rng>(&self, clustering: &Clustering, rng: &mut R) -> Clustering {
        self.perturbation.apply(clustering, rng)
    }
}
