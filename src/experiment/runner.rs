//! Harness execution.
//!
//! # Procedure
//!
//! For each selected algorithm, `runs` times:
//! 1. Build the greedy clustering (not timed)
//! 2. Start the timer
//! 3. Score it directly, or refine it with local search / annealing
//! 4. Stop the timer and record `(score, elapsed)`
//!
//! Then summarize each algorithm's records into [`AggregateStats`](super::AggregateStats).

use std::time::Instant;

use super::algorithm::Algorithm;
use super::config::ExperimentConfig;
use super::report::{AlgorithmReport, ExperimentReport, FinalClustering, RunRecord};
use crate::cluster::{self, Clustering};
use crate::error::Result;
use crate::graph::{Bounds, EdgeKey, GraphModel, NodeId};
use crate::greedy::GreedyBuilder;
use crate::local::LocalSearchRunner;
use crate::problem::{ClusteringProblem, SearchProblem};
use crate::random::rng_from;
use crate::sa::SaRunner;

/// Configured graph, bounds and harness settings.
#[derive(Debug, Clone, Default)]
pub struct Experiment {
    graph: GraphModel,
    bounds: Bounds,
    config: ExperimentConfig,
}

impl Experiment {
    /// Empty graph, `[0, 0]` bounds, default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExperimentConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the active graph and bounds.
    ///
    /// Fails on a negative bound, leaving the previous graph in place.
    /// `lower > upper` is accepted.
    pub fn configure(
        &mut self,
        nodes: impl IntoIterator<Item = (NodeId, u64)>,
        edges: impl IntoIterator<Item = (EdgeKey, u64)>,
        lower: i64,
        upper: i64,
    ) -> Result<()> {
        let bounds = Bounds::new(lower, upper)?;
        self.set_graph(GraphModel::new(nodes, edges), bounds);
        Ok(())
    }

    /// Replaces the active graph and bounds with prebuilt values.
    pub fn set_graph(&mut self, graph: GraphModel, bounds: Bounds) {
        if bounds.is_degenerate() {
            tracing::warn!(
                lower = bounds.lower,
                upper = bounds.upper,
                "lower bound exceeds upper bound; clusters will stay mostly empty"
            );
        }
        self.graph = graph;
        self.bounds = bounds;
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ExperimentConfig {
        &mut self.config
    }

    /// Runs every selected algorithm `runs` times with `iterations` steps each.
    #[tracing::instrument(level = "debug", name = "experiment", skip(self))]
    pub fn run(&self, iterations: usize, runs: usize) -> Result<ExperimentReport> {
        self.config.validate()?;

        tracing::info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            lower = self.bounds.lower,
            upper = self.bounds.upper,
            clusters = self.config.cluster_count,
            "starting experiment"
        );

        let builder = GreedyBuilder::new(self.config.cluster_count);
        let problem = ClusteringProblem::new(&self.graph, self.bounds);
        let annealing = self.config.annealing.clone().with_max_iterations(iterations);
        let mut rng = rng_from(self.config.seed);

        let mut reports = Vec::with_capacity(self.config.algorithms.len());
        for &algorithm in &self.config.algorithms {
            let mut records = Vec::with_capacity(runs);
            let mut best: Option<(u64, Clustering)> = None;

            for run in 0..runs {
                let initial = builder.build(&self.graph, self.bounds).clustering;

                let start = Instant::now();
                let (score, clustering) = match algorithm {
                    Algorithm::Greedy => (problem.score(&initial), initial),
                    Algorithm::LocalSearch => {
                        let result =
                            LocalSearchRunner::run_with_rng(&problem, initial, iterations, &mut rng);
                        (result.best_score, result.best)
                    }
                    Algorithm::SimulatedAnnealing => {
                        let result = SaRunner::run_with_rng(&problem, initial, &annealing, &mut rng);
                        (result.best_score, result.best)
                    }
                };
                let elapsed = start.elapsed();

                tracing::debug!(
                    algorithm = algorithm.name(),
                    run = run + 1,
                    score,
                    elapsed_secs = elapsed.as_secs_f64(),
                    "run finished"
                );

                if best.as_ref().is_none_or(|(s, _)| score > *s) {
                    best = Some((score, clustering));
                }
                records.push(RunRecord { score, elapsed });
            }

            let report = AlgorithmReport::new(algorithm, records, best.map(|(_, c)| c));
            tracing::info!(
                algorithm = algorithm.name(),
                best = report.stats.best,
                mean = report.stats.mean,
                std_dev = report.stats.std_dev,
                mean_time_secs = report.stats.mean_time.as_secs_f64(),
                "algorithm finished"
            );
            reports.push(report);
        }

        Ok(ExperimentReport {
            iterations,
            runs,
            algorithms: reports,
            final_clustering: self.final_clustering(&builder),
        })
    }

    fn final_clustering(&self, builder: &GreedyBuilder) -> FinalClustering {
        let outcome = builder.build(&self.graph, self.bounds);
        FinalClustering {
            score: cluster::score(&self.graph, &outcome.clustering),
            breakdown: cluster::breakdown(&self.graph, &outcome.clustering),
            clustering: outcome.clustering,
            unassigned: outcome.unassigned,
        }
    }
}
