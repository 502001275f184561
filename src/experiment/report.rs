//! Results of one harness invocation.

use std::time::Duration;

use super::algorithm::Algorithm;
use super::stats::AggregateStats;
use crate::cluster::{ClusterBreakdown, Clustering};
use crate::graph::NodeId;

/// Score and optimization time of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    pub score: u64,
    pub elapsed: Duration,
}

/// All runs of one algorithm plus their summary.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    /// One record per run, in run order.
    pub runs: Vec<RunRecord>,
    pub stats: AggregateStats,
    /// Clustering of the first run that reached `stats.best`.
    pub best_clustering: Option<Clustering>,
}

impl AlgorithmReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        runs: Vec<RunRecord>,
        best_clustering: Option<Clustering>,
    ) -> Self {
        let stats = AggregateStats::from_runs(&runs);
        Self {
            algorithm,
            runs,
            stats,
            best_clustering,
        }
    }

    /// Scores in run order.
    pub fn scores(&self) -> Vec<u64> {
        self.runs.iter().map(|r| r.score).collect()
    }

    /// Elapsed times in seconds, in run order.
    pub fn times(&self) -> Vec<f64> {
        self.runs.iter().map(|r| r.elapsed.as_secs_f64()).collect()
    }
}

/// The greedy construction with its per-cluster score detail.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalClustering {
    pub clustering: Clustering,
    pub score: u64,
    pub breakdown: Vec<ClusterBreakdown>,
    /// Nodes the greedy builder could not place.
    pub unassigned: Vec<NodeId>,
}

/// Self-contained output of [`Experiment::run`](super::Experiment::run).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    pub iterations: usize,
    pub runs: usize,
    /// Per-algorithm results in the configured order.
    pub algorithms: Vec<AlgorithmReport>,
    pub final_clustering: FinalClustering,
}

impl ExperimentReport {
    pub fn algorithm(&self, algorithm: Algorithm) -> Option<&AlgorithmReport> {
        self.algorithms.iter().find(|r| r.algorithm == algorithm)
    }

    /// Score series of `algorithm`; empty if it was not run.
    pub fn scores(&self, algorithm: Algorithm) -> Vec<u64> {
        self.algorithm(algorithm)
            .map(AlgorithmReport::scores)
            .unwrap_or_default()
    }

    /// Time series (seconds) of `algorithm`; empty if it was not run.
    pub fn times(&self, algorithm: Algorithm) -> Vec<f64> {
        self.algorithm(algorithm)
            .map(AlgorithmReport::times)
            .unwrap_or_default()
    }

    pub fn stats(&self, algorithm: Algorithm) -> Option<AggregateStats> {
        self.algorithm(algorithm).map(|r| r.stats)
    }
}
