//! Harness configuration.

use super::algorithm::Algorithm;
use crate::error::{ClusterError, Result};
use crate::sa::SaConfig;

/// Configuration for [`Experiment`](super::Experiment).
///
/// The iteration budget and the number of runs are passed to
/// [`Experiment::run`](super::Experiment::run) directly.
///
/// # Examples
///
/// ```
/// use u_capclust::experiment::{Algorithm, ExperimentConfig};
///
/// let config = ExperimentConfig::default()
///     .with_cluster_count(3)
///     .with_algorithms(vec![Algorithm::LocalSearch])
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Number of clusters `k`.
    pub cluster_count: usize,

    /// Algorithms to run, in reporting order.
    pub algorithms: Vec<Algorithm>,

    /// Annealing parameters. `max_iterations` and `seed` are overridden by
    /// the harness.
    pub annealing: SaConfig,

    /// Seed for the random source shared by all runs (None for random).
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            cluster_count: 2,
            algorithms: Algorithm::ALL.to_vec(),
            annealing: SaConfig::default(),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn with_cluster_count(mut self, k: usize) -> Self {
        self.cluster_count = k;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Selects algorithms by name, failing on the first unknown one.
    pub fn with_algorithm_names<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self> {
        self.algorithms = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Algorithm>>>()?;
        Ok(self)
    }

    pub fn with_annealing(mut self, annealing: SaConfig) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. The annealing settings are only checked
    /// when [`Algorithm::SimulatedAnnealing`] is selected.
    pub fn validate(&self) -> Result<()> {
        if self.cluster_count == 0 {
            return Err(ClusterError::InvalidClusterCount(self.cluster_count));
        }
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(algorithm) {
                return Err(ClusterError::InvalidConfig(format!(
                    "algorithm {algorithm} selected more than once"
                )));
            }
        }
        if !self.algorithms.contains(&Algorithm::SimulatedAnnealing) {
            return Ok(());
        }
        self.annealing
            .validate()
            .map_err(|msg| ClusterError::InvalidConfig(format!("annealing: {msg}")))
    }
}
