//! Local search configuration.

/// Configuration parameters for Local Search.
///
/// # Examples
///
/// ```
/// use u_capclust::local::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(1000)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Number of neighbor evaluations. 0 returns the initial solution.
    pub max_iterations: usize,
    /// Random seed (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
