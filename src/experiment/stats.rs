//! Aggregate statistics over repeated runs.

use std::time::Duration;

use super::report::RunRecord;

/// Summary of one algorithm's runs.
///
/// All fields are zero when there were no runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateStats {
    /// Highest score over all runs.
    pub best: u64,
    /// Mean score.
    pub mean: f64,
    /// Population standard deviation of the scores (divides by `n`).
    pub std_dev: f64,
    /// Mean elapsed optimization time.
    pub mean_time: Duration,
}

impl AggregateStats {
    pub fn from_runs(runs: &[RunRecord]) -> Self {
        if runs.is_empty() {
            return Self::default();
        }

        let n = runs.len() as f64;
        let best = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let mean = runs.iter().map(|r| r.score as f64).sum::<f64>() / n;
        let variance = runs
            .iter()
            .map(|r| {
                let d = r.score as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let mean_time = runs.iter().map(|r| r.elapsed.as_secs_f64()).sum::<f64>() / n;

        Self {
            best,
            mean,
            std_dev: variance.sqrt(),
            mean_time: Duration::from_secs_f64(mean_time),
        }
    }
}
