//! Closed set of algorithms the harness can run.

use std::fmt;
use std::str::FromStr;

use crate::error::ClusterError;

/// Algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Score the greedy construction as is.
    Greedy,
    /// Strict hill climbing from the greedy construction.
    LocalSearch,
    /// Simulated annealing from the greedy construction.
    SimulatedAnnealing,
}

impl Algorithm {
    /// All algorithms in reporting order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Greedy,
        Algorithm::LocalSearch,
        Algorithm::SimulatedAnnealing,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "Greedy Heuristic",
            Algorithm::LocalSearch => "Local Search",
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ClusterError;

    /// Accepts the display name or a short alias, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match key.as_str() {
            "greedy" | "greedy heuristic" => Ok(Algorithm::Greedy),
            "local" | "local search" | "ls" => Ok(Algorithm::LocalSearch),
            "annealing" | "simulated annealing" | "sa" => Ok(Algorithm::SimulatedAnnealing),
            _ => Err(ClusterError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
