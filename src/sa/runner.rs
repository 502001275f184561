//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. `current = initial`, `best_score = score(initial)`, `T = T_0`
//! 2. For each iteration:
//!    a. Draw a neighbor of `current`, `delta = score(neighbor) - score(current)`
//!    b. Accept if `delta > 0`, or with probability `exp(delta / T)`
//!    c. On acceptance, `best_score = max(best_score, score(current))`
//!    d. Cool the temperature
//! 3. Return the best solution seen

use rand::Rng;

use super::config::{CoolingSchedule, SaConfig};
use crate::problem::SearchProblem;
use crate::random::rng_from;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Score of the best solution.
    pub best_score: u64,

    /// Score of the solution the walk ended on.
    pub final_score: u64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best score before the first iteration and after every iteration.
    pub score_history: Vec<u64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`, seeding a generator from the config.
    ///
    /// The configuration must be valid; see [`SaConfig::validate`].
    pub fn run<P: SearchProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
    ) -> SaResult<P::Solution> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, initial, config, &mut rng)
    }

    /// Runs SA drawing from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<P: SearchProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
    ) -> SaResult<P::Solution> {
        let mut current_score = problem.score(&initial);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut score_history = Vec::with_capacity(config.max_iterations + 1);
        score_history.push(best_score);

        for step in 0..config.max_iterations {
            let neighbor = problem.neighbor(&current, rng);
            let neighbor_score = problem.score(&neighbor);
            let delta = neighbor_score as f64 - current_score as f64;

            // Metropolis acceptance criterion
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                let probability = (delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = neighbor;
                current_score = neighbor_score;
                accepted_moves += 1;

                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                }
            }

            score_history.push(best_score);

            temperature = cool(temperature, config, step);
        }

        tracing::debug!(
            best_score,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        SaResult {
            best,
            best_score,
            final_score: current_score,
            iterations: config.max_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            score_history,
        }
    }
}

/// Apply the cooling schedule to compute the next temperature.
fn cool(temperature: f64, config: &SaConfig, step: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,

        CoolingSchedule::Linear => {
            if config.max_iterations == 0 {
                config.min_temperature
            } else {
                let t = config.initial_temperature
                    - (step + 1) as f64 * (config.initial_temperature - config.min_temperature)
                        / config.max_iterations as f64;
                t.max(config.min_temperature)
            }
        }

        CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
    }
}
