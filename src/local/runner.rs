//! Local search execution loop.
//!
//! # Algorithm
//!
//! 1. `best = initial`, `best_score = score(initial)`
//! 2. For each iteration:
//!    a. Draw a neighbor of `best`
//!    b. If its score is strictly greater, it becomes `best`
//! 3. Return `best` after the budget is spent

use rand::Rng;

use super::config::LocalSearchConfig;
use crate::problem::SearchProblem;
use crate::random::rng_from;

/// Result of a Local Search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Score of the best solution.
    pub best_score: u64,
    /// Score of the initial solution.
    pub initial_score: u64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Number of accepted (strictly improving) moves.
    pub improving_moves: usize,
    /// Best score before the first iteration and after every iteration.
    pub score_history: Vec<u64>,
}

/// Local Search runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs local search from `initial`, seeding a generator from the config.
    pub fn run<P: SearchProblem>(
        problem: &P,
        initial: P::Solution,
        config: &LocalSearchConfig,
    ) -> LocalSearchResult<P::Solution> {
        let mut rng = rng_from(config.seed);
        Self::run_with_rng(problem, initial, config.max_iterations, &mut rng)
    }

    /// Runs `iterations` steps of local search drawing from `rng`.
    pub fn run_with_rng<P: SearchProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        iterations: usize,
        rng: &mut R,
    ) -> LocalSearchResult<P::Solution> {
        let initial_score = problem.score(&initial);
        let mut best = initial;
        let mut best_score = initial_score;
        let mut improving_moves = 0usize;

        let mut score_history = Vec::with_capacity(iterations + 1);
        score_history.push(best_score);

        for _ in 0..iterations {
            let candidate = problem.neighbor(&best, rng);
            let candidate_score = problem.score(&candidate);

            if candidate_score > best_score {
                best = candidate;
                best_score = candidate_score;
                improving_moves += 1;
            }

            score_history.push(best_score);
        }

        tracing::debug!(
            initial_score,
            best_score,
            improving_moves,
            iterations,
            "local search finished"
        );

        LocalSearchResult {
            best,
            best_score,
            initial_score,
            iterations,
            improving_moves,
            score_history,
        }
    }
}
