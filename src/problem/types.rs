//! Core trait for single-solution search.

use rand::Rng;

/// Defines a maximization problem for the trajectory refiners.
///
/// The user implements scoring and neighbor generation. The refiners
/// handle acceptance and bookkeeping.
///
/// # Maximization
///
/// Higher scores are better. Scores are unsigned integers, matching the
/// integer edge weights of the clustering objective.
///
/// # Examples
///
/// ```ignore
/// struct Peak;
///
/// impl SearchProblem for Peak {
///     type Solution = i64;
///
///     fn score(&self, x: &i64) -> u64 {
///         100u64.saturating_sub(x.abs_diff(10).pow(2))
///     }
///
///     fn neighbor<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
///         x + rng.random_range(-1..=1)
///     }
/// }
/// ```
pub trait SearchProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Computes the score of a solution. Higher is better.
    fn score(&self, solution: &Self::Solution) -> u64;

    /// Generates a neighbor of the given solution.
    ///
    /// May return an unchanged copy when no valid move was drawn.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
