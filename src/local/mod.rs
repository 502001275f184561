//! Local Search (strict hill climbing).
//!
//! Repeatedly perturbs the best solution seen so far and keeps the neighbor
//! only when it scores strictly higher. Equal or worse neighbors are
//! discarded, so the best score never decreases and never falls below the
//! starting score.

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::{LocalSearchResult, LocalSearchRunner};
