//! Experiment harness.
//!
//! Runs every selected algorithm a fixed number of independent times on the
//! configured graph and bounds, and aggregates score and time statistics.
//! Each run starts from a fresh greedy construction; only the optimization
//! phase is timed.
//!
//! Nothing is kept between calls: [`Experiment::run`] returns a
//! self-contained [`ExperimentReport`].
//!
//! ```
//! use u_capclust::experiment::{Algorithm, Experiment, ExperimentConfig};
//! use u_capclust::graph::{EdgeKey, NodeId};
//!
//! let mut experiment = Experiment::with_config(ExperimentConfig::default().with_seed(7));
//! experiment
//!     .configure(
//!         [("A", 5u64), ("B", 5), ("C", 5), ("D", 5)].map(|(id, w)| (NodeId::from(id), w)),
//!         [(EdgeKey::new("A", "B"), 10u64), (EdgeKey::new("C", "D"), 10)],
//!         5,
//!         10,
//!     )
//!     .unwrap();
//!
//! let report = experiment.run(10, 3).unwrap();
//! assert_eq!(report.scores(Algorithm::Greedy), vec![20, 20, 20]);
//! ```

mod algorithm;
mod config;
mod report;
mod runner;
mod stats;

pub use algorithm::Algorithm;
pub use config::ExperimentConfig;
pub use report::{AlgorithmReport, ExperimentReport, FinalClustering, RunRecord};
pub use runner::Experiment;
pub use stats::AggregateStats;
