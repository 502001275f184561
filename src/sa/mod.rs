//! Simulated annealing over clusterings.
//!
//! Starts from a (usually greedy) clustering and walks through random
//! feasible swaps. A swap that raises the intra-cluster edge weight is always
//! taken; one that lowers it is taken with probability `exp(delta / T)`. The
//! temperature `T` starts at 1000 and drops once per iteration, so late in a
//! run the walk behaves like strict local search. The best clustering seen is
//! returned, never the one the walk ended on.
//!
//! Kirkpatrick, Gelatt & Vecchi (1983) introduced the method; the
//! [`CoolingSchedule::LundyMees`] variant follows Lundy & Mees (1986).

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
