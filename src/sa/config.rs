//! Annealing parameters.
//!
//! The harness overrides `max_iterations` with its own budget and draws from
//! a shared generator, so only the temperature settings matter there.

/// How the temperature drops between clustering iterations.
///
/// Every iteration ends with exactly one cooling step, taken whether the
/// swap was kept or not. After `n` iterations:
///
/// | variant | temperature |
/// |---------|-------------|
/// | `Geometric { alpha }` | `T_0 * alpha^n` |
/// | `Linear` | `T_0 - n * (T_0 - T_min) / max_iterations`, floored at `T_min` |
/// | `LundyMees { beta }` | `T_{n-1} / (1 + beta * T_{n-1})` |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Multiply by `alpha` each iteration. The default, with `alpha = 0.95`.
    Geometric {
        /// Must lie strictly between 0 and 1.
        alpha: f64,
    },

    /// Straight line from `initial_temperature` down to `min_temperature`,
    /// landing on it at the end of the iteration budget.
    Linear,

    /// Drops quickly while hot and slowly once cold.
    LundyMees {
        /// Must be positive. `(T_0 - T_min) / (n * T_0 * T_min)` ends an
        /// `n`-iteration run near `T_min`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Settings for [`SaRunner`](super::SaRunner).
///
/// Defaults: `T_0 = 1000`, geometric cooling with `alpha = 0.95`, ten
/// iterations, fresh entropy.
///
/// # Examples
///
/// ```
/// use u_capclust::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_max_iterations(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// `T_0`. Must be positive and finite.
    pub initial_temperature: f64,

    /// Final temperature for [`CoolingSchedule::Linear`]. Ignored otherwise.
    pub min_temperature: f64,

    pub cooling: CoolingSchedule,

    /// Swaps attempted per run.
    pub max_iterations: usize,

    /// Seed for [`SaRunner::run`](super::SaRunner::run); `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            max_iterations: 10,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the temperature and cooling parameters, describing the first
    /// bad one.
    pub fn validate(&self) -> Result<(), String> {
        let t0 = self.initial_temperature;
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(format!("starting temperature {t0} is not a positive finite number"));
        }
        let problem = match self.cooling {
            CoolingSchedule::Geometric { alpha } if !(0.0 < alpha && alpha < 1.0) => {
                Some(format!("geometric factor {alpha} is outside (0, 1)"))
            }
            CoolingSchedule::LundyMees { beta } if !(beta > 0.0) => {
                Some(format!("lundy-mees beta {beta} is not positive"))
            }
            CoolingSchedule::Linear if !(self.min_temperature > 0.0 && self.min_temperature < t0) => {
                Some(format!(
                    "linear cooling needs 0 < min_temperature < {t0}, got {}",
                    self.min_temperature
                ))
            }
            _ => None,
        };
        problem.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_clustering_settings() {
        let config = SaConfig::default();
        assert_eq!(config.initial_temperature, 1000.0);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.95 });
        assert_eq!(config.max_iterations, 10);
        assert!(config.seed.is_none());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_every_schedule_accepts_sane_parameters() {
        for cooling in [
            CoolingSchedule::Geometric { alpha: 0.5 },
            CoolingSchedule::Linear,
            CoolingSchedule::LundyMees { beta: 0.01 },
        ] {
            assert_eq!(SaConfig::default().with_cooling(cooling).validate(), Ok(()));
        }
    }

    #[test]
    fn test_rejects_bad_starting_temperature() {
        for t0 in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = SaConfig::default()
                .with_initial_temperature(t0)
                .validate()
                .unwrap_err();
            assert!(err.contains("starting temperature"), "{err}");
        }
    }

    #[test]
    fn test_rejects_bad_cooling_parameters() {
        let bad = [
            SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.0 }),
            SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 }),
            SaConfig::default()
                .with_cooling(CoolingSchedule::Linear)
                .with_initial_temperature(10.0)
                .with_min_temperature(20.0),
            SaConfig::default()
                .with_cooling(CoolingSchedule::Linear)
                .with_min_temperature(0.0),
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }

    #[test]
    fn test_min_temperature_ignored_outside_linear() {
        let config = SaConfig::default().with_min_temperature(5000.0);
        assert_eq!(config.validate(), Ok(()));
    }
}
