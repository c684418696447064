//! Engine configuration.
//!
//! [`EngineConfig`] is an explicit value handed to [`Engine::new`]
//! (no process-wide mutable configuration).
//!
//! [`Engine::new`]: crate::Engine::new

use crate::error::ConfigError;

/// Parameters controlling the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use u_evolve::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elitism_count, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Setters store values verbatim; out-of-range values are rejected by
/// [`validate`](EngineConfig::validate) at engine construction, never
/// silently clamped.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of candidates in the population. Must be positive.
    ///
    /// Every generation holds exactly this many members; replacement
    /// repairs any shortfall with fresh random candidates.
    pub population_size: usize,

    /// Probability of applying crossover to a parent pair, in [0, 1].
    ///
    /// When crossover is not applied, independent copies of both parents
    /// become the offspring.
    pub crossover_rate: f64,

    /// Probability of mutating each offspring, in [0, 1].
    pub mutation_rate: f64,

    /// Number of best candidates carried over unconditionally from each
    /// of the current population and the offspring batch. Must not
    /// exceed `population_size`.
    pub elitism_count: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate the offspring batch in parallel.
    ///
    /// Honored only when the crate is built with the `parallel` feature;
    /// results are reassembled in input order either way.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.85,
            mutation_rate: 0.15,
            elitism_count: 1,
            seed: None,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elitism count.
    pub fn with_elitism_count(mut self, count: usize) -> Self {
        self.elitism_count = count;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel offspring evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`Engine::new`](crate::Engine::new); construction fails
    /// fast on the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulationSize);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.elitism_count > self.population_size {
            return Err(ConfigError::ElitismExceedsPopulation {
                elitism_count: self.elitism_count,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}
