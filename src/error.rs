//! Error types for engine construction and the generation cycle.

use crate::types::EvalError;
use thiserror::Error;

/// Invalid engine configuration, rejected at construction.
///
/// Out-of-range values are never silently clamped; each variant carries
/// the offending value(s).
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be greater than zero")]
    ZeroPopulationSize,

    #[error("{name} must be within [0.0, 1.0], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("elitism_count ({elitism_count}) must not exceed population_size ({population_size})")]
    ElitismExceedsPopulation {
        elitism_count: usize,
        population_size: usize,
    },
}

/// Failure of the generation cycle.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid engine configuration")]
    Config(#[from] ConfigError),

    /// The evaluation oracle failed. The generation is aborted with the
    /// population state undefined; callers needing resilience should
    /// wrap the oracle with their own retry policy.
    #[error("candidate evaluation failed: {0}")]
    Evaluation(#[source] EvalError),
}
