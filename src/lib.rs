//! Generic elitist genetic-algorithm engine.
//!
//! A domain-agnostic evolutionary-search core for problems like
//! task-to-resource assignment scheduling. Users define their problem by
//! implementing [`Problem`], which specifies how to generate, evaluate,
//! recombine, and mutate candidate encodings; the engine owns the
//! population lifecycle: selection → variation → evaluation → elitist
//! replacement with duplicate suppression and size repair.
//!
//! # Core Types
//!
//! - [`Problem`]: Problem definition — generation, evaluation oracle, operators
//! - [`Candidate`]: A genome plus its tagged evaluation state
//! - [`Score`]: Objective vector and scalar fitness from one evaluation
//! - [`Population`]: The best-first-ordered working set
//! - [`EngineConfig`]: Algorithm parameters with fail-fast validation
//! - [`Selection`]: Pluggable parent-selection strategies
//! - [`Engine`]: The evolution driver
//!
//! # Conventions
//!
//! Fitness is **maximized**: the population is kept best-first in
//! descending scalar-fitness order. Objective-vector entries are raw
//! per-criterion costs (lower is better) and are informational; ranking
//! uses the scalar fitness only. The [`pareto`] module offers dominance
//! and front analysis over objective vectors after a run.
//!
//! # Example
//!
//! ```
//! use rand::Rng;
//! use u_evolve::{Engine, EngineConfig, EvalError, Problem, Score};
//!
//! // OneMax: maximize the number of set bits.
//! struct OneMax {
//!     len: usize,
//! }
//!
//! impl Problem for OneMax {
//!     type Genome = Vec<bool>;
//!
//!     fn generate<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
//!         (0..self.len).map(|_| rng.random_bool(0.5)).collect()
//!     }
//!
//!     fn evaluate(&self, genome: &Vec<bool>) -> Result<Score, EvalError> {
//!         let ones = genome.iter().filter(|&&b| b).count() as f64;
//!         Ok(Score::single(ones))
//!     }
//!
//!     fn crossover<R: Rng>(&self, a: &Vec<bool>, b: &Vec<bool>, rng: &mut R) -> Vec<Vec<bool>> {
//!         let point = rng.random_range(0..self.len);
//!         let mut c1 = a.clone();
//!         let mut c2 = b.clone();
//!         c1[point..].copy_from_slice(&b[point..]);
//!         c2[point..].copy_from_slice(&a[point..]);
//!         vec![c1, c2]
//!     }
//!
//!     fn mutate<R: Rng>(&self, genome: &mut Vec<bool>, rng: &mut R) {
//!         let idx = rng.random_range(0..self.len);
//!         genome[idx] = !genome[idx];
//!     }
//! }
//!
//! let config = EngineConfig::default()
//!     .with_population_size(30)
//!     .with_seed(42);
//! let mut engine = Engine::new(OneMax { len: 16 }, config).unwrap();
//! let result = engine.run(60).unwrap();
//! assert!(result.best.fitness() >= 13.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod candidate;
mod config;
mod engine;
mod error;
pub mod pareto;
mod population;
mod replacement;
mod selection;
mod types;
mod variation;

pub use candidate::{Candidate, Evaluation};
pub use config::EngineConfig;
pub use engine::{Engine, GenerationStats, RunResult};
pub use error::{ConfigError, EngineError};
pub use population::Population;
pub use selection::Selection;
pub use types::{EvalError, Problem, Score};
