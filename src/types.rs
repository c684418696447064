//! Core contracts: evaluation scores and the problem definition.
//!
//! [`Problem`] is the single trait users implement to plug a domain into
//! the engine. [`Score`] is the cached result of one evaluation: the raw
//! objective vector plus the scalar fitness used for ranking.

use rand::Rng;

/// Error type produced by a failing evaluation oracle.
///
/// The engine does not retry: a fault aborts the current generation and
/// surfaces as [`EngineError::Evaluation`](crate::EngineError::Evaluation).
pub type EvalError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The cached result of evaluating one candidate.
///
/// Holds the raw objective vector (length >= 1) and the scalar fitness
/// derived from it. Both are always computed together by the evaluation
/// oracle — never partially stale.
///
/// # Conventions
///
/// - `fitness` is the ranking value: **higher is better**.
/// - `objectives` are raw per-criterion costs (e.g., makespan, monetary
///   cost): **lower is better**. Single-objective problems typically use
///   [`Score::single`].
///
/// Callers minimizing a single cost `c` commonly rank with `-c` or
/// `1.0 / (1.0 + c)` as the fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    objectives: Vec<f64>,
    fitness: f64,
}

impl Score {
    /// Creates a score from an objective vector and a scalar fitness.
    ///
    /// # Panics
    /// Panics if `objectives` is empty.
    pub fn new(objectives: Vec<f64>, fitness: f64) -> Self {
        assert!(
            !objectives.is_empty(),
            "objective vector must contain at least one entry"
        );
        Self {
            objectives,
            fitness,
        }
    }

    /// Creates a single-objective score: the objective vector is
    /// `[fitness]`.
    pub fn single(fitness: f64) -> Self {
        Self {
            objectives: vec![fitness],
            fitness,
        }
    }

    /// The scalar ranking value (higher is better).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The raw per-criterion scores (lower is better).
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }
}

/// Defines an optimization problem for the engine.
///
/// This is the capability set the caller injects at engine construction:
///
/// 1. **Generation**: [`generate`](Problem::generate) produces one random
///    genome (used for initialization and population-size repair)
/// 2. **Evaluation**: [`evaluate`](Problem::evaluate) is the oracle that
///    scores a genome
/// 3. **Crossover**: [`crossover`](Problem::crossover) recombines two
///    parent genomes
/// 4. **Mutation**: [`mutate`](Problem::mutate) perturbs a genome in place
///
/// # Genome Equality
///
/// `Genome: PartialEq` is the value equality used by replacement to
/// suppress duplicate candidates. Two genomes with equal fitness but
/// different encodings are not duplicates.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because the engine may evaluate
/// offspring in parallel under the `parallel` feature.
pub trait Problem: Send + Sync {
    /// The solution encoding for this problem.
    type Genome: Clone + PartialEq + Send + Sync;

    /// Creates one randomly initialized genome.
    ///
    /// Called once per slot at initialization and whenever replacement
    /// must repair the population size. The result should be valid but
    /// need not be good.
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Evaluates a genome, returning its objective vector and fitness.
    ///
    /// This is typically the most expensive operation (often a schedule
    /// simulation). The engine calls it once per offspring per generation
    /// and once per candidate at initialization/repair. Errors propagate
    /// to the caller of the generation cycle unmodified.
    fn evaluate(&self, genome: &Self::Genome) -> Result<Score, EvalError>;

    /// Produces one or more offspring genomes by recombining two parents.
    ///
    /// Must return at least one genome; two is the common case. The
    /// default implementation clones `parent1` (no recombination).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Genome,
        _parent2: &Self::Genome,
        _rng: &mut R,
    ) -> Vec<Self::Genome> {
        vec![parent1.clone()]
    }

    /// Mutates a genome in place.
    ///
    /// The engine invalidates the candidate's cached score around this
    /// call. The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _genome: &mut Self::Genome, _rng: &mut R) {}

    /// Called at the end of each generation with the best score so far.
    ///
    /// Observational only — useful for logging or external progress
    /// reporting. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best: &Score) {}
}
