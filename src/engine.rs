//! The evolution driver: initialization and the generational loop.

use crate::candidate::Candidate;
use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError};
use crate::population::Population;
use crate::selection::Selection;
use crate::types::Problem;
use crate::{replacement, variation};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How often the driver emits a progress record (in generations).
const PROGRESS_INTERVAL: usize = 10;

/// Snapshot of one completed generation.
#[derive(Debug, Clone)]
pub struct GenerationStats {
    /// 1-based index of the completed generation.
    pub generation: usize,
    /// Fitness of the best candidate after replacement.
    pub best_fitness: f64,
}

/// Result of a full engine run.
#[derive(Debug, Clone)]
pub struct RunResult<G> {
    /// The best candidate at the end of the run.
    pub best: Candidate<G>,
    /// Number of generations actually executed.
    pub generations: usize,
    /// Whether a stop predicate ended the run before the generation
    /// budget.
    pub stopped_early: bool,
    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Drives the evolutionary search for one [`Problem`].
///
/// The engine owns the population store, the configuration, and a single
/// seeded random source threaded through selection, variation, and
/// repair, so runs are reproducible for a fixed seed and fixed
/// operators.
///
/// # Usage
///
/// ```ignore
/// let config = EngineConfig::default().with_seed(42);
/// let mut engine = Engine::new(problem, config)?;
/// let result = engine.run(200)?;
/// println!("best fitness: {}", result.best.fitness());
/// ```
///
/// # Lifecycle
///
/// An engine starts uninitialized (empty store). [`run`](Engine::run)
/// calls [`initialize`](Engine::initialize) itself; callers driving
/// [`step`](Engine::step) manually should initialize first. Initializing
/// again rebuilds the population from scratch.
pub struct Engine<P: Problem> {
    problem: P,
    config: EngineConfig,
    selection: Selection,
    rng: StdRng,
    population: Population<P::Genome>,
    generation: usize,
}

impl<P: Problem> Engine<P> {
    /// Creates an engine, validating the configuration.
    ///
    /// Invalid configuration fails here, before any evaluation happens.
    pub fn new(problem: P, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self {
            problem,
            config,
            selection: Selection::default(),
            rng,
            population: Population::new(),
            generation: 0,
        })
    }

    /// Replaces the default tournament selection.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Generates, evaluates, and sorts a fresh population.
    ///
    /// Safe to call again: the previous population is discarded and
    /// rebuilt from scratch. Duplicate encodings are *not* suppressed
    /// here — only replacement de-duplicates.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        let mut members = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let mut candidate = Candidate::new(self.problem.generate(&mut self.rng));
            let score = self
                .problem
                .evaluate(candidate.genome())
                .map_err(EngineError::Evaluation)?;
            candidate.set_score(score);
            members.push(candidate);
        }
        self.population = Population::from_members(members);
        self.population.sort_best_first();
        self.generation = 0;
        Ok(())
    }

    /// Runs one generation: selection → variation → offspring evaluation
    /// → replacement.
    ///
    /// The population holds exactly `population_size` sorted members
    /// afterwards. An evaluation fault aborts the generation with the
    /// population state undefined.
    pub fn step(&mut self) -> Result<GenerationStats, EngineError> {
        let parents = self.selection.select_parents(
            &self.population,
            self.config.population_size,
            &mut self.rng,
        );
        let mut offspring = variation::produce_offspring(
            &self.problem,
            &parents,
            self.config.crossover_rate,
            self.config.mutation_rate,
            &mut self.rng,
        );
        self.evaluate_batch(&mut offspring)?;
        replacement::replace(
            &self.problem,
            &mut self.population,
            offspring,
            &self.config,
            &mut self.rng,
        )?;
        self.generation += 1;

        let best = self
            .population
            .best()
            .expect("population is non-empty after replacement");
        let stats = GenerationStats {
            generation: self.generation,
            best_fitness: best.fitness(),
        };
        let best_score = best.score().expect("best candidate is evaluated").clone();
        self.problem.on_generation(self.generation, &best_score);
        Ok(stats)
    }

    /// Initializes, then executes exactly `generations` steps.
    pub fn run(&mut self, generations: usize) -> Result<RunResult<P::Genome>, EngineError> {
        self.run_until(generations, |_| false)
    }

    /// Like [`run`](Engine::run), with an early-stopping predicate
    /// evaluated once per completed generation.
    ///
    /// The predicate is observational: returning `true` ends the run
    /// after the current generation, leaving the per-generation contract
    /// unchanged.
    pub fn run_until<F>(
        &mut self,
        generations: usize,
        mut stop: F,
    ) -> Result<RunResult<P::Genome>, EngineError>
    where
        F: FnMut(&GenerationStats) -> bool,
    {
        self.initialize()?;

        let mut fitness_history = Vec::with_capacity(generations + 1);
        fitness_history.push(
            self.population
                .best()
                .expect("population is non-empty after initialization")
                .fitness(),
        );

        let mut executed = 0;
        let mut stopped_early = false;
        for gen in 0..generations {
            let stats = self.step()?;
            fitness_history.push(stats.best_fitness);
            executed = gen + 1;

            if gen % PROGRESS_INTERVAL == 0 {
                tracing::debug!(
                    generation = stats.generation,
                    best_fitness = stats.best_fitness,
                    "evolution progress"
                );
            }

            if stop(&stats) {
                stopped_early = true;
                break;
            }
        }

        let best = self
            .population
            .best()
            .expect("population is non-empty after initialization")
            .clone();
        Ok(RunResult {
            best,
            generations: executed,
            stopped_early,
            fitness_history,
        })
    }

    /// The single best candidate, or `None` before initialization.
    pub fn best(&self) -> Option<&Candidate<P::Genome>> {
        self.population.best()
    }

    /// A defensive copy of the current population, best-first.
    pub fn population(&self) -> Vec<Candidate<P::Genome>> {
        self.population.to_vec()
    }

    /// Number of completed generations since the last initialization.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Evaluates every offspring in input order.
    ///
    /// Under the `parallel` feature (and `config.parallel`), evaluation
    /// fans out per candidate and results are reassembled in input order
    /// before replacement, so parallelism never changes the outcome.
    fn evaluate_batch(
        &self,
        batch: &mut [Candidate<P::Genome>],
    ) -> Result<(), EngineError> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            let scores: Vec<_> = batch
                .par_iter()
                .map(|candidate| self.problem.evaluate(candidate.genome()))
                .collect();
            for (candidate, score) in batch.iter_mut().zip(scores) {
                candidate.set_score(score.map_err(EngineError::Evaluation)?);
            }
            return Ok(());
        }

        for candidate in batch.iter_mut() {
            let score = self
                .problem
                .evaluate(candidate.genome())
                .map_err(EngineError::Evaluation)?;
            candidate.set_score(score);
        }
        Ok(())
    }
}
