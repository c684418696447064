//! Parent-selection strategies.
//!
//! Selection chooses which candidates reproduce. It is a pure function
//! of population state and the engine's random source: the store is
//! never modified, and selected parents are returned as independent
//! copies.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use crate::candidate::Candidate;
use crate::population::Population;
use rand::Rng;

/// Strategy for choosing reproduction parents.
///
/// All strategies favor **higher** fitness (the population's best-first
/// order is descending scalar fitness).
///
/// # Examples
///
/// ```
/// use u_evolve::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Fitness-proportionate
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: pick `k` candidates at random, keep the
    /// fittest.
    ///
    /// Higher `k` = stronger selection pressure. k=2 keeps diversity,
    /// k=3–5 is a typical default, larger values risk premature
    /// convergence.
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Weights are shifted so the least-fit member still has a small
    /// positive weight. Susceptible to super-individual dominance when
    /// fitness variance is high.
    Roulette,

    /// Rank-based selection with linear weights.
    ///
    /// Candidates are ranked best-first and weighted by rank position,
    /// which avoids the scaling problems of raw-fitness roulette.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects one parent index from a candidate slice.
    ///
    /// # Panics
    /// Panics if `candidates` is empty.
    pub fn select<G, R: Rng>(&self, candidates: &[Candidate<G>], rng: &mut R) -> usize {
        assert!(
            !candidates.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(candidates, *k, rng),
            Selection::Roulette => roulette(candidates, rng),
            Selection::Rank => rank(candidates, rng),
        }
    }

    /// Returns `count` parent copies drawn from the population.
    ///
    /// By convention the engine passes `count = population_size` so the
    /// offspring batch stays generation-sized. An empty population
    /// yields an empty parent sequence; the variation pipeline tolerates
    /// this.
    pub fn select_parents<G: Clone, R: Rng>(
        &self,
        population: &Population<G>,
        count: usize,
        rng: &mut R,
    ) -> Vec<Candidate<G>> {
        if population.is_empty() {
            return Vec::new();
        }
        let members = population.as_slice();
        (0..count)
            .map(|_| members[self.select(members, rng)].clone())
            .collect()
    }
}

/// Tournament selection: best of k uniform picks (with replacement).
fn tournament<G, R: Rng>(candidates: &[Candidate<G>], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = candidates.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if candidates[idx].fitness() > candidates[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel selection.
///
/// Weights are `fitness_i - min_fitness + epsilon` so every member keeps
/// a positive weight and the fittest gets the largest share.
fn roulette<G, R: Rng>(candidates: &[Candidate<G>], rng: &mut R) -> usize {
    let n = candidates.len();
    if n == 1 {
        return 0;
    }

    let fitnesses: Vec<f64> = candidates.iter().map(|c| c.fitness()).collect();
    let min_fitness = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);

    let epsilon = 1e-10;
    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            let w = f - min_fitness + epsilon;
            if w.is_finite() && w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Rank-based selection using linear weights.
///
/// Candidates are ranked by descending fitness; rank 0 (the best) gets
/// weight `n`, the worst gets weight 1.
fn rank<G, R: Rng>(candidates: &[Candidate<G>], rng: &mut R) -> usize {
    let n = candidates.len();
    if n == 1 {
        return 0;
    }

    let mut indexed: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c.fitness()))
        .collect();
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        let weight = (n - rank) as f64;
        cumulative += weight;
        if cumulative > threshold {
            return original_idx;
        }
    }

    indexed.last().expect("population has n >= 2 members").0 // fallback
}
