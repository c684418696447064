//! Generational replacement: elitism, duplicate suppression, and
//! population-size repair.

use crate::candidate::Candidate;
use crate::error::EngineError;
use crate::population::{sort_best_first, Population};
use crate::types::Problem;
use crate::EngineConfig;
use rand::Rng;

/// Builds the next generation from the current population and a freshly
/// evaluated offspring batch, replacing the store wholesale.
///
/// 1. Sort both sources best-first.
/// 2. Elitism: carry the top `min(k, len)` candidates from *each* source
///    (both elite lineages are kept even when one dominates the other).
/// 3. Fill: scan the merged, best-first sequence, admitting each
///    candidate whose genome is not already present, until the target
///    size is reached.
/// 4. Repair: while still short (de-duplication can over-prune), generate
///    and evaluate fresh random candidates.
/// 5. Re-sort and truncate to exactly `population_size`.
///
/// Postcondition: `population.len() == config.population_size`, sorted
/// best-first. Oracle faults during repair abort the generation.
pub(crate) fn replace<P: Problem, R: Rng>(
    problem: &P,
    population: &mut Population<P::Genome>,
    mut offspring: Vec<Candidate<P::Genome>>,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<(), EngineError> {
    let target = config.population_size;

    population.sort_best_first();
    sort_best_first(&mut offspring);

    let mut next: Vec<Candidate<P::Genome>> = Vec::with_capacity(target);

    // Elitism from both sources.
    let elite_from_current = config.elitism_count.min(population.len());
    next.extend(population.as_slice()[..elite_from_current].iter().cloned());
    let elite_from_offspring = config.elitism_count.min(offspring.len());
    next.extend(offspring[..elite_from_offspring].iter().cloned());

    // Best-first fill over the merged sequence, suppressing genome
    // duplicates against everything already admitted.
    let mut combined = population.take_members();
    combined.extend(offspring);
    sort_best_first(&mut combined);

    for candidate in combined {
        if next.len() >= target {
            break;
        }
        if !next.iter().any(|admitted| *admitted == candidate) {
            next.push(candidate);
        }
    }

    // Repair: de-duplication may leave the generation short.
    while next.len() < target {
        let mut candidate = Candidate::new(problem.generate(rng));
        let score = problem
            .evaluate(candidate.genome())
            .map_err(EngineError::Evaluation)?;
        candidate.set_score(score);
        next.push(candidate);
    }

    sort_best_first(&mut next);
    // 2k elites can overshoot the target; drop the worst tail.
    next.truncate(target);

    *population = Population::from_members(next);
    Ok(())
}
