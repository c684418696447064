//! The variation pipeline: pairwise crossover followed by per-offspring
//! mutation.
//!
//! The pipeline never evaluates. Crossover offspring enter as pending
//! candidates and mutation invalidates any cached score; the driver
//! evaluates the whole batch afterwards.

use crate::candidate::Candidate;
use crate::types::Problem;
use rand::Rng;

/// Produces the offspring batch from a parent sequence.
///
/// Parents are consumed two at a time in input order; a trailing
/// unpaired parent is discarded without producing offspring (a policy,
/// not an error). Per pair, a uniform draw below `crossover_rate`
/// invokes the problem's crossover operator; otherwise independent
/// copies of both parents are appended, so later in-place mutation
/// cannot corrupt the population store. Each offspring then undergoes
/// mutation with probability `mutation_rate`.
///
/// All draws come from the single engine RNG in a fixed order, so runs
/// are reproducible for a fixed seed and fixed operators.
pub(crate) fn produce_offspring<P: Problem, R: Rng>(
    problem: &P,
    parents: &[Candidate<P::Genome>],
    crossover_rate: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Candidate<P::Genome>> {
    let mut offspring = Vec::with_capacity(parents.len());

    for pair in parents.chunks_exact(2) {
        if rng.random_range(0.0..1.0) < crossover_rate {
            let children = problem.crossover(pair[0].genome(), pair[1].genome(), rng);
            debug_assert!(
                !children.is_empty(),
                "crossover must return at least one offspring"
            );
            offspring.extend(children.into_iter().map(Candidate::new));
        } else {
            offspring.push(pair[0].clone());
            offspring.push(pair[1].clone());
        }
    }

    for child in offspring.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_rate {
            child.mutate_with(|genome| problem.mutate(genome, &mut *rng));
        }
    }

    offspring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EvalError, Score};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts operator invocations; crossover swaps the halves of two
    /// fixed-length integer encodings and returns both children.
    #[derive(Default)]
    struct SwapHalves {
        crossovers: AtomicUsize,
        mutations: AtomicUsize,
    }

    impl Problem for SwapHalves {
        type Genome = Vec<u32>;

        fn generate<R: Rng>(&self, rng: &mut R) -> Vec<u32> {
            (0..4).map(|_| rng.random_range(0..100)).collect()
        }

        fn evaluate(&self, genome: &Vec<u32>) -> Result<Score, EvalError> {
            Ok(Score::single(genome.iter().sum::<u32>() as f64))
        }

        fn crossover<R: Rng>(
            &self,
            a: &Vec<u32>,
            b: &Vec<u32>,
            _rng: &mut R,
        ) -> Vec<Vec<u32>> {
            self.crossovers.fetch_add(1, Ordering::Relaxed);
            let mid = a.len() / 2;
            let mut c1 = a[..mid].to_vec();
            c1.extend_from_slice(&b[mid..]);
            let mut c2 = b[..mid].to_vec();
            c2.extend_from_slice(&a[mid..]);
            vec![c1, c2]
        }

        fn mutate<R: Rng>(&self, genome: &mut Vec<u32>, _rng: &mut R) {
            self.mutations.fetch_add(1, Ordering::Relaxed);
            genome[0] = genome[0].wrapping_add(1);
        }
    }

    fn evaluated_parents(genomes: &[Vec<u32>]) -> Vec<Candidate<Vec<u32>>> {
        genomes
            .iter()
            .map(|g| {
                let mut c = Candidate::new(g.clone());
                c.set_score(Score::single(g.iter().sum::<u32>() as f64));
                c
            })
            .collect()
    }

    #[test]
    fn odd_trailing_parent_is_discarded() {
        let problem = SwapHalves::default();
        let parents = evaluated_parents(&[
            vec![1, 1, 1, 1],
            vec![2, 2, 2, 2],
            vec![3, 3, 3, 3],
            vec![4, 4, 4, 4],
            vec![5, 5, 5, 5],
        ]);
        let mut rng = StdRng::seed_from_u64(42);

        let offspring = produce_offspring(&problem, &parents, 1.0, 0.0, &mut rng);

        // 5 parents -> (5-1)/2 = 2 pairs, trailing parent dropped.
        assert_eq!(problem.crossovers.load(Ordering::Relaxed), 2);
        assert_eq!(offspring.len(), 4);
        assert!(!offspring
            .iter()
            .any(|c| c.genome() == &vec![5, 5, 5, 5]));
    }

    #[test]
    fn zero_crossover_rate_yields_parent_copies() {
        let problem = SwapHalves::default();
        let parents = evaluated_parents(&[
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![9, 10, 11, 12],
            vec![13, 14, 15, 16],
        ]);
        let mut rng = StdRng::seed_from_u64(42);

        let offspring = produce_offspring(&problem, &parents, 0.0, 0.0, &mut rng);

        assert_eq!(problem.crossovers.load(Ordering::Relaxed), 0);
        assert_eq!(offspring.len(), 4);
        for (child, parent) in offspring.iter().zip(&parents) {
            assert_eq!(child.genome(), parent.genome());
            // Copies keep the parent's evaluation state.
            assert!(child.is_evaluated());
        }
    }

    #[test]
    fn parent_copies_are_independent() {
        let problem = SwapHalves::default();
        let parents = evaluated_parents(&[vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        let mut rng = StdRng::seed_from_u64(42);

        // Never crossover, always mutate: the copies change in place.
        let offspring = produce_offspring(&problem, &parents, 0.0, 1.0, &mut rng);

        assert_eq!(offspring[0].genome(), &vec![2, 2, 3, 4]);
        // The original parents are untouched.
        assert_eq!(parents[0].genome(), &vec![1, 2, 3, 4]);
        assert!(parents[0].is_evaluated());
    }

    #[test]
    fn unit_crossover_rate_invokes_operator_for_every_pair() {
        let problem = SwapHalves::default();
        let parents = evaluated_parents(&[
            vec![1, 1, 2, 2],
            vec![3, 3, 4, 4],
            vec![5, 5, 6, 6],
            vec![7, 7, 8, 8],
        ]);
        let mut rng = StdRng::seed_from_u64(42);

        let offspring = produce_offspring(&problem, &parents, 1.0, 0.0, &mut rng);

        assert_eq!(problem.crossovers.load(Ordering::Relaxed), 2);
        assert_eq!(offspring[0].genome(), &vec![1, 1, 4, 4]);
        assert_eq!(offspring[1].genome(), &vec![3, 3, 2, 2]);
        // Crossover offspring are pending until the driver evaluates.
        assert!(offspring.iter().all(|c| !c.is_evaluated()));
    }

    #[test]
    fn unit_mutation_rate_mutates_and_invalidates_every_offspring() {
        let problem = SwapHalves::default();
        let parents = evaluated_parents(&[vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        let mut rng = StdRng::seed_from_u64(42);

        let offspring = produce_offspring(&problem, &parents, 0.0, 1.0, &mut rng);

        assert_eq!(problem.mutations.load(Ordering::Relaxed), 2);
        assert!(offspring.iter().all(|c| !c.is_evaluated()));
    }

    #[test]
    fn empty_parent_sequence_is_tolerated() {
        let problem = SwapHalves::default();
        let mut rng = StdRng::seed_from_u64(42);

        let offspring =
            produce_offspring(&problem, &[], 1.0, 1.0, &mut rng);
        assert!(offspring.is_empty());
    }

    proptest! {
        /// With two-child crossover (or copy-both), n parents always
        /// yield 2 * (n / 2) offspring: pairs are exhaustive and the odd
        /// trailing parent contributes nothing.
        #[test]
        fn offspring_count_matches_pair_count(
            n in 0usize..25,
            crossover_rate in 0.0f64..=1.0,
            mutation_rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let problem = SwapHalves::default();
            let genomes: Vec<Vec<u32>> =
                (0..n).map(|i| vec![i as u32; 4]).collect();
            let parents = evaluated_parents(&genomes);
            let mut rng = StdRng::seed_from_u64(seed);

            let offspring = produce_offspring(
                &problem,
                &parents,
                crossover_rate,
                mutation_rate,
                &mut rng,
            );

            prop_assert_eq!(offspring.len(), (n / 2) * 2);
            prop_assert!(
                problem.crossovers.load(Ordering::Relaxed) <= n / 2
            );
        }
    }
}
