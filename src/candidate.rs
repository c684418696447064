//! Candidates: a genome paired with its tagged evaluation state.

use crate::types::Score;

/// Evaluation state of a [`Candidate`].
///
/// A candidate starts `Pending` and becomes `Scored` when the evaluation
/// oracle runs. Mutating the genome resets the state to `Pending`, so a
/// stale cached score can never be read.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Evaluation {
    /// Not evaluated since creation or the last mutation.
    #[default]
    Pending,
    /// Objectives and fitness cached from the last evaluation.
    Scored(Score),
}

/// One point in the search space: an owned genome plus its cached score.
///
/// Candidates are created by random generation or by copying/recombining
/// existing candidates, and are dropped when replacement discards them.
///
/// # Equality
///
/// `PartialEq` compares **genomes only** — this is the value equality the
/// replacement step uses for duplicate suppression. Cached scores are
/// ignored, so two identical encodings compare equal even when one has
/// not been evaluated yet.
///
/// # Panics
///
/// Reading [`fitness`](Candidate::fitness) or
/// [`objectives`](Candidate::objectives) before evaluation is a
/// programming error and panics immediately rather than returning a
/// sentinel. Use [`score`](Candidate::score) or
/// [`is_evaluated`](Candidate::is_evaluated) when the state is unknown.
#[derive(Debug, Clone)]
pub struct Candidate<G> {
    genome: G,
    evaluation: Evaluation,
}

impl<G> Candidate<G> {
    /// Wraps a genome as an unevaluated candidate.
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            evaluation: Evaluation::Pending,
        }
    }

    /// Shared access to the encoding.
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Consumes the candidate, returning its encoding.
    pub fn into_genome(self) -> G {
        self.genome
    }

    /// Whether the cached score is current for the genome.
    pub fn is_evaluated(&self) -> bool {
        matches!(self.evaluation, Evaluation::Scored(_))
    }

    /// The cached score, if the candidate has been evaluated.
    pub fn score(&self) -> Option<&Score> {
        match &self.evaluation {
            Evaluation::Pending => None,
            Evaluation::Scored(score) => Some(score),
        }
    }

    /// The cached scalar fitness (higher is better).
    ///
    /// # Panics
    /// Panics if the candidate has not been evaluated.
    pub fn fitness(&self) -> f64 {
        self.score()
            .expect("fitness read before evaluation")
            .fitness()
    }

    /// The cached objective vector (raw per-criterion costs).
    ///
    /// # Panics
    /// Panics if the candidate has not been evaluated.
    pub fn objectives(&self) -> &[f64] {
        self.score()
            .expect("objectives read before evaluation")
            .objectives()
    }

    /// Caches the result of an evaluation. Objectives and fitness are
    /// always written together.
    pub(crate) fn set_score(&mut self, score: Score) {
        self.evaluation = Evaluation::Scored(score);
    }

    /// Applies an in-place genome transform and invalidates the cached
    /// score. All mutation flows through here so no stale fitness can
    /// survive a genome change.
    pub(crate) fn mutate_with<F: FnOnce(&mut G)>(&mut self, op: F) {
        op(&mut self.genome);
        self.evaluation = Evaluation::Pending;
    }
}

impl<G: PartialEq> PartialEq for Candidate<G> {
    fn eq(&self, other: &Self) -> bool {
        self.genome == other.genome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_candidate_is_pending() {
        let c = Candidate::new(vec![1u32, 2, 3]);
        assert!(!c.is_evaluated());
        assert!(c.score().is_none());
    }

    #[test]
    #[should_panic(expected = "fitness read before evaluation")]
    fn fitness_before_evaluation_panics() {
        Candidate::new(vec![1u32]).fitness();
    }

    #[test]
    #[should_panic(expected = "objectives read before evaluation")]
    fn objectives_before_evaluation_panics() {
        Candidate::new(vec![1u32]).objectives();
    }

    #[test]
    fn set_score_caches_both_views() {
        let mut c = Candidate::new(vec![1u32]);
        c.set_score(Score::new(vec![9.0, 3.0], 0.5));
        assert!(c.is_evaluated());
        assert_eq!(c.fitness(), 0.5);
        assert_eq!(c.objectives(), &[9.0, 3.0]);
    }

    #[test]
    fn mutation_invalidates_cached_score() {
        let mut c = Candidate::new(vec![1u32, 2]);
        c.set_score(Score::single(1.0));
        c.mutate_with(|g| g[0] = 7);
        assert!(!c.is_evaluated());
        assert_eq!(c.genome(), &vec![7u32, 2]);
    }

    #[test]
    fn copy_is_independent_and_keeps_evaluation_state() {
        let mut source = Candidate::new(vec![1u32, 2]);
        source.set_score(Score::single(2.0));

        let mut copy = source.clone();
        assert!(copy.is_evaluated());
        assert_eq!(copy.fitness(), 2.0);

        // Mutating the copy must not touch the source.
        copy.mutate_with(|g| g[1] = 99);
        assert_eq!(source.genome(), &vec![1u32, 2]);
        assert!(source.is_evaluated());
        assert!(!copy.is_evaluated());
    }

    #[test]
    fn equality_is_by_genome_not_score() {
        let mut a = Candidate::new(vec![1u32, 2]);
        let b = Candidate::new(vec![1u32, 2]);
        let c = Candidate::new(vec![2u32, 1]);
        a.set_score(Score::single(10.0));

        assert_eq!(a, b); // same encoding, different evaluation state
        assert_ne!(a, c); // different encoding
    }
}
