//! The population store: an ordered container of candidates.

use crate::candidate::Candidate;

/// The engine's working set of candidates.
///
/// Holds exactly `population_size` members between generations and is
/// replaced wholesale by the replacement step. The invariant "sorted
/// best-first" (descending scalar fitness) is restored lazily via
/// [`sort_best_first`](Population::sort_best_first) after any bulk
/// change.
#[derive(Debug, Clone, Default)]
pub struct Population<G> {
    members: Vec<Candidate<G>>,
}

impl<G> Population<G> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Wraps an existing member list.
    pub fn from_members(members: Vec<Candidate<G>>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<G>> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Candidate<G>] {
        &self.members
    }

    /// The best-first element. `None` only before initialization.
    ///
    /// Callers must have restored the sort invariant; the engine does so
    /// after initialization and after every replacement.
    pub fn best(&self) -> Option<&Candidate<G>> {
        self.members.first()
    }

    /// Restores the best-first invariant: descending scalar fitness.
    ///
    /// The sort is stable and uses a total order on `f64`, so the result
    /// is deterministic for a fixed input sequence (ties keep their
    /// relative order).
    ///
    /// # Panics
    /// Panics if any member has not been evaluated.
    pub fn sort_best_first(&mut self) {
        sort_best_first(&mut self.members);
    }

    pub(crate) fn take_members(&mut self) -> Vec<Candidate<G>> {
        std::mem::take(&mut self.members)
    }
}

impl<G: Clone> Population<G> {
    /// A defensive copy of the full member list. Callers cannot corrupt
    /// engine-owned state through it.
    pub fn to_vec(&self) -> Vec<Candidate<G>> {
        self.members.clone()
    }
}

/// Sorts a candidate slice best-first (descending fitness).
pub(crate) fn sort_best_first<G>(candidates: &mut [Candidate<G>]) {
    candidates.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}
