//! Pareto analysis over cached objective vectors.
//!
//! The engine ranks candidates by scalar fitness only; these helpers let
//! callers inspect the multi-objective trade-off surface of a population
//! after a run — e.g., the makespan/cost front of an assignment search.
//! All objectives are **minimized** (objective entries are raw costs).
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II"

use crate::types::Score;

/// Returns true when `a` Pareto-dominates `b`: no objective is worse and
/// at least one is strictly better.
///
/// # Panics
/// Panics if the objective vectors differ in length.
pub fn dominates(a: &Score, b: &Score) -> bool {
    assert_eq!(
        a.objectives().len(),
        b.objectives().len(),
        "scores must have the same number of objectives"
    );

    let mut strictly_better = false;
    for (&va, &vb) in a.objectives().iter().zip(b.objectives()) {
        if va > vb {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// Groups score indices into Pareto fronts: `fronts[0]` holds the
/// non-dominated scores, `fronts[1]` those dominated only by front 0,
/// and so on. Returns an empty vector for empty input.
///
/// Complexity is O(m·n²) for n scores with m objectives.
///
/// # Example
///
/// ```
/// use u_evolve::pareto::pareto_fronts;
/// use u_evolve::Score;
///
/// let scores = vec![
///     Score::new(vec![1.0, 5.0], 0.0),
///     Score::new(vec![3.0, 3.0], 0.0),
///     Score::new(vec![5.0, 1.0], 0.0),
///     Score::new(vec![4.0, 4.0], 0.0), // dominated by [3, 3]
/// ];
///
/// let fronts = pareto_fronts(&scores);
/// assert_eq!(fronts[0], vec![0, 1, 2]);
/// assert_eq!(fronts[1], vec![3]);
/// ```
pub fn pareto_fronts(scores: &[Score]) -> Vec<Vec<usize>> {
    let n = scores.len();
    if n == 0 {
        return Vec::new();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut front = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&scores[i], &scores[j]) {
                dominated[i].push(j);
                domination_count[j] += 1;
            } else if dominates(&scores[j], &scores[i]) {
                dominated[j].push(i);
                domination_count[i] += 1;
            }
        }
        if domination_count[i] == 0 {
            front.push(i);
        }
    }

    let mut fronts = vec![front];
    loop {
        let current = fronts.last().expect("fronts starts non-empty");
        let mut next = Vec::new();
        for &i in current {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        fronts.push(next);
    }

    fronts
}

/// Crowding distance assignment (Deb et al., 2002).
///
/// Measures how isolated each score is in objective space; boundary
/// scores of every objective receive `f64::INFINITY`. Callers typically
/// apply this within one Pareto front to prefer diverse trade-offs.
pub fn crowding_distance(scores: &[Score]) -> Vec<f64> {
    let n = scores.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = scores[0].objectives().len();
    let mut distances = vec![0.0f64; n];

    for obj in 0..m {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            scores[a].objectives()[obj].total_cmp(&scores[b].objectives()[obj])
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = scores[indices[0]].objectives()[obj];
        let max_val = scores[indices[n - 1]].objectives()[obj];
        let range = max_val - min_val;
        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = scores[indices[i - 1]].objectives()[obj];
                let next = scores[indices[i + 1]].objectives()[obj];
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}
