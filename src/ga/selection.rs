//! Elitist truncation selection.
//!
//! The `k` highest-scoring individuals become parents. When several share
//! the highest remaining score, the one with the lowest index is taken
//! first. Identical chromosomes at different indices are picked
//! independently.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Chromosome, Fitness};

/// Indices of the `num_parents` best scores, best first, leftmost on ties.
///
/// # Panics
/// Panics if `num_parents > scores.len()`.
pub fn select_indices(scores: &[Fitness], num_parents: usize) -> Vec<usize> {
    assert!(
        num_parents <= scores.len(),
        "cannot select {num_parents} parents from {} individuals",
        scores.len()
    );

    // `None` marks an index that has already been taken.
    let mut remaining: Vec<Option<Fitness>> = scores.iter().copied().map(Some).collect();
    let mut chosen = Vec::with_capacity(num_parents);

    for _ in 0..num_parents {
        let mut best: Option<(usize, Fitness)> = None;
        for (i, score) in remaining.iter().enumerate() {
            if let Some(s) = *score {
                if best.map_or(true, |(_, b)| s > b) {
                    best = Some((i, s));
                }
            }
        }
        let Some((idx, _)) = best else { break };
        remaining[idx] = None;
        chosen.push(idx);
    }

    chosen
}

/// Clones of the `num_parents` best individuals, best first.
///
/// # Panics
/// Panics if `scores` and `population` differ in length or
/// `num_parents > population.len()`.
pub fn select(
    scores: &[Fitness],
    num_parents: usize,
    population: &[Chromosome],
) -> Vec<Chromosome> {
    assert_eq!(
        scores.len(),
        population.len(),
        "one score per individual required"
    );
    select_indices(scores, num_parents)
        .into_iter()
        .map(|i| population[i].clone())
        .collect()
}

/// Index of the first maximum score, or `None` for an empty slice.
pub fn best_index(scores: &[Fitness]) -> Option<usize> {
    select_indices(scores, scores.len().min(1)).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_two_in_order() {
        let pop = [
            Chromosome::from_bits(&[1, 1, 0]),
            Chromosome::from_bits(&[1, 0, 0]),
            Chromosome::from_bits(&[0, 0, 0]),
            Chromosome::from_bits(&[1, 1, 1]),
        ];
        let parents = select(&[20, 10, 0, 0], 2, &pop);
        assert_eq!(
            parents,
            vec![Chromosome::from_bits(&[1, 1, 0]), Chromosome::from_bits(&[1, 0, 0])]
        );
    }

    #[test]
    fn test_leftmost_tie_break() {
        assert_eq!(select_indices(&[5, 9, 3, 9, 9], 3), vec![1, 3, 4]);
        assert_eq!(select_indices(&[0, 0, 0, 0], 2), vec![0, 1]);
    }

    #[test]
    fn test_best_first_ordering() {
        assert_eq!(select_indices(&[1, 4, 2, 8, 5], 5), vec![3, 4, 1, 2, 0]);
    }

    #[test]
    fn test_zero_parents() {
        let pop = [Chromosome::from_bits(&[1])];
        assert!(select(&[3], 0, &pop).is_empty());
    }

    #[test]
    fn test_duplicates_selected_independently() {
        let same = Chromosome::from_bits(&[1, 0]);
        let pop = [same.clone(), same.clone(), Chromosome::from_bits(&[0, 0])];
        let parents = select(&[7, 7, 0], 2, &pop);
        assert_eq!(parents, vec![same.clone(), same]);
    }

    #[test]
    fn test_best_index() {
        assert_eq!(best_index(&[3, 8, 8, 1]), Some(1));
        assert_eq!(best_index(&[0]), Some(0));
        assert_eq!(best_index(&[]), None);
    }

    #[test]
    #[should_panic(expected = "cannot select 3 parents from 2 individuals")]
    fn test_too_many_parents_panics() {
        select_indices(&[1, 2], 3);
    }
}
