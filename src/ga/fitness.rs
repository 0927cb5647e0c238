//! Fitness evaluation.
//!
//! Feasibility is a hard cutoff: a chromosome whose included weight exceeds
//! the capacity scores zero no matter how valuable its items are.

use super::types::{Chromosome, Fitness};
use crate::instance::ProblemInstance;

/// Sums of included weights and values.
///
/// Both sums saturate at `u64::MAX`. A saturated weight exceeds every
/// capacity below `u64::MAX`, so overflow cannot make a chromosome feasible.
pub fn totals(chromosome: &Chromosome, instance: &ProblemInstance) -> (u64, u64) {
    debug_assert_eq!(
        chromosome.len(),
        instance.len(),
        "chromosome length must match item count"
    );
    chromosome
        .genes()
        .iter()
        .zip(&instance.items)
        .filter(|(g, _)| **g)
        .fold((0u64, 0u64), |(w, v), (_, item)| {
            (w.saturating_add(item.weight), v.saturating_add(item.value))
        })
}

/// Total weight of the included items.
pub fn total_weight(chromosome: &Chromosome, instance: &ProblemInstance) -> u64 {
    totals(chromosome, instance).0
}

/// Included value if the weight fits, otherwise zero.
pub fn evaluate(chromosome: &Chromosome, instance: &ProblemInstance) -> Fitness {
    let (weight, value) = totals(chromosome, instance);
    if weight <= instance.capacity {
        value
    } else {
        0
    }
}

/// Scores every individual, in population order.
pub fn fitness(population: &[Chromosome], instance: &ProblemInstance) -> Vec<Fitness> {
    population.iter().map(|c| evaluate(c, instance)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_equal_items() -> ProblemInstance {
        ProblemInstance::from_pairs(&[(5, 10), (5, 10), (5, 10)], 10)
    }

    #[test]
    fn test_feasible_at_capacity() {
        let instance = three_equal_items();
        let c = Chromosome::from_bits(&[1, 1, 0]);
        assert_eq!(total_weight(&c, &instance), 10);
        assert_eq!(evaluate(&c, &instance), 20);
    }

    #[test]
    fn test_overweight_scores_zero() {
        let instance = three_equal_items();
        let c = Chromosome::from_bits(&[1, 1, 1]);
        assert_eq!(total_weight(&c, &instance), 15);
        assert_eq!(evaluate(&c, &instance), 0);
    }

    #[test]
    fn test_empty_selection() {
        let instance = three_equal_items();
        assert_eq!(evaluate(&Chromosome::from_bits(&[0, 0, 0]), &instance), 0);
    }

    #[test]
    fn test_population_order() {
        let instance = three_equal_items();
        let pop = [
            Chromosome::from_bits(&[1, 1, 0]),
            Chromosome::from_bits(&[1, 0, 0]),
            Chromosome::from_bits(&[0, 0, 0]),
            Chromosome::from_bits(&[1, 1, 1]),
        ];
        assert_eq!(fitness(&pop, &instance), vec![20, 10, 0, 0]);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let half = u64::MAX / 2 + 1;
        let instance = ProblemInstance::from_pairs(&[(half, 1), (half, 1)], 10);
        let both = Chromosome::from_bits(&[1, 1]);
        assert_eq!(total_weight(&both, &instance), u64::MAX);
        assert_eq!(evaluate(&both, &instance), 0);
    }

    #[test]
    fn test_huge_values_saturate() {
        let instance = ProblemInstance::from_pairs(&[(1, u64::MAX), (1, 5)], 10);
        let both = Chromosome::from_bits(&[1, 1]);
        assert_eq!(evaluate(&both, &instance), u64::MAX);
    }

    #[test]
    fn test_uneven_items() {
        let instance = ProblemInstance::from_pairs(&[(12, 4), (2, 2), (1, 2), (1, 1), (4, 10)], 15);
        let c = Chromosome::from_bits(&[0, 1, 1, 1, 1]);
        assert_eq!(totals(&c, &instance), (8, 15));
        assert_eq!(evaluate(&c, &instance), 15);

        let heavy = Chromosome::from_bits(&[1, 1, 1, 0, 0]);
        assert_eq!(totals(&heavy, &instance), (15, 8));
        assert_eq!(evaluate(&heavy, &instance), 8);
    }
}
