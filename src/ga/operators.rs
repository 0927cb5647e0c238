//! Recombination and mutation operators for binary chromosomes.
//!
//! # Crossover
//!
//! [`crossover`] walks consecutive parent pairs `(i, i + 1)` cyclically and
//! splices each accepted pair at the fixed midpoint `L / 2`: the child takes
//! the first half of the first parent and the second half of the second.
//! Each attempt is accepted with probability `rate`; a rejected attempt
//! still advances to the next pair.
//!
//! # Mutation
//!
//! [`mutate`] flips at most one uniformly chosen gene per offspring, with
//! probability `rate`.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::Chromosome;
use rand::Rng;
use tracing::trace;

// ============================================================================
// Crossover
// ============================================================================

/// Fixed crossover point for chromosomes of length `len`.
pub fn crossover_point(len: usize) -> usize {
    len / 2
}

/// Child made of `parent1[..point]` followed by `parent2[point..]`.
///
/// # Panics
/// Panics if the parents differ in length or `point` exceeds it.
pub fn single_point(parent1: &Chromosome, parent2: &Chromosome, point: usize) -> Chromosome {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    let mut genes = Vec::with_capacity(parent1.len());
    genes.extend_from_slice(&parent1.genes()[..point]);
    genes.extend_from_slice(&parent2.genes()[point..]);
    Chromosome::new(genes)
}

/// Produces exactly `num_offsprings` children from `parents`.
///
/// Attempt `i` pairs `parents[i % k]` with `parents[(i + 1) % k]` and draws
/// `u` uniformly from `[0, 1)`. If `u > rate` the attempt is rejected and
/// the cursor moves on. After `max_consecutive_rejections` rejections in a
/// row the next attempt copies its first parent unchanged, so the loop
/// terminates even when `rate` is zero.
///
/// # Panics
/// Panics if `parents` is empty while `num_offsprings > 0`.
pub fn crossover<R: Rng>(
    parents: &[Chromosome],
    num_offsprings: usize,
    rate: f64,
    max_consecutive_rejections: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    let mut offsprings = Vec::with_capacity(num_offsprings);
    if num_offsprings == 0 {
        return offsprings;
    }
    assert!(!parents.is_empty(), "cannot recombine an empty parent list");

    let k = parents.len();
    let point = crossover_point(parents[0].len());
    let mut cursor = 0usize;
    let mut rejections = 0usize;

    while offsprings.len() < num_offsprings {
        let parent1 = &parents[cursor % k];
        let parent2 = &parents[(cursor + 1) % k];
        cursor += 1;

        if rejections >= max_consecutive_rejections {
            trace!(
                cursor,
                rejections,
                "crossover rejection cap reached, copying parent"
            );
            offsprings.push(parent1.clone());
            rejections = 0;
            continue;
        }

        if rng.random_range(0.0..1.0) > rate {
            rejections += 1;
            continue;
        }

        offsprings.push(single_point(parent1, parent2, point));
        rejections = 0;
    }

    offsprings
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips one random gene with probability `rate`. Returns whether it did.
///
/// Empty chromosomes are never changed.
pub fn mutate_one<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) -> bool {
    if rng.random_range(0.0..1.0) > rate || chromosome.is_empty() {
        return false;
    }
    let idx = rng.random_range(0..chromosome.len());
    chromosome.flip(idx);
    true
}

/// Applies [`mutate_one`] to every offspring, preserving order.
pub fn mutate<R: Rng>(
    mut offsprings: Vec<Chromosome>,
    rate: f64,
    rng: &mut R,
) -> Vec<Chromosome> {
    for offspring in &mut offsprings {
        mutate_one(offspring, rate, rng);
    }
    offsprings
}

// ============================================================================
// Tests
// ============================================================================
