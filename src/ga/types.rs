//! Chromosome and population types.
//!
//! A [`Chromosome`] is a fixed-length binary inclusion vector: gene `i` set
//! means item `i` of the [`ProblemInstance`](crate::instance::ProblemInstance)
//! goes into the knapsack. A [`Population`] is an ordered list of them whose
//! size never changes during a run.

use rand::Rng;
use std::fmt;
use std::ops::{Deref, Index};

/// Integer fitness score. Zero for infeasible chromosomes.
pub type Fitness = u64;

/// One candidate solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds a chromosome from `0`/`1` digits. Any non-zero digit counts as set.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Each gene is set with probability one half.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Inverts gene `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Indices of set genes, in ascending order.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
    }

    /// Genes as `0`/`1` digits.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self { genes }
    }
}

impl Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.genes[index]
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &g) in self.genes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Ordered, fixed-size collection of chromosomes.
///
/// Dereferences to `[Chromosome]` for read access. The run driver replaces
/// the whole population each generation rather than editing it in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    individuals: Vec<Chromosome>,
}

impl Population {
    pub fn new(individuals: Vec<Chromosome>) -> Self {
        Self { individuals }
    }

    /// Builds a population from rows of `0`/`1` digits.
    pub fn from_bits(rows: &[&[u8]]) -> Self {
        Self {
            individuals: rows.iter().map(|r| Chromosome::from_bits(r)).collect(),
        }
    }

    /// `size` random chromosomes of length `chromosome_len`.
    pub fn random<R: Rng>(size: usize, chromosome_len: usize, rng: &mut R) -> Self {
        Self {
            individuals: (0..size)
                .map(|_| Chromosome::random(chromosome_len, rng))
                .collect(),
        }
    }

    /// Next generation: survivors first, then offspring.
    pub fn from_parts(parents: Vec<Chromosome>, offspring: Vec<Chromosome>) -> Self {
        let mut individuals = Vec::with_capacity(parents.len() + offspring.len());
        individuals.extend(parents);
        individuals.extend(offspring);
        Self { individuals }
    }

    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    pub fn into_inner(self) -> Vec<Chromosome> {
        self.individuals
    }
}

impl Deref for Population {
    type Target = [Chromosome];

    fn deref(&self) -> &[Chromosome] {
        &self.individuals
    }
}

impl From<Vec<Chromosome>> for Population {
    fn from(individuals: Vec<Chromosome>) -> Self {
        Self { individuals }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.individuals.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
