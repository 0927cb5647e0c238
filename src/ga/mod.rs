//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! One fixed pipeline over fixed-length binary chromosomes:
//!
//! 1. [`fitness`]: included value, or zero when over capacity
//! 2. [`selection`]: elitist truncation, leftmost tie-break
//! 3. [`operators::crossover`]: midpoint single-point crossover over
//!    consecutive parent pairs
//! 4. [`operators::mutate`]: at most one gene flip per offspring
//!
//! [`KnapsackGaRunner`] repeats the pipeline for a fixed number of
//! generations, carrying parents over unchanged and filling the rest of the
//! population with mutated offspring.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::KnapsackGaConfig;
pub use runner::{GenerationStats, KnapsackGaRunner, RunResult};
pub use types::{Chromosome, Fitness, Population};
