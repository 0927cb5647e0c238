//! Generational loop.
//!
//! [`KnapsackGaRunner`] drives a population through a fixed number of
//! generations: evaluate → select → crossover → mutate → replace.

use super::config::KnapsackGaConfig;
use super::fitness::{fitness, total_weight};
use super::operators::{crossover, mutate};
use super::selection::{best_index, select};
use super::types::{Chromosome, Fitness, Population};
use crate::error::KnapsackError;
use crate::instance::{Item, ProblemInstance};
use crate::random::{create_rng, random_seed};
use rand::Rng;
use tracing::{debug, info};

/// Result of a knapsack GA run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// First individual of the final population with the highest fitness.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Total weight of the items included by `best`.
    pub best_weight: u64,

    /// Population after the last generation.
    pub final_population: Population,

    /// Fitness of the final population, in population order.
    pub final_fitness: Vec<Fitness>,

    /// Per-individual fitness at the start of each generation.
    pub history: Vec<Vec<Fitness>>,

    /// Seed the run's generator was created from.
    ///
    /// `None` when the caller supplied its own generator through
    /// [`KnapsackGaRunner::run_with_rng`].
    pub seed: Option<u64>,
}

impl RunResult {
    /// Items selected by the best individual.
    pub fn included_items<'a>(&self, instance: &'a ProblemInstance) -> Vec<&'a Item> {
        self.best.included().map(|i| &instance.items[i]).collect()
    }

    /// Summary of every recorded generation.
    pub fn generation_stats(&self) -> Vec<GenerationStats> {
        self.history
            .iter()
            .enumerate()
            .map(|(g, scores)| GenerationStats::from_scores(g, scores))
            .collect()
    }
}

/// Summary of one generation's fitness vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    pub best: Fitness,
    pub mean: f64,
    /// Individuals with non-zero fitness.
    pub feasible: usize,
}

impl GenerationStats {
    pub fn from_scores(generation: usize, scores: &[Fitness]) -> Self {
        let best = scores.iter().copied().max().unwrap_or(0);
        let mean = if scores.is_empty() {
            0.0
        } else {
            // Summed in f64 so large scores cannot overflow.
            scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64
        };
        Self {
            generation,
            best,
            mean,
            feasible: scores.iter().filter(|&&s| s > 0).count(),
        }
    }
}

/// Executes the knapsack GA.
///
/// # Usage
///
/// ```ignore
/// let config = KnapsackGaConfig::default().with_seed(42);
/// let result = KnapsackGaRunner::run(&instance, population, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct KnapsackGaRunner;

impl KnapsackGaRunner {
    /// Runs the GA, seeding a generator from `config.seed`.
    ///
    /// Returns an error if the configuration is invalid, the instance is
    /// empty, or `initial` does not match the configured population size
    /// and the instance's item count.
    pub fn run(
        instance: &ProblemInstance,
        initial: Population,
        config: &KnapsackGaConfig,
    ) -> Result<RunResult, KnapsackError> {
        let seed = config.seed.unwrap_or_else(random_seed);
        let mut rng = create_rng(seed);
        Self::evolve(instance, initial, config, &mut rng, Some(seed))
    }

    /// Runs the GA with a caller-owned generator.
    ///
    /// `config.seed` is ignored and the returned `seed` is `None`.
    pub fn run_with_rng<R: Rng>(
        instance: &ProblemInstance,
        initial: Population,
        config: &KnapsackGaConfig,
        rng: &mut R,
    ) -> Result<RunResult, KnapsackError> {
        Self::evolve(instance, initial, config, rng, None)
    }

    fn evolve<R: Rng>(
        instance: &ProblemInstance,
        initial: Population,
        config: &KnapsackGaConfig,
        rng: &mut R,
        seed: Option<u64>,
    ) -> Result<RunResult, KnapsackError> {
        config.validate()?;
        check_inputs(instance, &initial, config)?;

        let num_parents = config.num_parents();
        let num_offsprings = config.num_offsprings();

        info!(
            population_size = config.population_size,
            num_generations = config.num_generations,
            items = instance.len(),
            capacity = instance.capacity,
            seed,
            "starting knapsack GA"
        );

        let mut population = initial;
        let mut history = Vec::with_capacity(config.num_generations);

        for generation in 0..config.num_generations {
            let scores = fitness(&population, instance);

            let stats = GenerationStats::from_scores(generation, &scores);
            debug!(
                generation,
                best = stats.best,
                mean = stats.mean,
                feasible = stats.feasible,
                "generation evaluated"
            );

            let parents = select(&scores, num_parents, &population);
            history.push(scores);

            let offsprings = crossover(
                &parents,
                num_offsprings,
                config.crossover_rate,
                config.max_consecutive_rejections,
                rng,
            );
            let mutants = mutate(offsprings, config.mutation_rate, rng);

            population = Population::from_parts(parents, mutants);
        }

        let final_fitness = fitness(&population, instance);
        // Validation guarantees a non-empty population.
        let best_idx = best_index(&final_fitness).unwrap_or(0);
        let best = population[best_idx].clone();
        let best_fitness = final_fitness[best_idx];
        let best_weight = total_weight(&best, instance);

        info!(best_fitness, best_weight, "knapsack GA finished");

        Ok(RunResult {
            best,
            best_fitness,
            best_weight,
            final_population: population,
            final_fitness,
            history,
            seed,
        })
    }
}

fn check_inputs(
    instance: &ProblemInstance,
    population: &Population,
    config: &KnapsackGaConfig,
) -> Result<(), KnapsackError> {
    if instance.is_empty() {
        return Err(KnapsackError::EmptyInstance);
    }
    if population.len() != config.population_size {
        return Err(KnapsackError::PopulationSizeMismatch {
            expected: config.population_size,
            actual: population.len(),
        });
    }
    if let Some((index, c)) = population
        .iter()
        .enumerate()
        .find(|(_, c)| c.len() != instance.len())
    {
        return Err(KnapsackError::ChromosomeLengthMismatch {
            index,
            expected: instance.len(),
            actual: c.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
