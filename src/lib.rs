//! Genetic-algorithm optimizer for the 0/1 knapsack problem.
//!
//! Given a fixed set of items, each with a weight and a value, the optimizer
//! evolves a population of binary chromosomes toward a high-value subset
//! whose total weight stays within the knapsack capacity.
//!
//! - [`instance`]: items, capacity, and random instance generation
//! - [`ga`]: the evolutionary engine (fitness, selection, crossover,
//!   mutation, and the generational driver)
//! - [`report`]: plain-text rendering of a finished run
//! - [`random`]: seeded random number generation
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{KnapsackGaConfig, KnapsackGaRunner, Population};
//! use knapsack_ga::instance::{InstanceConfig, ProblemInstance};
//! use knapsack_ga::random::create_rng;
//!
//! let mut rng = create_rng(7);
//! let instance = ProblemInstance::random(&InstanceConfig::default(), &mut rng);
//! let config = KnapsackGaConfig::default()
//!     .with_num_generations(50)
//!     .with_seed(7);
//! let population = Population::random(config.population_size, instance.len(), &mut rng);
//!
//! let result = KnapsackGaRunner::run(&instance, population, &config).unwrap();
//! if result.best_fitness > 0 {
//!     assert!(result.best_weight <= instance.capacity);
//! }
//! assert_eq!(result.history.len(), 50);
//! ```

pub mod error;
pub mod ga;
pub mod instance;
pub mod random;
pub mod report;

pub use error::KnapsackError;
