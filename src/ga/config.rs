//! GA configuration.
//!
//! [`KnapsackGaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::KnapsackError;

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::KnapsackGaConfig;
///
/// let config = KnapsackGaConfig::default();
/// assert_eq!(config.population_size, 16);
/// assert_eq!(config.num_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::KnapsackGaConfig;
///
/// let config = KnapsackGaConfig::default()
///     .with_population_size(32)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackGaConfig {
    /// Number of individuals in the population.
    ///
    /// Half (rounded down) survive as parents each generation; the rest are
    /// replaced by offspring.
    pub population_size: usize,

    /// Exact number of generations to run. There is no early stopping.
    pub num_generations: usize,

    /// Probability that a crossover attempt on a parent pair is accepted (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability that an offspring has one gene flipped (0.0–1.0).
    pub mutation_rate: f64,

    /// Consecutive rejected crossover attempts after which the next attempt
    /// copies its first parent instead.
    pub max_consecutive_rejections: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed once at the start of the run.
    pub seed: Option<u64>,
}

impl Default for KnapsackGaConfig {
    fn default() -> Self {
        Self {
            population_size: 16,
            num_generations: 1000,
            crossover_rate: 0.8,
            mutation_rate: 0.15,
            max_consecutive_rejections: 64,
            seed: None,
        }
    }
}

impl KnapsackGaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rejection cap.
    pub fn with_max_consecutive_rejections(mut self, n: usize) -> Self {
        self.max_consecutive_rejections = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents kept each generation.
    pub fn num_parents(&self) -> usize {
        self.population_size / 2
    }

    /// Number of offspring produced each generation.
    pub fn num_offsprings(&self) -> usize {
        self.population_size - self.num_parents()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.population_size < 2 {
            return Err(KnapsackError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(KnapsackError::InvalidConfig(
                "crossover_rate must be within [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnapsackError::InvalidConfig(
                "mutation_rate must be within [0, 1]".into(),
            ));
        }
        if self.max_consecutive_rejections == 0 {
            return Err(KnapsackError::InvalidConfig(
                "max_consecutive_rejections must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KnapsackGaConfig::default();
        assert_eq!(config.population_size, 16);
        assert_eq!(config.num_generations, 1000);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.15).abs() < 1e-10);
        assert_eq!(config.max_consecutive_rejections, 64);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = KnapsackGaConfig::default()
            .with_population_size(30)
            .with_num_generations(10)
            .with_crossover_rate(0.6)
            .with_mutation_rate(0.05)
            .with_max_consecutive_rejections(8)
            .with_seed(42);

        assert_eq!(config.population_size, 30);
        assert_eq!(config.num_generations, 10);
        assert!((config.crossover_rate - 0.6).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.max_consecutive_rejections, 8);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_parent_offspring_split() {
        let even = KnapsackGaConfig::default().with_population_size(16);
        assert_eq!((even.num_parents(), even.num_offsprings()), (8, 8));

        let odd = KnapsackGaConfig::default().with_population_size(7);
        assert_eq!((odd.num_parents(), odd.num_offsprings()), (3, 4));
    }

    #[test]
    fn test_validate_ok() {
        assert!(KnapsackGaConfig::default().validate().is_ok());
        // Zero generations is a valid, if trivial, run.
        assert!(KnapsackGaConfig::default()
            .with_num_generations(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = KnapsackGaConfig::default().with_population_size(1);
        assert_eq!(
            config.validate(),
            Err(KnapsackError::InvalidConfig(
                "population_size must be at least 2".into()
            ))
        );
    }

    #[test]
    fn test_validate_rates_set_directly() {
        let config = KnapsackGaConfig {
            mutation_rate: 1.5,
            ..KnapsackGaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = KnapsackGaConfig {
            crossover_rate: f64::NAN,
            ..KnapsackGaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_rejection_cap() {
        let config = KnapsackGaConfig::default().with_max_consecutive_rejections(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let config = KnapsackGaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);

        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }
}
