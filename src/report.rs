//! Plain-text rendering of a finished run.

use crate::ga::RunResult;
use crate::instance::ProblemInstance;
use std::fmt;

/// Borrows a run result together with its instance for display.
///
/// ```
/// use knapsack_ga::ga::{KnapsackGaConfig, KnapsackGaRunner, Population};
/// use knapsack_ga::instance::ProblemInstance;
/// use knapsack_ga::report::Report;
///
/// let instance = ProblemInstance::from_pairs(&[(5, 10), (5, 10), (5, 10)], 10);
/// let population = Population::from_bits(&[&[1, 1, 0], &[0, 0, 1]]);
/// let config = KnapsackGaConfig::default()
///     .with_population_size(2)
///     .with_num_generations(0);
/// let result = KnapsackGaRunner::run(&instance, population, &config).unwrap();
///
/// let text = Report::new(&instance, &result).to_string();
/// assert!(text.ends_with("Total knapsack weight: 10"));
/// ```
pub struct Report<'a> {
    instance: &'a ProblemInstance,
    result: &'a RunResult,
}

impl<'a> Report<'a> {
    pub fn new(instance: &'a ProblemInstance, result: &'a RunResult) -> Self {
        Self { instance, result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "Last generation:")?;
        writeln!(f, "{}", result.final_population)?;

        writeln!(f, "Last generation fitness:")?;
        let scores: Vec<String> = result.final_fitness.iter().map(|s| s.to_string()).collect();
        writeln!(f, "{}", scores.join(" "))?;

        writeln!(f, "Best individual of the last generation:")?;
        writeln!(f, "{}", result.best)?;

        writeln!(f, "Items in the knapsack:")?;
        let ids: Vec<String> = result
            .included_items(self.instance)
            .iter()
            .map(|item| item.id.to_string())
            .collect();
        writeln!(f, "{}", ids.join("\t"))?;

        write!(f, "Total knapsack weight: {}", result.best_weight)
    }
}
