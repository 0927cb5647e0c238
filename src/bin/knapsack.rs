use clap::Parser;
use knapsack_ga::ga::{KnapsackGaConfig, KnapsackGaRunner, Population};
use knapsack_ga::instance::{InstanceConfig, ProblemInstance};
use knapsack_ga::random::{create_rng, random_seed};
use knapsack_ga::report::Report;
use std::process::ExitCode;
use tracing::error;

/// Solve a random 0/1 knapsack instance with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "knapsack", version, about)]
struct Args {
    /// Number of items in the generated instance
    #[arg(long, default_value_t = 40)]
    items: usize,

    /// Knapsack capacity
    #[arg(long, default_value_t = 100)]
    capacity: u64,

    /// Population size
    #[arg(long, default_value_t = 16)]
    population: usize,

    /// Number of generations
    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// Seed for instance generation and the run; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(random_seed);

    let instance_config = InstanceConfig::default()
        .with_num_items(args.items)
        .with_capacity(args.capacity);
    let config = KnapsackGaConfig::default()
        .with_population_size(args.population)
        .with_num_generations(args.generations)
        .with_seed(seed);

    if let Err(e) = instance_config.validate().and_then(|_| config.validate()) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let mut rng = create_rng(seed);
    let instance = ProblemInstance::random(&instance_config, &mut rng);
    let population = Population::random(config.population_size, instance.len(), &mut rng);

    println!("Available items:");
    println!("{instance}");
    println!(
        "Population shape = ({}, {})",
        config.population_size,
        instance.len()
    );

    match KnapsackGaRunner::run(&instance, population, &config) {
        Ok(result) => {
            println!("{}", Report::new(&instance, &result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
