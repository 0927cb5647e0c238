//! Criterion benchmarks for the knapsack GA.
//!
//! Random instances with the default weight/value ranges; capacity scales
//! with item count so that feasible solutions exist.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_ga::ga::{fitness, operators, KnapsackGaConfig, KnapsackGaRunner, Population};
use knapsack_ga::instance::{InstanceConfig, ProblemInstance};
use knapsack_ga::random::create_rng;

fn setup(items: usize, pop: usize) -> (ProblemInstance, Population) {
    let mut rng = create_rng(42);
    let config = InstanceConfig::default()
        .with_num_items(items)
        .with_capacity(items as u64 * 4);
    let instance = ProblemInstance::random(&config, &mut rng);
    let population = Population::random(pop, items, &mut rng);
    (instance, population)
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_run");
    group.sample_size(10);

    for (items, pop, gen) in [(40usize, 16usize, 1000usize), (100, 50, 200), (500, 100, 50)] {
        let (instance, population) = setup(items, pop);
        let config = KnapsackGaConfig::default()
            .with_population_size(pop)
            .with_num_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", items, pop, gen), items),
            &(instance, population, config),
            |b, (i, p, c)| {
                b.iter(|| {
                    let result = KnapsackGaRunner::run(black_box(i), p.clone(), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_fitness");

    for &items in &[40, 200, 1000] {
        let (instance, population) = setup(items, 100);
        group.bench_with_input(
            BenchmarkId::from_parameter(items),
            &(instance, population),
            |b, (i, p)| b.iter(|| black_box(fitness::fitness(black_box(p), i))),
        );
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_crossover");

    for &items in &[40, 200, 1000] {
        let (_, parents) = setup(items, 50);
        group.bench_with_input(BenchmarkId::from_parameter(items), &parents, |b, p| {
            let mut rng = create_rng(7);
            b.iter(|| black_box(operators::crossover(p, 50, 0.8, 64, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run, bench_fitness, bench_crossover);
criterion_main!(benches);
