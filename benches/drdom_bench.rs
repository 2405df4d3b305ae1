//! Criterion benchmarks for the u-drdom engines on random graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_drdom::aco::{AcoConfig, AntColony, RvnsConfig};
use u_drdom::ga::{GaConfig, GeneticAlgorithm};
use u_drdom::graph::Graph;
use u_drdom::heuristics::{ConstructionHeuristic, Heuristic};
use u_drdom::labeling::Labeling;
use u_drdom::random::create_rng;

fn random_graph(order: usize, p: f64) -> Graph {
    Graph::random(order, false, p, &mut create_rng(7)).expect("valid generator input")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");
    for &n in &[100, 500, 2000] {
        let graph = random_graph(n, 5.0 / n as f64);
        let labeling = Labeling::from_values(
            &(0..n).map(|v| if v % 7 == 0 { 3 } else { 0 }).collect::<Vec<_>>(),
        )
        .expect("labels in domain");
        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, labeling), |b, (g, l)| {
            b.iter(|| {
                let mut l = l.clone();
                black_box(l.repair(black_box(g)))
            })
        });
    }
    group.finish();
}

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristics");
    let graph = random_graph(500, 0.01);
    for h in [
        Heuristic::RandomCover,
        Heuristic::RandomCoverIsolated,
        Heuristic::DegreeGreedy,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(h.name()), &graph, |b, g| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(h.construct(black_box(g), &mut rng)))
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for (n, pop, gen) in [(50usize, 50usize, 50usize), (200, 100, 30)] {
        let graph = random_graph(n, 0.05);
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let mut ga = GeneticAlgorithm::new(g, c.clone()).expect("valid config");
                    black_box(ga.run(Some(&Heuristic::RandomCoverIsolated)))
                })
            },
        );
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);

    for &n in &[50, 200] {
        let graph = random_graph(n, 0.05);
        let config = AcoConfig::default()
            .with_ant_count(5)
            .with_rvns(RvnsConfig::default().with_max_iterations(30))
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(graph, config), |b, (g, c)| {
            b.iter(|| {
                let mut aco = AntColony::new(g, c.clone()).expect("valid config");
                black_box(aco.run(5))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_repair, bench_heuristics, bench_ga, bench_aco);
criterion_main!(benches);
