mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_forge::prelude::*;

const COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

fn random_point_set_benches(c: &mut Criterion) {
    let assembler = PointSetAssembler::default();
    let mut group = c.benchmark_group("assemble/random_points");

    for &count in &COUNTS {
        group.throughput(common::elements_throughput(count));
        let config = PointsConfig::new(count, 1024.0, 1024.0);
        let mut rng = StdRng::seed_from_u64(0xA11CE_u64 ^ count as u64);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let set = assembler.random_points(&config, &mut rng).unwrap();
                black_box(set.len());
            });
        });
    }

    group.finish();
}

fn clustered_point_set_benches(c: &mut Criterion) {
    let assembler = PointSetAssembler::default();
    let mut group = c.benchmark_group("assemble/clustered_points");

    for &count in &COUNTS {
        group.throughput(common::elements_throughput(count));
        let config = ClusteredConfig::new(count, 1024.0, 1024.0);
        let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ count as u64);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let set = assembler.clustered_points(&config, &mut rng).unwrap();
                black_box(set.len());
            });
        });
    }

    group.finish();
}

fn hit_color_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators/hit_colors");

    for &count in &COUNTS {
        group.throughput(common::elements_throughput(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| black_box(hit_colors(n).unwrap().len()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = random_point_set_benches, clustered_point_set_benches, hit_color_benches
}
criterion_main!(benches);
