mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_forge::prelude::*;

const NODE_COUNTS: [usize; 3] = [100, 1_000, 10_000];
const MAX_CONNECTIONS: [usize; 2] = [1, 4];

fn graph_triangle_benches(c: &mut Criterion) {
    let assembler = PointSetAssembler::default();

    for &connections in &MAX_CONNECTIONS {
        let mut group = c.benchmark_group(format!("geometry/graph_triangles/max_{connections}"));
        let config = GraphConfig::new(connections, 1.0);

        for &nodes in &NODE_COUNTS {
            let mut rng = StdRng::seed_from_u64(0xBEEF_u64 ^ nodes as u64);
            let points = assembler
                .random_graph_points(&GraphPointsConfig::new(nodes, 1024.0, 1024.0), &mut rng)
                .unwrap();
            group.throughput(common::elements_throughput(nodes * connections));

            group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, _| {
                b.iter(|| {
                    let geometry = graph_triangles(&points, &config, &mut rng).unwrap();
                    black_box(geometry.mesh.vertex_count());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = graph_triangle_benches
}
criterion_main!(benches);
