use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_forge::prelude::*;
use vertex_forge_examples::{init_tracing, Canvas};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let edge_size = 1.5;
    let config = GraphPointsConfig::new(300, 1000.0, 1000.0).with_edge_size(edge_size);

    let mut rng = StdRng::seed_from_u64(1234);
    let points = PointSetAssembler::default().random_graph_points(&config, &mut rng)?;
    let graph = graph_triangles(&points, &GraphConfig::new(2, edge_size), &mut rng)?;
    tracing::info!(
        nodes = points.len(),
        edges = graph.edges.len(),
        triangles = graph.mesh.triangle_count(),
        "built random graph"
    );

    let mut canvas = Canvas::new(
        (1000, 1000),
        Vec2::new(config.width, config.height),
        [255, 255, 255],
    );
    canvas.draw(&graph.mesh.batch())?;
    canvas.draw(&points.scene_batch())?;
    canvas.save("graph-random.png")
}
