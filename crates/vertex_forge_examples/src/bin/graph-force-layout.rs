use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_forge::prelude::*;
use vertex_forge_examples::{init_tracing, Canvas};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let (width, height) = (800.0, 800.0);

    // Three communities, densely connected inside, a few bridges between.
    let colors: Vec<ColorClass> = (0..36).map(|i| i % 3).collect();
    let mut rng = StdRng::seed_from_u64(99);
    let mut edges = EdgeSet::new();
    for (from, to) in sample_edges(colors.len(), 3, &mut rng).iter() {
        if colors[from] == colors[to] || (from + to) % 11 == 0 {
            edges.push(from, to);
        }
    }

    let config = LayoutConfig::new(width, height).with_steps(40);
    let model = force_directed_layout(&colors, &edges, &config)?;

    let points = PointSetAssembler::default().layout_points(&model, 10.0)?;
    let mesh = triangulate_edges(&points, model.edges(), 1.5)?;

    // outermost nodes land on the layout border; leave room for their radius
    let margin = 40.0;
    let domain = Vec2::new(width + margin, height + margin);
    let mut canvas = Canvas::new((800, 800), domain, [250, 250, 250]);
    canvas.draw(&mesh.batch())?;
    canvas.draw(&points.scene_batch())?;
    canvas.save("graph-force-layout.png")
}
