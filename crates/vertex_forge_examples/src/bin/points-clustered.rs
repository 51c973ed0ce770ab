use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_forge::prelude::*;
use vertex_forge_examples::{init_tracing, Canvas};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = ClusteredConfig::new(8_000, 1200.0, 900.0).with_point_sizes(1.0, 14.0);

    let mut rng = StdRng::seed_from_u64(7);
    let points = PointSetAssembler::default().clustered_points(&config, &mut rng)?;

    let mut canvas = Canvas::new(
        (1200, 900),
        Vec2::new(config.width, config.height),
        [245, 245, 240],
    );
    canvas.draw(&points.scene_batch())?;
    canvas.save("points-clustered.png")
}
