use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_forge::prelude::*;
use vertex_forge_examples::{init_tracing, Canvas};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = PointsConfig::new(5_000, 1000.0, 1000.0).with_point_size(3.0);

    // Reproducible RNG
    let mut rng = StdRng::seed_from_u64(42);
    let points = PointSetAssembler::default().random_points(&config, &mut rng)?;

    let mut canvas = Canvas::new(
        (1000, 1000),
        Vec2::new(config.width, config.height),
        [26, 28, 35],
    );
    canvas.draw(&points.scene_batch())?;
    canvas.save("points-random.png")
}
