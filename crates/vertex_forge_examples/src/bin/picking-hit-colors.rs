use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use vertex_forge::prelude::*;
use vertex_forge_examples::{init_tracing, Canvas};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = PointsConfig::new(400, 500.0, 500.0).with_point_size(8.0);

    let mut rng = StdRng::seed_from_u64(5);
    let points = PointSetAssembler::default().random_points(&config, &mut rng)?;
    let extent = Vec2::new(config.width, config.height);

    let mut scene = Canvas::new((500, 500), extent, [255, 255, 255]);
    scene.draw(&points.scene_batch())?;
    scene.save("picking-scene.png")?;

    // Off-screen picking pass: same geometry, flat ID colors.
    let mut hit = Canvas::new((500, 500), extent, [255, 255, 255]);
    hit.draw(&points.hit_batch())?;
    hit.save("picking-hit.png")?;

    for probe in [10, 123, 399] {
        let Some(p) = points.position(probe) else {
            continue;
        };
        let px = hit.to_pixel(Vec2::new(p.x, p.y));
        if let Some(pixel) = hit.pixel(px.x as u32, px.y as u32) {
            // Later points may be drawn over the probe.
            info!(probe, picked = decode_pixel(pixel), "read back hit pixel");
        }
    }
    Ok(())
}
