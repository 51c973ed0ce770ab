//! Uniform random point placement.
use rand::Rng;

use crate::buffers::POSITION_ARITY;
use crate::generators::rand01;

/// Places `count` points uniformly inside the `width` x `height` rectangle centered on the origin.
///
/// Returns `2 * count` floats laid out as `x0, y0, x1, y1, ...`. Each point
/// consumes two draws, x first.
pub fn random_positions(count: usize, width: f32, height: f32, rng: &mut dyn Rng) -> Vec<f32> {
    let half_w = width * 0.5;
    let half_h = height * 0.5;

    let mut out = Vec::with_capacity(count * POSITION_ARITY);
    for _ in 0..count {
        let x = rand01(rng) * width - half_w;
        let y = rand01(rng) * height - half_h;
        out.push(x);
        out.push(y);
    }
    out
}
