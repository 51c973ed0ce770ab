//! Point size distributions.
use rand::Rng;

use crate::generators::rand01;

/// Random sizes in `[min, max]`, biased toward `min`.
///
/// Each size is `min + u1 * u2 * u3 * (max - min)` with three independent
/// uniform draws, which yields many small points and a few large ones.
pub fn random_sizes(count: usize, min: f32, max: f32, rng: &mut dyn Rng) -> Vec<f32> {
    let range = max - min;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let t = rand01(rng) * rand01(rng) * rand01(rng);
        out.push(t * range + min);
    }
    out
}

pub fn constant_sizes(count: usize, size: f32) -> Vec<f32> {
    vec![size; count]
}
