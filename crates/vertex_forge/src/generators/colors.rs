//! Display colors sampled from a palette, and per-point hit colors.
use rand::Rng;

use crate::buffers::COLOR_ARITY;
use crate::color::{self, Palette, ID_SPACE};
use crate::error::{Error, Result};
use crate::generators::rand01;

/// Picks a palette entry uniformly at random for each of `count` points.
///
/// Returns `4 * count` floats, RGB scaled to `[0, 1]` with alpha `1`.
pub fn palette_colors(
    count: usize,
    palette: Palette<'_>,
    rng: &mut dyn Rng,
) -> Result<Vec<f32>> {
    if count > 0 && palette.is_empty() {
        return Err(Error::InvalidConfig("palette must not be empty".into()));
    }

    let last = palette.len().saturating_sub(1);
    let mut out = Vec::with_capacity(count * COLOR_ARITY);
    for _ in 0..count {
        let slot = ((rand01(rng) * palette.len() as f32).floor() as usize).min(last);
        let rgb = color::Rgb::from(palette.entries()[slot]);
        out.extend_from_slice(&rgb.to_rgba_f32());
    }
    Ok(out)
}

/// Hit color for every point: point `i` gets `encode(i)`.
///
/// Pure function of the index, so colors are unique and stable across runs.
pub fn hit_colors(count: usize) -> Result<Vec<f32>> {
    if count as u64 > ID_SPACE as u64 {
        return Err(Error::IdOverflow {
            id: count as u64 - 1,
        });
    }

    let mut out = Vec::with_capacity(count * COLOR_ARITY);
    for id in 0..count as u32 {
        out.extend_from_slice(&color::encode(id)?.to_rgba_f32());
    }
    Ok(out)
}
