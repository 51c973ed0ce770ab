//! Random field generators producing flat per-point buffers.
//!
//! Every generator draws from an injected [`Rng`] so runs are reproducible
//! with a seeded RNG. Outputs are sized once up front and never resized.
use rand::Rng;

pub mod clustered;
pub mod colors;
pub mod positions;
pub mod sizes;

pub use clustered::{
    clustered_positions, clustered_positions_with, default_clusters, Cluster, ClusteredField,
};
pub use colors::{hit_colors, palette_colors};
pub use positions::random_positions;
pub use sizes::{constant_sizes, random_sizes};

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Uniform integer in the inclusive range `[lo, hi]`.
///
/// The draw is scaled in `f64` so wide ranges stay uniform.
#[inline]
pub(crate) fn rand_inclusive(rng: &mut dyn Rng, lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi, "empty range {lo}..={hi}");
    let span = (hi - lo) as f64 + 1.0;
    let u = rng.next_u32() as f64 / (u32::MAX as f64 + 1.0);
    (lo + (u * span).floor() as usize).min(hi)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rand01_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let v = rand01(&mut rng);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn rand_inclusive_covers_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let v = rand_inclusive(&mut rng, 3, 6);
            assert!((3..=6).contains(&v));
            seen[v - 3] = true;
        }
        assert!(seen.iter().all(|s| *s), "not every value drawn: {seen:?}");
    }

    #[test]
    fn rand_inclusive_reaches_odd_values_in_wide_ranges() {
        // 2^26 values: a 24-bit fraction could only land on multiples of 4 in
        // the upper half of the range.
        let mut rng = StdRng::seed_from_u64(13);
        let hi = (1usize << 26) - 1;
        let upper: Vec<usize> = (0..4_000)
            .map(|_| rand_inclusive(&mut rng, 0, hi))
            .filter(|v| *v >= 1 << 25)
            .collect();
        assert!(upper.len() > 1_000);

        let odd = upper.iter().filter(|v| *v % 2 == 1).count();
        let share = odd as f64 / upper.len() as f64;
        assert!((share - 0.5).abs() < 0.1, "odd share = {share}");
        assert!(upper.iter().all(|v| *v <= hi));
    }

    #[test]
    fn rand_inclusive_single_value_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(rand_inclusive(&mut rng, 9, 9), 9);
        }
    }
}
