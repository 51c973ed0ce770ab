//! Cluster-biased point placement.
//!
//! Points are spread over a fixed set of circular clusters. Each point picks a
//! cluster uniformly, then an angle in `[0, 2π)` and a distance in
//! `[0, radius]`. The distance is drawn linearly, not by square root, so
//! points pile up toward cluster centers. Each cluster owns one palette slot
//! and every point inherits that color.
use glam::Vec2;
use rand::Rng;

use crate::buffers::{COLOR_ARITY, POSITION_ARITY};
use crate::color::{Palette, Rgb};
use crate::error::{Error, Result};
use crate::generators::rand01;

/// Circular cluster with a center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    /// Center x in domain units.
    pub x: f32,
    /// Center y in domain units.
    pub y: f32,
    /// Largest distance a member point may sit from the center.
    pub radius: f32,
}

impl Cluster {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// The three clusters laid out for a `width` x `height` domain: one top
/// center, two bottom left/right, each with radius `min(width, height) / 4`.
pub fn default_clusters(width: f32, height: f32) -> [Cluster; 3] {
    let radius = width.min(height) / 4.0;
    [
        Cluster::new(0.0, height / 4.0, radius),
        Cluster::new(width / 4.0, -height / 4.0, radius),
        Cluster::new(-width / 4.0, -height / 4.0, radius),
    ]
}

/// Positions and colors from a clustered draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusteredField {
    /// `2 * N` floats.
    pub positions: Vec<f32>,
    /// `4 * N` floats, the owning cluster's palette color.
    pub colors: Vec<f32>,
    /// Cluster index of each point.
    pub memberships: Vec<usize>,
}

/// Clustered placement over [`default_clusters`] for the given domain.
pub fn clustered_positions(
    count: usize,
    width: f32,
    height: f32,
    palette: Palette<'_>,
    rng: &mut dyn Rng,
) -> Result<ClusteredField> {
    clustered_positions_with(count, &default_clusters(width, height), palette, rng)
}

/// Clustered placement over caller-supplied clusters. Cluster `k` uses palette slot `k`.
pub fn clustered_positions_with(
    count: usize,
    clusters: &[Cluster],
    palette: Palette<'_>,
    rng: &mut dyn Rng,
) -> Result<ClusteredField> {
    if clusters.is_empty() {
        return Err(Error::InvalidConfig("at least one cluster is required".into()));
    }
    if palette.len() < clusters.len() {
        return Err(Error::InvalidConfig(format!(
            "palette has {} entries but {} clusters need a slot each",
            palette.len(),
            clusters.len()
        )));
    }

    let slot_colors: Vec<[f32; 4]> = palette.entries()[..clusters.len()]
        .iter()
        .map(|c| Rgb::from(*c).to_rgba_f32())
        .collect();

    let mut field = ClusteredField {
        positions: Vec::with_capacity(count * POSITION_ARITY),
        colors: Vec::with_capacity(count * COLOR_ARITY),
        memberships: Vec::with_capacity(count),
    };

    for _ in 0..count {
        let k = ((rand01(rng) * clusters.len() as f32).floor() as usize).min(clusters.len() - 1);
        let cluster = &clusters[k];

        let r = rand01(rng) * cluster.radius;
        let theta = rand01(rng) * core::f32::consts::TAU;
        let p = cluster.center() + Vec2::new(theta.cos(), theta.sin()) * r;

        field.positions.extend_from_slice(&[p.x, p.y]);
        field.colors.extend_from_slice(&slot_colors[k]);
        field.memberships.push(k);
    }

    Ok(field)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::color::DEFAULT_PALETTE;

    #[test]
    fn default_clusters_match_layout() {
        let c = default_clusters(400.0, 200.0);
        assert_eq!(c[0], Cluster::new(0.0, 50.0, 50.0));
        assert_eq!(c[1], Cluster::new(100.0, -50.0, 50.0));
        assert_eq!(c[2], Cluster::new(-100.0, -50.0, 50.0));
    }

    #[test]
    fn points_lie_inside_their_cluster_with_cluster_color() {
        let mut rng = StdRng::seed_from_u64(31);
        let clusters = default_clusters(300.0, 300.0);
        let field = clustered_positions(1_000, 300.0, 300.0, DEFAULT_PALETTE, &mut rng).unwrap();

        assert_eq!(field.positions.len(), 2_000);
        assert_eq!(field.colors.len(), 4_000);
        assert_eq!(field.memberships.len(), 1_000);

        for (i, &k) in field.memberships.iter().enumerate() {
            let cluster = clusters[k];
            let p = Vec2::new(field.positions[2 * i], field.positions[2 * i + 1]);
            let d = p.distance(cluster.center());
            assert!(d <= cluster.radius + 1e-3, "point {i} at distance {d}");

            let expected = DEFAULT_PALETTE.get(k).unwrap().to_rgba_f32();
            assert_eq!(&field.colors[4 * i..4 * i + 4], &expected[..]);
        }
    }

    #[test]
    fn every_cluster_receives_points() {
        let mut rng = StdRng::seed_from_u64(8);
        let field = clustered_positions(300, 100.0, 100.0, DEFAULT_PALETTE, &mut rng).unwrap();
        for k in 0..3 {
            assert!(field.memberships.contains(&k), "cluster {k} is empty");
        }
    }

    #[test]
    fn radius_is_drawn_linearly() {
        // With r ~ U(0, R) half the points fall inside R/2; an area-uniform
        // sampler would put only a quarter there.
        let mut rng = StdRng::seed_from_u64(4);
        let cluster = [Cluster::new(0.0, 0.0, 10.0)];
        let field = clustered_positions_with(10_000, &cluster, DEFAULT_PALETTE, &mut rng).unwrap();
        let inner = field
            .positions
            .chunks_exact(2)
            .filter(|p| Vec2::new(p[0], p[1]).length() < 5.0)
            .count();
        let share = inner as f32 / 10_000.0;
        assert!((share - 0.5).abs() < 0.03, "inner share = {share}");
    }

    #[test]
    fn small_palette_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let two = Palette::new(&[[0, 0, 0], [255, 255, 255]]);
        let err = clustered_positions(10, 10.0, 10.0, two, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
