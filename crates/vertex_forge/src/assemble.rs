//! Assembles complete point sets from the individual generators.
//!
//! Four recipes are provided by [`PointSetAssembler`]:
//! - [`PointSetAssembler::random_points`]: uniform positions, palette colors, constant size.
//! - [`PointSetAssembler::random_graph_points`]: same, sized by the edge width.
//! - [`PointSetAssembler::clustered_points`]: three colored clusters with size falloff.
//! - [`PointSetAssembler::layout_points`]: positions taken from a finished [`LayoutModel`].
use rand::Rng;
use tracing::debug;

use crate::buffers::{PointSet, COLOR_ARITY};
use crate::color::{Palette, Rgb, DEFAULT_PALETTE};
use crate::error::{Error, Result};
use crate::generators::{
    clustered_positions, constant_sizes, hit_colors, palette_colors, random_positions,
    random_sizes,
};
use crate::layout::LayoutModel;

/// Plain random point cloud.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointsConfig {
    /// Number of points to generate.
    pub num_points: usize,
    /// Domain width; x is drawn from `[-width / 2, width / 2)`.
    pub width: f32,
    /// Domain height; y is drawn from `[-height / 2, height / 2)`.
    pub height: f32,
    /// Size written for every point.
    pub point_size: f32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            num_points: 1_000,
            width: 800.0,
            height: 600.0,
            point_size: 4.0,
        }
    }
}

impl PointsConfig {
    pub fn new(num_points: usize, width: f32, height: f32) -> Self {
        Self {
            num_points,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_domain(self.width, self.height)?;
        validate_size("point_size", self.point_size)
    }
}

/// Random point cloud used as graph nodes; points are drawn at the edge width.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphPointsConfig {
    /// Number of graph nodes.
    pub num_points: usize,
    /// Domain width, centered on the origin.
    pub width: f32,
    /// Domain height, centered on the origin.
    pub height: f32,
    /// Edge quad width, also used as every node's point size.
    pub edge_size: f32,
}

impl Default for GraphPointsConfig {
    fn default() -> Self {
        Self {
            num_points: 200,
            width: 800.0,
            height: 600.0,
            edge_size: 1.0,
        }
    }
}

impl GraphPointsConfig {
    pub fn new(num_points: usize, width: f32, height: f32) -> Self {
        Self {
            num_points,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_edge_size(mut self, edge_size: f32) -> Self {
        self.edge_size = edge_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_domain(self.width, self.height)?;
        validate_size("edge_size", self.edge_size)
    }
}

/// Clustered point cloud with sizes between `min_point_size` and `max_point_size`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusteredConfig {
    /// Number of points, spread over the default clusters.
    pub num_points: usize,
    /// Domain width that cluster centers and radii are scaled by.
    pub width: f32,
    /// Domain height that cluster centers and radii are scaled by.
    pub height: f32,
    /// Lower bound of the skewed size draw.
    pub min_point_size: f32,
    /// Upper bound of the skewed size draw.
    pub max_point_size: f32,
}

impl Default for ClusteredConfig {
    fn default() -> Self {
        Self {
            num_points: 1_000,
            width: 800.0,
            height: 600.0,
            min_point_size: 1.0,
            max_point_size: 10.0,
        }
    }
}

impl ClusteredConfig {
    pub fn new(num_points: usize, width: f32, height: f32) -> Self {
        Self {
            num_points,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_point_sizes(mut self, min_point_size: f32, max_point_size: f32) -> Self {
        self.min_point_size = min_point_size;
        self.max_point_size = max_point_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_domain(self.width, self.height)?;
        validate_size("min_point_size", self.min_point_size)?;
        validate_size("max_point_size", self.max_point_size)?;
        if self.min_point_size > self.max_point_size {
            return Err(Error::InvalidConfig(format!(
                "min_point_size {} exceeds max_point_size {}",
                self.min_point_size, self.max_point_size
            )));
        }
        Ok(())
    }
}

/// Builds [`PointSet`]s from generators using one palette.
#[derive(Debug, Clone, Copy)]
pub struct PointSetAssembler<'p> {
    pub palette: Palette<'p>,
}

impl Default for PointSetAssembler<'static> {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
        }
    }
}

impl<'p> PointSetAssembler<'p> {
    pub fn new(palette: Palette<'p>) -> Self {
        Self { palette }
    }

    pub fn random_points(&self, config: &PointsConfig, rng: &mut dyn Rng) -> Result<PointSet> {
        config.validate()?;
        let n = config.num_points;
        let set = PointSet {
            positions: random_positions(n, config.width, config.height, rng),
            colors: palette_colors(n, self.palette, rng)?,
            hit_colors: hit_colors(n)?,
            sizes: constant_sizes(n, config.point_size),
        };
        debug!(points = n, "assembled random point set");
        Ok(set)
    }

    pub fn random_graph_points(
        &self,
        config: &GraphPointsConfig,
        rng: &mut dyn Rng,
    ) -> Result<PointSet> {
        config.validate()?;
        let n = config.num_points;
        let set = PointSet {
            positions: random_positions(n, config.width, config.height, rng),
            colors: palette_colors(n, self.palette, rng)?,
            hit_colors: hit_colors(n)?,
            sizes: constant_sizes(n, config.edge_size),
        };
        debug!(points = n, "assembled random graph point set");
        Ok(set)
    }

    pub fn clustered_points(
        &self,
        config: &ClusteredConfig,
        rng: &mut dyn Rng,
    ) -> Result<PointSet> {
        config.validate()?;
        let n = config.num_points;
        let field = clustered_positions(n, config.width, config.height, self.palette, rng)?;
        let set = PointSet {
            positions: field.positions,
            colors: field.colors,
            hit_colors: hit_colors(n)?,
            sizes: random_sizes(n, config.min_point_size, config.max_point_size, rng),
        };
        debug!(points = n, "assembled clustered point set");
        Ok(set)
    }

    /// Point set over a finished layout.
    ///
    /// Layout coordinates are scaled uniformly so the layout fills the
    /// model's `width x height` viewport; see [`LayoutModel::fit_scale`].
    /// Color class `c` is drawn with palette slot `c % palette.len()`.
    pub fn layout_points(&self, model: &LayoutModel, point_size: f32) -> Result<PointSet> {
        validate_size("point_size", point_size)?;
        let n = model.node_count();
        if n > 0 && self.palette.is_empty() {
            return Err(Error::InvalidConfig("palette must not be empty".into()));
        }

        let mut colors = Vec::with_capacity(n * COLOR_ARITY);
        for &class in model.colors() {
            let slot = class as usize % self.palette.len();
            colors.extend_from_slice(&Rgb::from(self.palette.entries()[slot]).to_rgba_f32());
        }

        let set = PointSet {
            positions: model.fitted_positions(),
            colors,
            hit_colors: hit_colors(n)?,
            sizes: constant_sizes(n, point_size),
        };
        debug!(points = n, "assembled layout point set");
        Ok(set)
    }
}

fn validate_domain(width: f32, height: f32) -> Result<()> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(Error::InvalidConfig(
            "width and height must be finite and > 0".into(),
        ));
    }
    Ok(())
}

fn validate_size(name: &str, size: f32) -> Result<()> {
    if !size.is_finite() || size < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::buffers::EdgeSet;
    use crate::color::decode;
    use crate::geometry::{graph_triangles, GraphConfig};
    use crate::layout::{force_directed_layout, LayoutConfig};

    #[test]
    fn random_points_have_consistent_buffers() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = PointsConfig::new(250, 400.0, 300.0).with_point_size(3.0);
        let set = PointSetAssembler::default()
            .random_points(&config, &mut rng)
            .unwrap();

        assert_eq!(set.len(), 250);
        assert_eq!(set.positions.len(), 500);
        assert_eq!(set.colors.len(), 1_000);
        assert_eq!(set.hit_colors.len(), 1_000);
        assert_eq!(set.sizes.len(), 250);
        assert!(set.validate().is_ok());
        assert!(set.sizes.iter().all(|s| *s == 3.0));
    }

    #[test]
    fn hit_color_of_point_decodes_to_its_index() {
        let mut rng = StdRng::seed_from_u64(2);
        let set = PointSetAssembler::default()
            .random_points(&PointsConfig::new(300, 10.0, 10.0), &mut rng)
            .unwrap();
        for i in [0, 1, 255, 256, 299] {
            let c = set.hit_color(i).unwrap();
            let rgb = Rgb::new(
                (c[0] * 255.0).round() as u8,
                (c[1] * 255.0).round() as u8,
                (c[2] * 255.0).round() as u8,
            );
            assert_eq!(decode(rgb), i as u32);
        }
    }

    #[test]
    fn graph_points_are_sized_by_edge_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GraphPointsConfig::new(40, 100.0, 100.0).with_edge_size(2.5);
        let set = PointSetAssembler::default()
            .random_graph_points(&config, &mut rng)
            .unwrap();
        assert!(set.validate().is_ok());
        assert!(set.sizes.iter().all(|s| *s == 2.5));

        let geometry = graph_triangles(&set, &GraphConfig::new(2, 2.5), &mut rng).unwrap();
        assert_eq!(geometry.mesh.vertex_count(), geometry.edges.len() * 6);
    }

    #[test]
    fn clustered_points_use_size_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let config = ClusteredConfig::new(500, 300.0, 200.0).with_point_sizes(2.0, 8.0);
        let set = PointSetAssembler::default()
            .clustered_points(&config, &mut rng)
            .unwrap();
        assert!(set.validate().is_ok());
        assert!(set.sizes.iter().all(|s| (2.0..=8.0).contains(s)));
    }

    #[test]
    fn clustered_config_rejects_inverted_sizes() {
        let config = ClusteredConfig::default().with_point_sizes(5.0, 1.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn invalid_domain_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let assembler = PointSetAssembler::default();
        assert!(assembler
            .random_points(&PointsConfig::new(10, 0.0, 10.0), &mut rng)
            .is_err());
        assert!(assembler
            .random_points(&PointsConfig::new(10, 10.0, 10.0).with_point_size(-1.0), &mut rng)
            .is_err());
    }

    #[test]
    fn empty_point_set_is_valid() {
        let mut rng = StdRng::seed_from_u64(6);
        let set = PointSetAssembler::default()
            .random_points(&PointsConfig::new(0, 10.0, 10.0), &mut rng)
            .unwrap();
        assert!(set.is_empty());
        assert!(set.validate().is_ok());
    }

    #[test]
    fn layout_points_follow_model() {
        let edges: EdgeSet = [(0, 1), (1, 2), (2, 3)].into_iter().collect();
        let config = LayoutConfig::new(200.0, 100.0).with_steps(1);
        let model = force_directed_layout(&[0, 1, 9, 1], &edges, &config).unwrap();

        let set = PointSetAssembler::default()
            .layout_points(&model, 5.0)
            .unwrap();
        assert!(set.validate().is_ok());
        assert_eq!(set.len(), 4);

        let s = model.fit_scale();
        let p = set.position(0).unwrap();
        assert_eq!((p.x, p.y), (model.xs()[0] * s, model.ys()[0] * s));

        let slot_of = |class: usize| {
            DEFAULT_PALETTE
                .get(class % DEFAULT_PALETTE.len())
                .unwrap()
                .to_rgba_f32()
        };
        assert_eq!(set.color(0), Some(slot_of(0)));
        assert_eq!(set.color(1), Some(slot_of(1)));
        assert_eq!(set.color(2), Some(slot_of(9)));
        assert_eq!(set.color(3), set.color(1));
    }

    #[test]
    fn layout_points_fill_the_viewport() {
        let colors: Vec<u32> = (0..40).map(|i| i % 5).collect();
        let edges: EdgeSet = (0..39).map(|i| (i, i + 1)).collect();
        let model = force_directed_layout(&colors, &edges, &LayoutConfig::new(800.0, 600.0))
            .unwrap();

        let set = PointSetAssembler::default()
            .layout_points(&model, 4.0)
            .unwrap();
        let coords = &set.positions;
        let inside = |v: f32, half: f32| v.abs() <= half + 1e-3;
        assert!(coords.chunks_exact(2).all(|p| inside(p[0], 400.0) && inside(p[1], 300.0)));

        // the outermost node reaches the shorter half-extent, not a few pixels
        let reach = coords.iter().fold(0.0_f32, |m, v| m.max(v.abs()));
        assert!((reach - 300.0).abs() < 1e-3, "reach = {reach}");
    }
}
