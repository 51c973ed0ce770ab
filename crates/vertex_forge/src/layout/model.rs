//! Layout result types.
use mint::Vector2;

use crate::buffers::EdgeSet;

/// Grouping key used only to seed the initial layout.
pub type ColorClass = u32;

/// Node arrays, parallel by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutNodes {
    pub xs: Vec<f32>,
    pub ys: Vec<f32>,
    pub colors: Vec<ColorClass>,
}

impl LayoutNodes {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Finished layout. Built and mutated only by the solver; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutModel {
    pub(crate) nodes: LayoutNodes,
    pub(crate) edges: EdgeSet,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) steps: usize,
}

impl LayoutModel {
    pub fn nodes(&self) -> &LayoutNodes {
        &self.nodes
    }

    pub fn xs(&self) -> &[f32] {
        &self.nodes.xs
    }

    pub fn ys(&self) -> &[f32] {
        &self.nodes.ys
    }

    pub fn colors(&self) -> &[ColorClass] {
        &self.nodes.colors
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn position(&self, index: usize) -> Option<Vector2<f32>> {
        let x = *self.nodes.xs.get(index)?;
        let y = *self.nodes.ys.get(index)?;
        Some(Vector2 { x, y })
    }

    /// Interleaved `x, y` buffer with each coordinate multiplied by `(sx, sy)`.
    pub fn scaled_positions(&self, sx: f32, sy: f32) -> Vec<f32> {
        self.nodes
            .xs
            .iter()
            .zip(&self.nodes.ys)
            .flat_map(|(x, y)| [x * sx, y * sy])
            .collect()
    }

    /// Uniform factor that fits the layout into `width x height` centered on
    /// the origin: the largest `|x|` or `|y|` lands on the nearer half-extent.
    ///
    /// Returns `1.0` when every node sits at the origin.
    pub fn fit_scale(&self) -> f32 {
        let max_abs = self
            .nodes
            .xs
            .iter()
            .chain(&self.nodes.ys)
            .map(|v| v.abs())
            .filter(|v| v.is_finite())
            .fold(0.0_f32, f32::max);
        if max_abs > 0.0 {
            0.5 * self.width.min(self.height) / max_abs
        } else {
            1.0
        }
    }

    /// Interleaved `x, y` buffer scaled by [`Self::fit_scale`].
    pub fn fitted_positions(&self) -> Vec<f32> {
        let s = self.fit_scale();
        self.scaled_positions(s, s)
    }
}
