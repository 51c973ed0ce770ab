//! Flat vertex buffers and the draw contract handed to a rendering backend.
//!
//! All buffers are contiguous `f32` arrays with a fixed item arity:
//! positions carry two floats per vertex, colors four and sizes one. A
//! backend uploads each [`AttributeBuffer`] as-is and draws
//! [`DrawBatch::vertex_count`] primitives of kind [`Primitive`].
use mint::Vector2;

use crate::error::{Error, Result};

/// Floats per position item (`x, y`).
pub const POSITION_ARITY: usize = 2;
/// Floats per color item (`r, g, b, a`).
pub const COLOR_ARITY: usize = 4;
/// Floats per size item.
pub const SIZE_ARITY: usize = 1;

/// Primitive kind used to draw a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Triangles,
}

/// A named flat buffer tagged with its item arity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeBuffer<'a> {
    pub name: &'static str,
    pub item_size: usize,
    pub data: &'a [f32],
}

impl<'a> AttributeBuffer<'a> {
    pub fn new(name: &'static str, item_size: usize, data: &'a [f32]) -> Self {
        debug_assert!(item_size > 0, "item_size must be > 0");
        Self {
            name,
            item_size,
            data,
        }
    }

    pub fn num_items(&self) -> usize {
        self.data.len() / self.item_size
    }
}

/// Everything a backend needs for one draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch<'a> {
    pub primitive: Primitive,
    pub attributes: Vec<AttributeBuffer<'a>>,
    pub vertex_count: usize,
}

impl<'a> DrawBatch<'a> {
    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeBuffer<'a>> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Per-point attribute buffers. Index `i` refers to the same point in every buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    /// `2 * N` floats.
    pub positions: Vec<f32>,
    /// `4 * N` floats, channels in `[0, 1]`.
    pub colors: Vec<f32>,
    /// `4 * N` floats, one unique color per point.
    pub hit_colors: Vec<f32>,
    /// `N` floats.
    pub sizes: Vec<f32>,
}

impl PointSet {
    /// Number of points, derived from the position buffer.
    pub fn len(&self) -> usize {
        self.positions.len() / POSITION_ARITY
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<Vector2<f32>> {
        let p = self
            .positions
            .get(index * POSITION_ARITY..(index + 1) * POSITION_ARITY)?;
        Some(Vector2 { x: p[0], y: p[1] })
    }

    pub fn color(&self, index: usize) -> Option<[f32; 4]> {
        rgba_at(&self.colors, index)
    }

    pub fn hit_color(&self, index: usize) -> Option<[f32; 4]> {
        rgba_at(&self.hit_colors, index)
    }

    /// Checks that all four buffers describe the same number of points.
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() % POSITION_ARITY != 0 {
            return Err(Error::InvalidConfig(format!(
                "position buffer length {} is not a multiple of {POSITION_ARITY}",
                self.positions.len()
            )));
        }
        let n = self.len();
        let expected = [
            ("colors", self.colors.len(), n * COLOR_ARITY),
            ("hit_colors", self.hit_colors.len(), n * COLOR_ARITY),
            ("sizes", self.sizes.len(), n * SIZE_ARITY),
        ];
        for (name, actual, want) in expected {
            if actual != want {
                return Err(Error::InvalidConfig(format!(
                    "{name} buffer has {actual} floats, expected {want} for {n} points"
                )));
            }
        }
        Ok(())
    }

    /// Display pass: positions, palette colors and sizes drawn as points.
    pub fn scene_batch(&self) -> DrawBatch<'_> {
        self.points_batch(&self.colors)
    }

    /// Picking pass: same geometry, drawn with hit colors.
    pub fn hit_batch(&self) -> DrawBatch<'_> {
        self.points_batch(&self.hit_colors)
    }

    fn points_batch<'a>(&'a self, colors: &'a [f32]) -> DrawBatch<'a> {
        DrawBatch {
            primitive: Primitive::Points,
            attributes: vec![
                AttributeBuffer::new("position", POSITION_ARITY, &self.positions),
                AttributeBuffer::new("color", COLOR_ARITY, colors),
                AttributeBuffer::new("size", SIZE_ARITY, &self.sizes),
            ],
            vertex_count: self.len(),
        }
    }
}

/// Triangle list with per-vertex colors; six vertices per rendered edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl TriangleMesh {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * POSITION_ARITY),
            colors: Vec::with_capacity(vertices * COLOR_ARITY),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_ARITY
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Option<Vector2<f32>> {
        let p = self
            .positions
            .get(index * POSITION_ARITY..(index + 1) * POSITION_ARITY)?;
        Some(Vector2 { x: p[0], y: p[1] })
    }

    pub fn vertex_color(&self, index: usize) -> Option<[f32; 4]> {
        rgba_at(&self.colors, index)
    }

    pub(crate) fn push_vertex(&mut self, position: glam::Vec2, color: &[f32]) {
        self.positions.extend_from_slice(&[position.x, position.y]);
        self.colors.extend_from_slice(color);
    }

    pub fn batch(&self) -> DrawBatch<'_> {
        DrawBatch {
            primitive: Primitive::Triangles,
            attributes: vec![
                AttributeBuffer::new("position", POSITION_ARITY, &self.positions),
                AttributeBuffer::new("color", COLOR_ARITY, &self.colors),
            ],
            vertex_count: self.vertex_count(),
        }
    }
}

/// Ordered `(from, to)` index pairs stored as parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    pub from: Vec<usize>,
    pub to: Vec<usize>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            from: Vec::with_capacity(capacity),
            to: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, from: usize, to: usize) {
        self.from.push(from);
        self.to.push(to);
    }

    pub fn len(&self) -> usize {
        self.from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.from.iter().copied().zip(self.to.iter().copied())
    }

    /// Ensures both arrays have the same length and every index is below `node_count`.
    pub fn validate(&self, node_count: usize) -> Result<()> {
        if self.from.len() != self.to.len() {
            return Err(Error::InvalidConfig(format!(
                "edge arrays differ in length: {} from, {} to",
                self.from.len(),
                self.to.len()
            )));
        }
        for (index, (from, to)) in self.iter().enumerate() {
            if from >= node_count || to >= node_count {
                return Err(Error::EdgeOutOfRange {
                    index,
                    from,
                    to,
                    node_count,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(usize, usize)> for EdgeSet {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        let mut edges = EdgeSet::new();
        for (from, to) in iter {
            edges.push(from, to);
        }
        edges
    }
}

fn rgba_at(buffer: &[f32], index: usize) -> Option<[f32; 4]> {
    let c = buffer.get(index * COLOR_ARITY..(index + 1) * COLOR_ARITY)?;
    Some([c[0], c[1], c[2], c[3]])
}
