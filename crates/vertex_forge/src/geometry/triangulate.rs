//! Turns graph edges into constant-width quads made of two triangles.
//!
//! Edge sampling only ever connects a node to nodes with a higher index, so the
//! last node never starts an edge. Each node makes `max_connections_per_node`
//! attempts; an attempt that draws an already chosen target is dropped rather
//! than retried, which means the realized degree is usually a little lower.
use std::collections::HashSet;

use glam::Vec2;
use rand::Rng;
use tracing::{debug, warn};

use crate::buffers::{EdgeSet, PointSet, TriangleMesh, COLOR_ARITY, POSITION_ARITY};
use crate::error::{Error, Result};
use crate::generators::rand_inclusive;
use crate::geometry::vector::{normalize, perpendicular, scale};

/// Two triangles per edge.
pub const VERTICES_PER_EDGE: usize = 6;

/// Parameters for building graph edges over a point set.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    /// Edge sampling attempts per node.
    pub max_connections_per_node: usize,
    /// Quad width in world units.
    pub edge_size: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_connections_per_node: 2,
            edge_size: 1.0,
        }
    }
}

impl GraphConfig {
    pub fn new(max_connections_per_node: usize, edge_size: f32) -> Self {
        Self {
            max_connections_per_node,
            edge_size,
        }
    }

    pub fn with_max_connections_per_node(mut self, max: usize) -> Self {
        self.max_connections_per_node = max;
        self
    }

    pub fn with_edge_size(mut self, edge_size: f32) -> Self {
        self.edge_size = edge_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_edge_size(self.edge_size)
    }
}

/// Sampled edges together with their triangulated quads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphGeometry {
    /// Edges in sampling order.
    pub edges: EdgeSet,
    /// Six vertices per edge, in the same order as `edges`.
    pub mesh: TriangleMesh,
}

/// Samples random forward edges for `node_count` nodes.
///
/// Node `n` draws targets uniformly from `[n + 1, node_count - 1]`. Duplicate
/// draws for the same source are discarded.
pub fn sample_edges(
    node_count: usize,
    max_connections_per_node: usize,
    rng: &mut dyn Rng,
) -> EdgeSet {
    let mut edges = EdgeSet::with_capacity(node_count * max_connections_per_node);
    if node_count < 2 {
        return edges;
    }

    let mut chosen = HashSet::with_capacity(max_connections_per_node);
    for n in 0..node_count - 1 {
        chosen.clear();
        for _ in 0..max_connections_per_node {
            let target = rand_inclusive(rng, n + 1, node_count - 1);
            if chosen.insert(target) {
                edges.push(n, target);
            }
        }
    }

    debug!(
        nodes = node_count,
        attempts = (node_count - 1) * max_connections_per_node,
        accepted = edges.len(),
        "sampled graph edges"
    );
    edges
}

/// Builds one quad of width `edge_size` centered on each edge.
///
/// For an edge `a -> b` with offset `o` (the unit normal scaled by half the
/// width) the vertices are `a+o, b+o, a-o` and `b-o, a-o, b+o`. Vertices at `a`
/// take `a`'s color, vertices at `b` take `b`'s.
pub fn triangulate_edges(
    points: &PointSet,
    edges: &EdgeSet,
    edge_size: f32,
) -> Result<TriangleMesh> {
    validate_edge_size(edge_size)?;
    edges.validate(points.len())?;
    if points.colors.len() < points.len() * COLOR_ARITY {
        return Err(Error::InvalidConfig(format!(
            "color buffer has {} floats, expected {}",
            points.colors.len(),
            points.len() * COLOR_ARITY
        )));
    }

    let half_width = edge_size / 2.0;
    let mut mesh = TriangleMesh::with_capacity(edges.len() * VERTICES_PER_EDGE);

    for (from, to) in edges.iter() {
        let a = node_position(points, from);
        let b = node_position(points, to);
        let dir = normalize(b - a).ok_or(Error::DegenerateEdge { from, to })?;
        let offset = scale(perpendicular(dir), half_width);

        let color_a = &points.colors[from * COLOR_ARITY..(from + 1) * COLOR_ARITY];
        let color_b = &points.colors[to * COLOR_ARITY..(to + 1) * COLOR_ARITY];

        mesh.push_vertex(a + offset, color_a);
        mesh.push_vertex(b + offset, color_b);
        mesh.push_vertex(a - offset, color_a);

        mesh.push_vertex(b - offset, color_b);
        mesh.push_vertex(a - offset, color_a);
        mesh.push_vertex(b + offset, color_b);
    }

    Ok(mesh)
}

/// Samples edges over `points` and triangulates them.
pub fn graph_triangles(
    points: &PointSet,
    config: &GraphConfig,
    rng: &mut dyn Rng,
) -> Result<GraphGeometry> {
    config.validate()?;
    if points.len() < 2 {
        warn!(
            "Graph over {} point(s) has no edges; returning an empty mesh.",
            points.len()
        );
    }

    let edges = sample_edges(points.len(), config.max_connections_per_node, rng);
    let mesh = triangulate_edges(points, &edges, config.edge_size)?;
    Ok(GraphGeometry { edges, mesh })
}

fn node_position(points: &PointSet, index: usize) -> Vec2 {
    Vec2::new(
        points.positions[index * POSITION_ARITY],
        points.positions[index * POSITION_ARITY + 1],
    )
}

fn validate_edge_size(edge_size: f32) -> Result<()> {
    if !(edge_size.is_finite() && edge_size > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "edge_size must be finite and > 0, got {edge_size}"
        )));
    }
    Ok(())
}
