#![forbid(unsafe_code)]
//! vertex_forge: procedural vertex buffers for point clouds and graphs.
//!
//! Modules:
//! - color: hit-color codec for GPU picking, display palettes
//! - buffers: flat point/triangle buffers and the draw contract for a rendering backend
//! - generators: random positions, palette and hit colors, size distributions, clusters
//! - geometry: edge sampling and edge-to-quad triangulation
//! - layout: force-directed node placement
//! - assemble: complete point sets built from the generators
pub mod assemble;
pub mod buffers;
pub mod color;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod layout;

/// Convenient re-exports for common types. Import with `use vertex_forge::prelude::*;`.
pub mod prelude {
    pub use crate::assemble::{ClusteredConfig, GraphPointsConfig, PointSetAssembler, PointsConfig};
    pub use crate::buffers::{
        AttributeBuffer, DrawBatch, EdgeSet, PointSet, Primitive, TriangleMesh, COLOR_ARITY,
        POSITION_ARITY, SIZE_ARITY,
    };
    pub use crate::color::{
        decode, decode_pixel, encode, ObjectId, Palette, Rgb, DEFAULT_PALETTE, ID_SPACE,
    };
    pub use crate::error::{Error, Result};
    pub use crate::generators::{
        clustered_positions, clustered_positions_with, constant_sizes, default_clusters,
        hit_colors, palette_colors, random_positions, random_sizes, Cluster, ClusteredField,
    };
    pub use crate::geometry::{
        graph_triangles, sample_edges, triangulate_edges, GraphConfig, GraphGeometry,
    };
    pub use crate::layout::{
        force_directed_layout, ColorClass, ForceParams, LayoutConfig, LayoutModel, LayoutSolver,
    };
}
