//! Graph edge geometry: edge sampling and quad triangulation.
pub mod triangulate;
pub mod vector;

pub use triangulate::{
    graph_triangles, sample_edges, triangulate_edges, GraphConfig, GraphGeometry,
    VERTICES_PER_EDGE,
};
