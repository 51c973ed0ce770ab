//! Iterative force simulation over node/edge arrays.
use std::collections::HashMap;

use tracing::debug;

use crate::buffers::EdgeSet;
use crate::error::Result;
use crate::layout::model::{ColorClass, LayoutModel, LayoutNodes};
use crate::layout::{ForceParams, LayoutConfig};

/// Runs force-directed layouts with a fixed configuration.
#[derive(Debug, Clone)]
pub struct LayoutSolver {
    pub config: LayoutConfig,
}

impl LayoutSolver {
    pub fn try_new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Lays out `node_colors.len()` nodes connected by `edges`.
    pub fn solve(&self, node_colors: &[ColorClass], edges: &EdgeSet) -> Result<LayoutModel> {
        edges.validate(node_colors.len())?;

        let n = node_colors.len();
        let mut nodes = LayoutNodes {
            xs: vec![0.0; n],
            ys: vec![0.0; n],
            colors: node_colors.to_vec(),
        };
        let forces = &self.config.forces;

        init_positions(&mut nodes, forces.position_factor);

        let mut dx = vec![0.0; n];
        let mut dy = vec![0.0; n];
        for _ in 1..self.config.steps {
            repel(&mut nodes, forces, &mut dx, &mut dy);
            attract(&mut nodes, edges, forces);
        }

        debug!(
            nodes = n,
            edges = edges.len(),
            steps = self.config.steps,
            "force-directed layout finished"
        );

        Ok(LayoutModel {
            nodes,
            edges: edges.clone(),
            width: self.config.width,
            height: self.config.height,
            steps: self.config.steps,
        })
    }
}

/// Validates `config` and runs a single layout.
pub fn force_directed_layout(
    node_colors: &[ColorClass],
    edges: &EdgeSet,
    config: &LayoutConfig,
) -> Result<LayoutModel> {
    LayoutSolver::try_new(*config)?.solve(node_colors, edges)
}

/// Position of each node on the initial circle.
///
/// Classes are ordered by first appearance. A node's slot is the number of
/// nodes in earlier classes plus its rank inside its own class, so every class
/// occupies one contiguous arc.
pub fn initial_slots(colors: &[ColorClass]) -> Vec<usize> {
    let mut order: Vec<ColorClass> = Vec::new();
    let mut counts: HashMap<ColorClass, usize> = HashMap::new();
    for &c in colors {
        *counts.entry(c).or_insert_with(|| {
            order.push(c);
            0
        }) += 1;
    }

    let mut next: HashMap<ColorClass, usize> = HashMap::with_capacity(order.len());
    let mut total = 0;
    for c in order {
        next.insert(c, total);
        total += counts[&c];
    }

    colors
        .iter()
        .map(|c| {
            // every class was inserted above
            let slot = next.entry(*c).or_insert(0);
            let s = *slot;
            *slot += 1;
            s
        })
        .collect()
}

fn init_positions(nodes: &mut LayoutNodes, position_factor: f32) {
    let n = nodes.len();
    for (i, slot) in initial_slots(&nodes.colors).into_iter().enumerate() {
        let angle = -core::f32::consts::TAU * slot as f32 / n as f32;
        nodes.xs[i] = position_factor * angle.cos();
        nodes.ys[i] = position_factor * angle.sin();
    }
}

/// Inverse-square repulsion between every pair, applied after the full pass.
fn repel(nodes: &mut LayoutNodes, forces: &ForceParams, dx: &mut [f32], dy: &mut [f32]) {
    let n = nodes.len();
    for a in 0..n {
        let (ax, ay) = (nodes.xs[a], nodes.ys[a]);
        let mut sx = 0.0;
        let mut sy = 0.0;
        for b in 0..n {
            let x_diff = nodes.xs[b] - ax;
            let y_diff = nodes.ys[b] - ay;
            let dist_sq = x_diff * x_diff + y_diff * y_diff;
            let dist = dist_sq.sqrt();
            if dist > 0.0 {
                // unit vector away from b, scaled by repel / d^2
                let push = forces.repel_factor / dist_sq;
                if push.is_finite() {
                    sx -= push * (x_diff / dist);
                    sy -= push * (y_diff / dist);
                }
            }
        }
        dx[a] = sx;
        dy[a] = sy;
    }

    for i in 0..n {
        nodes.xs[i] += dx[i];
        nodes.ys[i] += dy[i];
    }
}

/// Linear springs along edges, applied edge by edge.
fn attract(nodes: &mut LayoutNodes, edges: &EdgeSet, forces: &ForceParams) {
    for (a, b) in edges.iter() {
        let x_diff = nodes.xs[b] - nodes.xs[a];
        let y_diff = nodes.ys[b] - nodes.ys[a];
        let dist = (x_diff * x_diff + y_diff * y_diff).sqrt();
        if dist > 0.0 {
            let x_change = forces.attract_factor * x_diff;
            let y_change = forces.attract_factor * y_diff;

            nodes.xs[a] += x_change;
            nodes.ys[a] += y_change;

            nodes.xs[b] -= x_change;
            nodes.ys[b] -= y_change;
        }
    }
}
