//! Force-directed graph layout.
//!
//! Nodes start on a circle grouped by color class, then go through a fixed
//! number of rounds of pairwise inverse-square repulsion followed by linear
//! spring attraction along edges. There is no convergence test; the run is
//! fully deterministic for a given input.
pub mod model;
pub mod solver;

pub use model::{ColorClass, LayoutModel, LayoutNodes};
pub use solver::{force_directed_layout, initial_slots, LayoutSolver};

use crate::error::{Error, Result};

/// Default number of position-update rounds, including initialization.
pub const DEFAULT_STEPS: usize = 20;

/// Strength constants for the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceParams {
    /// Radius of the initial circle.
    pub position_factor: f32,
    /// Charge constant in `repel_factor / d^2`.
    pub repel_factor: f32,
    /// Spring constant applied to the edge displacement.
    pub attract_factor: f32,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            position_factor: 0.3,
            repel_factor: 0.01,
            attract_factor: 0.1,
        }
    }
}

/// Configuration for a layout run.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Width of the target viewport, carried through to the model.
    pub width: f32,
    /// Height of the target viewport, carried through to the model.
    pub height: f32,
    /// Total rounds: one for initialization plus `steps - 1` physics rounds.
    pub steps: usize,
    pub forces: ForceParams,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            steps: DEFAULT_STEPS,
            forces: ForceParams::default(),
        }
    }
}

impl LayoutConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_forces(mut self, forces: ForceParams) -> Self {
        self.forces = forces;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "width and height must be finite and > 0".into(),
            ));
        }
        let f = &self.forces;
        if !(f.position_factor.is_finite()
            && f.repel_factor.is_finite()
            && f.attract_factor.is_finite())
        {
            return Err(Error::InvalidConfig("force parameters must be finite".into()));
        }
        Ok(())
    }
}
