//! Straight-line trajectory between two end-effector poses

use super::{InstantiatedTrajectory, InstantiatedTrajectoryPtr, Trajectory};
use crate::common::types::{EndEffectorPose, Translation};
use crate::error::TrajectoryError;
use nalgebra::{Isometry3, Translation3};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_NUM_STEPS: usize = 10;

/// Upper bound on interpolation steps accepted by configuration and instantiation
pub const MAX_NUM_STEPS: usize = 100_000;

/// Interpolates translation linearly and rotation by slerp from `start` to `goal`
#[derive(Debug, Clone)]
pub struct LinearTrajectory {
    start: EndEffectorPose,
    goal: EndEffectorPose,
    num_steps: usize,
}

impl LinearTrajectory {
    /// Create a new linear trajectory with the default resolution
    pub fn new(start: EndEffectorPose, goal: EndEffectorPose) -> Self {
        LinearTrajectory {
            start,
            goal,
            num_steps: DEFAULT_NUM_STEPS,
        }
    }

    /// Set the number of interpolation steps
    pub fn with_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Get the start pose
    pub fn start(&self) -> &EndEffectorPose {
        &self.start
    }

    /// Get the goal pose
    pub fn goal(&self) -> &EndEffectorPose {
        &self.goal
    }

    /// Get the number of interpolation steps
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Configure the trajectory with parameters
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), TrajectoryError> {
        if let Some(&steps) = params.get("num_steps") {
            if !steps.is_finite() || steps.fract() != 0.0 {
                return Err(TrajectoryError::invalid(
                    "num_steps",
                    format!("expected a whole number, got {}", steps),
                ));
            }
            if steps < 1.0 {
                return Err(TrajectoryError::invalid("num_steps", "must be at least 1"));
            }
            if steps > MAX_NUM_STEPS as f64 {
                return Err(TrajectoryError::invalid(
                    "num_steps",
                    format!("must be at most {}", MAX_NUM_STEPS),
                ));
            }
            self.num_steps = steps as usize;
        }

        Ok(())
    }

    fn interpolate(&self, t: f64) -> EndEffectorPose {
        let from: Translation = self.start.translation.vector;
        let to: Translation = self.goal.translation.vector;
        let translation = Translation3::from(from + (to - from) * t);

        // Shortest arc: q and -q are the same rotation, so the rotation holds still
        let rotation = self.start.rotation.slerp(&self.goal.rotation, t);

        Isometry3::from_parts(translation, rotation)
    }
}

impl Trajectory for LinearTrajectory {
    fn instantiate(&self) -> Result<InstantiatedTrajectoryPtr, TrajectoryError> {
        if self.num_steps == 0 {
            return Err(TrajectoryError::invalid("num_steps", "must be at least 1"));
        }
        if self.num_steps > MAX_NUM_STEPS {
            return Err(TrajectoryError::invalid(
                "num_steps",
                format!("must be at most {}", MAX_NUM_STEPS),
            ));
        }

        debug!(num_steps = self.num_steps, "instantiating linear trajectory");

        let mut trajectory = InstantiatedTrajectory::new();
        trajectory.push(self.start);
        for i in 1..self.num_steps {
            let t = i as f64 / self.num_steps as f64;
            trajectory.push(self.interpolate(t));
        }
        trajectory.push(self.goal);

        Ok(Arc::new(trajectory))
    }

    fn name(&self) -> &str {
        "linear"
    }
}
