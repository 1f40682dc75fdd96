//! Fixed waypoint trajectory

use super::{InstantiatedTrajectory, InstantiatedTrajectoryPtr, Trajectory};
use crate::common::types::EndEffectorPose;
use crate::error::TrajectoryError;
use std::sync::Arc;
use tracing::debug;

/// A policy that replays a fixed list of end-effector poses
#[derive(Debug, Clone, Default)]
pub struct WaypointTrajectory {
    waypoints: Vec<EndEffectorPose>,
}

impl WaypointTrajectory {
    /// Create a new waypoint trajectory
    pub fn new(waypoints: Vec<EndEffectorPose>) -> Self {
        WaypointTrajectory { waypoints }
    }

    /// Append a waypoint
    pub fn add_waypoint(&mut self, pose: EndEffectorPose) {
        self.waypoints.push(pose);
    }

    /// Get the waypoints
    pub fn waypoints(&self) -> &[EndEffectorPose] {
        &self.waypoints
    }
}

impl Trajectory for WaypointTrajectory {
    fn instantiate(&self) -> Result<InstantiatedTrajectoryPtr, TrajectoryError> {
        if self.waypoints.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        debug!(poses = self.waypoints.len(), "instantiating waypoint trajectory");
        Ok(Arc::new(InstantiatedTrajectory::from_poses(
            self.waypoints.clone(),
        )))
    }

    fn name(&self) -> &str {
        "waypoint"
    }
}
