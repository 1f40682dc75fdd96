//! Trajectory generation module
//!
//! A [`Trajectory`] is a parameterized motion policy for the end effector.
//! Calling [`Trajectory::instantiate`] turns it into an
//! [`InstantiatedTrajectory`], the ordered poses the arm should pass through.

pub mod linear;
pub mod waypoint;

use crate::common::types::EndEffectorPose;
use crate::error::TrajectoryError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

pub use linear::LinearTrajectory;
pub use waypoint::WaypointTrajectory;

/// Shared handle to an instantiated trajectory
pub type InstantiatedTrajectoryPtr = Arc<InstantiatedTrajectory>;

/// Shared handle to a trajectory-generation policy
pub type TrajectoryPtr = Arc<dyn Trajectory>;

/// A physical sequence of end-effector poses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstantiatedTrajectory {
    poses: Vec<EndEffectorPose>,
}

impl InstantiatedTrajectory {
    /// Create an empty trajectory
    pub fn new() -> Self {
        InstantiatedTrajectory { poses: Vec::new() }
    }

    /// Create a trajectory from an ordered list of poses
    pub fn from_poses(poses: Vec<EndEffectorPose>) -> Self {
        InstantiatedTrajectory { poses }
    }

    /// Append a pose to the end of the trajectory
    pub fn push(&mut self, pose: EndEffectorPose) {
        self.poses.push(pose);
    }

    /// Get the poses in order
    pub fn poses(&self) -> &[EndEffectorPose] {
        &self.poses
    }

    /// Number of poses
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Whether the trajectory has no poses
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Get the first pose
    pub fn first(&self) -> Option<&EndEffectorPose> {
        self.poses.first()
    }

    /// Get the last pose
    pub fn last(&self) -> Option<&EndEffectorPose> {
        self.poses.last()
    }

    /// Iterate over the poses in order
    pub fn iter(&self) -> std::slice::Iter<'_, EndEffectorPose> {
        self.poses.iter()
    }

    /// Total translational distance travelled along the trajectory
    pub fn path_length(&self) -> f64 {
        self.poses
            .windows(2)
            .map(|w| (w[1].translation.vector - w[0].translation.vector).norm())
            .sum()
    }
}

impl<'a> IntoIterator for &'a InstantiatedTrajectory {
    type Item = &'a EndEffectorPose;
    type IntoIter = std::slice::Iter<'a, EndEffectorPose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

/// Trait for trajectory-generation policies
pub trait Trajectory: Debug + Send + Sync {
    /// Convert a parameterized trajectory into a "real" trajectory.
    ///
    /// Never returns an empty trajectory; [`TrajectoryError::Empty`] is
    /// reported instead.
    fn instantiate(&self) -> Result<InstantiatedTrajectoryPtr, TrajectoryError>;

    /// Get the name of this policy
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Isometry3, Vector3};

    fn at(x: f64, y: f64, z: f64) -> EndEffectorPose {
        Isometry3::translation(x, y, z)
    }

    #[test]
    fn test_empty_trajectory() {
        let traj = InstantiatedTrajectory::new();
        assert!(traj.is_empty());
        assert_eq!(traj.len(), 0);
        assert!(traj.first().is_none());
        assert_eq!(traj.path_length(), 0.0);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut traj = InstantiatedTrajectory::new();
        traj.push(at(0.0, 0.0, 0.0));
        traj.push(at(1.0, 0.0, 0.0));
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.first(), Some(&at(0.0, 0.0, 0.0)));
        assert_eq!(traj.last(), Some(&at(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_path_length_sums_segments() {
        let traj = InstantiatedTrajectory::from_poses(vec![
            at(0.0, 0.0, 0.0),
            at(3.0, 4.0, 0.0),
            at(3.0, 4.0, 2.0),
        ]);
        assert!((traj.path_length() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_path_length_ignores_rotation() {
        let spun = Isometry3::new(Vector3::zeros(), Vector3::z() * 1.5);
        let traj = InstantiatedTrajectory::from_poses(vec![at(0.0, 0.0, 0.0), spun]);
        assert_eq!(traj.path_length(), 0.0);
    }

    #[test]
    fn test_serializes_to_json() {
        let traj = InstantiatedTrajectory::from_poses(vec![at(1.0, 2.0, 3.0)]);
        let json = serde_json::to_string(&traj).unwrap();
        let back: InstantiatedTrajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.poses()[0].translation.vector, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_policy_handles_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrajectoryPtr>();
        assert_send_sync::<InstantiatedTrajectoryPtr>();

        let policy: TrajectoryPtr = Arc::new(WaypointTrajectory::new(vec![at(1.0, 0.0, 0.0)]));
        let shared = Arc::clone(&policy);
        let handle = std::thread::spawn(move || shared.instantiate().map(|t| t.len()));
        assert_eq!(handle.join().unwrap(), Ok(1));
        assert_eq!(policy.instantiate().unwrap().len(), 1);
    }

    #[test]
    fn test_iteration_follows_pose_order() {
        let traj = InstantiatedTrajectory::from_poses(vec![at(0.0, 0.0, 0.0), at(1.0, 0.0, 0.0)]);
        let xs: Vec<f64> = traj.iter().map(|p| p.translation.vector.x).collect();
        assert_eq!(xs, vec![0.0, 1.0]);

        let mut count = 0;
        for pose in &traj {
            assert_eq!(pose, &traj.poses()[count]);
            count += 1;
        }
        assert_eq!(count, 2);
    }
}
