//! Trajectory-generation policy interface for end-effector motion planning.
//!
//! A [`Trajectory`] is an abstract, parameterized motion policy. Instantiating
//! it produces an [`InstantiatedTrajectory`], a concrete ordered sequence of
//! end-effector poses. Both are passed around behind shared handles
//! ([`TrajectoryPtr`], [`InstantiatedTrajectoryPtr`]).

pub mod common;
pub mod error;
pub mod trajectory;

pub use crate::common::types::EndEffectorPose;
pub use crate::error::TrajectoryError;
pub use crate::trajectory::{
    InstantiatedTrajectory, InstantiatedTrajectoryPtr, LinearTrajectory, Trajectory,
    TrajectoryPtr, WaypointTrajectory,
};
