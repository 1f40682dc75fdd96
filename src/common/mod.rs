//! Common utilities and types for end-effector planning

/// Common types used across the codebase
pub mod types {
    /// A 3D translation
    pub type Translation = nalgebra::Vector3<f64>;

    /// End-effector pose: translation plus unit-quaternion rotation
    pub type EndEffectorPose = nalgebra::Isometry3<f64>;
}
