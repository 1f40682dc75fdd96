//! Error types for trajectory generation.

/// Errors that can occur while configuring or instantiating a trajectory.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrajectoryError {
    /// The policy produced no poses.
    #[error("trajectory has no poses")]
    Empty,

    /// A configuration value was rejected.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl TrajectoryError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        TrajectoryError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
