use anyhow::Result;
use costar_planning_interface::{
    EndEffectorPose, LinearTrajectory, TrajectoryPtr, WaypointTrajectory,
};
use nalgebra::{Isometry3, Vector3};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("costar_planning_interface=info".parse()?)
                .add_directive("trajectory_demo=info".parse()?),
        )
        .init();

    let start: EndEffectorPose = Isometry3::translation(0.4, 0.0, 0.3);
    let goal: EndEffectorPose =
        Isometry3::new(Vector3::new(0.4, 0.3, 0.5), Vector3::z() * std::f64::consts::FRAC_PI_4);

    let mut linear = LinearTrajectory::new(start, goal);

    let mut params = HashMap::new();
    params.insert("num_steps".to_string(), 5.0);
    linear.configure(&params)?;

    let waypoints = WaypointTrajectory::new(vec![
        start,
        Isometry3::translation(0.4, 0.15, 0.45),
        goal,
    ]);

    let policies: Vec<TrajectoryPtr> = vec![Arc::new(linear), Arc::new(waypoints)];

    for policy in &policies {
        let trajectory = policy.instantiate()?;
        info!(
            policy = policy.name(),
            poses = trajectory.len(),
            path_length = trajectory.path_length(),
            "instantiated trajectory"
        );
    }

    let trajectory = policies[0].instantiate()?;
    println!("{}", serde_json::to_string_pretty(trajectory.as_ref())?);

    Ok(())
}
