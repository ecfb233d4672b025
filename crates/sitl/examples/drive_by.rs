//! Driver strafes past the target while the command holds heading on it.
//!
//! The robot starts with the target out of view, drives until the camera
//! picks it up, and keeps translating while vision owns rotation.
//!
//! Run with: `cargo run -p align_shoot_sitl --example drive_by`

use align_shoot_core::command::AxisInputs;
use align_shoot_sitl::{BridgeConfig, Pose, SitlBridge, StickSegment, TimeMode, WorldConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    println!("=== Align-and-Shoot Drive-By Example ===\n");

    let config = BridgeConfig {
        world: WorldConfig {
            start: Pose {
                x: -3.5,
                y: 2.5,
                heading_rad: 0.0,
            },
            seed: Some(7),
            ..Default::default()
        },
        sticks: vec![
            // Strafe right (negative = right) toward the target line
            StickSegment::new(0.0, AxisInputs::new(0.0, -0.5, 0.0)),
            // Keep moving and add some forward
            StickSegment::new(1.0, AxisInputs::new(0.3, -0.5, 0.0)),
            // Let go
            StickSegment::new(2.5, AxisInputs::zero()),
        ],
        time_mode: TimeMode::Scaled { factor: 4.0 },
        ..Default::default()
    };

    let mut bridge = SitlBridge::new(config).expect("Failed to create bridge");
    let report = bridge.run(200).await.expect("Simulation failed");

    println!("{report}");
}
