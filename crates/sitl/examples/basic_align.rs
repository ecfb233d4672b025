//! Basic SITL example stepping the align-and-shoot command by hand.
//!
//! Builds a bridge with a seeded world, schedules the command, and prints
//! the heading error and shooter state as the robot turns onto the target.
//!
//! Run with: `cargo run -p align_shoot_sitl --example basic_align`

use align_shoot_sitl::{BridgeConfig, Pose, SitlBridge, WorldConfig};

fn main() {
    env_logger::init();
    println!("=== Align-and-Shoot Basic Example ===\n");

    // 1. Robot 3 m from the target, 20 degrees off
    let config = BridgeConfig {
        world: WorldConfig {
            start: Pose {
                x: -3.0,
                y: 0.0,
                heading_rad: 20f32.to_radians(),
            },
            seed: Some(42),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut bridge = SitlBridge::new(config).expect("Failed to create bridge");

    // 2. Start the command
    bridge.start().expect("Failed to start command");

    // 3. Step at 50 Hz, printing every 5 cycles
    println!("Running 50 cycles (1 second at 50 Hz)...\n");
    for i in 0..50 {
        bridge.step();

        if (i + 1) % 5 == 0 {
            let world = bridge.world();
            println!(
                "Cycle {:>2} | t={:.2} s | bearing error {:>7.3} deg | on target {:?} | flywheel {:>6.0} RPM",
                i + 1,
                world.time_s(),
                world.true_bearing_error_deg(),
                world.on_target(),
                world.flywheel_rpm()
            );
        }
    }

    // 4. Release the command
    bridge.stop();
    println!("\n{}", bridge.report());
}
