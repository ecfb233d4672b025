//! Closed-loop align-and-shoot simulation.
//!
//! Places the robot on a simulated field, holds the align-and-shoot command
//! for a fixed number of control cycles, and prints a summary.
//!
//! Usage:
//!   cargo run -p align_shoot_sitl --bin align_sim -- [OPTIONS]
//!
//! Set `RUST_LOG=debug` to see target acquisition and loss.

use std::env;
use std::process;

use align_shoot_core::command::AxisInputs;
use align_shoot_sitl::{
    list_parameters, load_controller_config, parse_override, BridgeConfig, Pose, SitlBridge,
    StickSegment, TimeMode, WorldConfig,
};

struct Args {
    cycles: u64,
    seed: Option<u64>,
    start: Pose,
    time_mode: TimeMode,
    sticks: AxisInputs,
    overrides: Vec<(String, String)>,
}

fn parse_args() -> Args {
    let mut args = Args {
        cycles: 250,
        seed: None,
        start: WorldConfig::default().start,
        time_mode: TimeMode::Lockstep,
        sticks: AxisInputs::zero(),
        overrides: Vec::new(),
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "-n" | "--cycles" => {
                i += 1;
                args.cycles = parse_arg(&raw, i, "cycles");
            }
            "--seed" => {
                i += 1;
                args.seed = Some(parse_arg(&raw, i, "seed"));
            }
            "--x" => {
                i += 1;
                args.start.x = parse_arg(&raw, i, "x");
            }
            "--y" => {
                i += 1;
                args.start.y = parse_arg(&raw, i, "y");
            }
            "--heading" => {
                i += 1;
                let deg: f32 = parse_arg(&raw, i, "heading");
                args.start.heading_rad = deg.to_radians();
            }
            "--forward" => {
                i += 1;
                args.sticks.forward = parse_arg(&raw, i, "forward");
            }
            "--strafe" => {
                i += 1;
                args.sticks.strafe = parse_arg(&raw, i, "strafe");
            }
            "--rotation" => {
                i += 1;
                args.sticks.rotation = parse_arg(&raw, i, "rotation");
            }
            "--realtime" => {
                args.time_mode = TimeMode::Scaled { factor: 1.0 };
            }
            "--scaled" => {
                i += 1;
                args.time_mode = TimeMode::Scaled {
                    factor: parse_arg(&raw, i, "scaled"),
                };
            }
            "-p" | "--param" => {
                i += 1;
                let value: String = parse_arg(&raw, i, "param");
                match parse_override(&value) {
                    Ok(pair) => args.overrides.push(pair),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--list-params" => {
                print_parameters();
                process::exit(0);
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if args.cycles == 0 {
        eprintln!("Error: cycles must be at least 1");
        process::exit(1);
    }

    args
}

fn parse_arg<T: std::str::FromStr>(raw: &[String], i: usize, name: &str) -> T {
    raw.get(i)
        .unwrap_or_else(|| {
            eprintln!("Error: --{name} requires a value");
            process::exit(1);
        })
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Error: invalid value for --{name}");
            process::exit(1);
        })
}

fn print_usage() {
    eprintln!(
        "Usage: align_sim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -n, --cycles <N>          Control cycles to run (default: 250)\n\
         \x20 --seed <N>                RNG seed for repeatable noise\n\
         \x20 --x <M>                   Start X in meters (default: -3.0)\n\
         \x20 --y <M>                   Start Y in meters (default: 0.5)\n\
         \x20 --heading <DEG>           Start heading in degrees (default: 0)\n\
         \x20 --forward <V>             Forward stick, -1 to 1 (default: 0)\n\
         \x20 --strafe <V>              Strafe stick, -1 to 1 (default: 0)\n\
         \x20 --rotation <V>            Rotation stick, -1 to 1 (default: 0)\n\
         \x20 --realtime                Pace cycles at wall-clock speed\n\
         \x20 --scaled <FACTOR>         Pace cycles at FACTOR x real time\n\
         \x20 -p, --param <NAME=VALUE>  Override a tuning parameter (repeatable)\n\
         \x20 --list-params             List tuning parameters and exit\n\
         \x20 -h, --help                Show this help"
    );
}

fn print_parameters() {
    match list_parameters() {
        Ok(params) => {
            println!("{} parameters:", params.len());
            for param in params {
                println!("  {param}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let args = parse_args();

    let controller = match load_controller_config(&args.overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!("=== Align-and-Shoot Simulation ===");
    println!(
        "Cycles: {}, period: {} s, mode: {:?}",
        args.cycles, controller.period_s, args.time_mode
    );
    println!(
        "Start: x={} m y={} m heading={} deg",
        args.start.x,
        args.start.y,
        args.start.heading_rad.to_degrees()
    );
    println!();

    let config = BridgeConfig {
        controller,
        world: WorldConfig {
            start: args.start,
            seed: args.seed,
            ..Default::default()
        },
        sticks: vec![StickSegment::new(0.0, args.sticks)],
        time_mode: args.time_mode,
        ..Default::default()
    };

    let mut bridge = match SitlBridge::new(config) {
        Ok(bridge) => bridge,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match bridge.run(args.cycles).await {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
