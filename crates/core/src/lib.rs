//! align_shoot_core - Pure no_std logic for the align-and-shoot controller
//!
//! This crate contains the platform-agnostic control law, filters, lookup
//! tables, and collaborator traits. Everything can be tested on host
//! without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Sticks, camera, drivetrain, shooter, and
//!   telemetry are injected via traits
//!
//! # Modules
//!
//! - [`command`]: Command lifecycle, the align-and-shoot controller, and the runner
//! - [`control`]: Fixed-period PID controller
//! - [`filter`]: Stick deadband and slew-rate limiter
//! - [`interpolation`]: Piecewise-linear lookup tables
//! - [`parameters`]: Parameter store and controller tuning parameters
//! - [`shot`]: Range to arm angle / shooter RPM lookup
//! - [`traits`]: Collaborator traits and their mocks
//! - [`vision`]: Vision samples, pipelines, and camera geometry

#![no_std]

pub mod command;
pub mod control;
pub mod filter;
pub mod interpolation;
pub mod parameters;
pub mod shot;
pub mod traits;
pub mod vision;
