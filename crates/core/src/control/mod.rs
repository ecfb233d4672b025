//! Feedback controllers
//!
//! - [`PidController`]: fixed-period PID used for the heading lock

mod pid;

pub use pid::{PidController, PidGains};
