/// Time synchronization mode for the SITL simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimeMode {
    /// Simulation advances one control period per cycle, as fast as possible.
    #[default]
    Lockstep,
    /// Simulation runs at a scaled rate relative to wall-clock time.
    Scaled { factor: f32 },
}
