//! Scripted driver sticks.

use align_shoot_core::command::AxisInputs;
use align_shoot_core::traits::AxisSource;

use crate::world::SharedWorld;

/// Stick values held from `start_s` until the next segment starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickSegment {
    /// Simulated time the segment begins (seconds).
    pub start_s: f32,
    /// Raw axis values during the segment.
    pub axes: AxisInputs,
}

impl StickSegment {
    /// Create a segment.
    pub fn new(start_s: f32, axes: AxisInputs) -> Self {
        Self { start_s, axes }
    }
}

/// Piecewise-constant stick script keyed on simulated time.
///
/// Before the first segment starts the sticks are centred.
pub struct ScriptedSticks {
    world: SharedWorld,
    segments: Vec<StickSegment>,
}

impl ScriptedSticks {
    /// Create a script; segments may be given in any order.
    pub fn new(world: SharedWorld, mut segments: Vec<StickSegment>) -> Self {
        segments.sort_by(|a, b| a.start_s.total_cmp(&b.start_s));
        Self { world, segments }
    }

    /// Hold the same stick values for the whole run.
    pub fn constant(world: SharedWorld, axes: AxisInputs) -> Self {
        Self::new(world, vec![StickSegment::new(0.0, axes)])
    }

    /// Stick values at simulated time `t_s`.
    pub fn at(&self, t_s: f32) -> AxisInputs {
        self.segments
            .iter()
            .take_while(|segment| segment.start_s <= t_s)
            .last()
            .map(|segment| segment.axes)
            .unwrap_or_default()
    }
}

impl AxisSource for ScriptedSticks {
    fn sample(&mut self) -> AxisInputs {
        let t_s = self.world.borrow().time_s();
        self.at(t_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{World, WorldConfig};

    #[test]
    fn test_script_lookup() {
        let world = World::shared(WorldConfig::default());
        let sticks = ScriptedSticks::new(
            world,
            vec![
                StickSegment::new(2.0, AxisInputs::new(0.0, 1.0, 0.0)),
                StickSegment::new(0.5, AxisInputs::new(1.0, 0.0, 0.0)),
            ],
        );

        assert_eq!(sticks.at(0.0), AxisInputs::zero());
        assert_eq!(sticks.at(0.5), AxisInputs::new(1.0, 0.0, 0.0));
        assert_eq!(sticks.at(1.9), AxisInputs::new(1.0, 0.0, 0.0));
        assert_eq!(sticks.at(5.0), AxisInputs::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_sample_follows_world_time() {
        let world = World::shared(WorldConfig::default());
        let mut sticks = ScriptedSticks::new(
            world.clone(),
            vec![StickSegment::new(0.1, AxisInputs::new(0.5, 0.0, 0.0))],
        );
        assert_eq!(sticks.sample(), AxisInputs::zero());
        for _ in 0..5 {
            world.borrow_mut().advance(20_000);
        }
        assert_eq!(sticks.sample().forward, 0.5);
    }
}
