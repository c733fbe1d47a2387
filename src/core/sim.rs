//! Fixed-timestep accumulator and the win condition.

use std::time::Instant;

use crate::consts::{END_X, END_Y, TICK_RATE, WIN_RADIUS};
use crate::core::player::Pose;

/// Converts irregular wall-clock frames into whole simulation ticks.
/// Late frames drain extra ticks on the next call instead of dropping
/// them, so simulation time never falls behind wall-clock time.
pub struct FixedStep {
    last: Instant,
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self { last: Instant::now(), accumulator: 0.0 }
    }

    /// Measure the time since the previous call and return how many whole
    /// ticks are now due.
    pub fn drain(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.accumulate(elapsed)
    }

    fn accumulate(&mut self, elapsed_secs: f32) -> u32 {
        self.accumulator += elapsed_secs * TICK_RATE;
        let mut ticks = 0;
        while self.accumulator >= 1.0 {
            self.accumulator -= 1.0;
            ticks += 1;
        }
        ticks
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new()
    }
}

/// True once the player is within WIN_RADIUS of the exit center on both
/// axes. Checked after each render pass.
pub fn reached_end(pose: &Pose) -> bool {
    (pose.x - END_X).abs() < WIN_RADIUS && (pose.y - END_Y).abs() < WIN_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAP_DATA, MAP_HEIGHT, MAP_WIDTH, TICK_DT};
    use crate::core::map::{GridMap, Tile};

    #[test]
    fn accumulator_drains_whole_ticks() {
        let mut step = FixedStep::new();
        assert_eq!(step.accumulate(0.5), 30);
        assert_eq!(step.accumulate(0.0), 0);
    }

    #[test]
    fn accumulator_keeps_the_remainder() {
        let mut step = FixedStep::new();
        // Half a tick, then another half: the first fires nothing.
        assert_eq!(step.accumulate(0.5 / TICK_RATE), 0);
        assert_eq!(step.accumulate(0.5 / TICK_RATE), 1);
    }

    #[test]
    fn late_frame_drains_every_pending_tick() {
        let mut step = FixedStep::new();
        assert_eq!(step.accumulate(5.0 / TICK_RATE), 5);
    }

    // The per-tick dt is a held-over hardcoded 0.016 s while the
    // accumulator runs at 60 Hz (16.67 ms per tick), so one second of wall
    // clock advances slightly less than one second of simulation. The
    // mismatch is kept for fidelity with the reference behavior; this test
    // makes unifying the two constants a conscious decision.
    #[test]
    fn tick_dt_is_not_derived_from_tick_rate() {
        assert!(TICK_DT < 1.0 / TICK_RATE);
        assert!(1.0 / TICK_RATE - TICK_DT < 0.001);
    }

    #[test]
    fn win_requires_half_a_tile_on_both_axes() {
        assert!(reached_end(&Pose::new(14.5, 14.5, 0.0)));
        assert!(reached_end(&Pose::new(14.1, 14.9, 2.0)));
        // 0.6 away on x: no win.
        assert!(!reached_end(&Pose::new(13.9, 14.5, 0.0)));
        assert!(!reached_end(&Pose::new(14.5, 15.0, 0.0)));
    }

    #[test]
    fn exit_marker_matches_configured_end() {
        let map = GridMap::parse(MAP_DATA, MAP_WIDTH, MAP_HEIGHT).unwrap();
        let cell = (END_X.floor() as usize, END_Y.floor() as usize);
        assert_eq!(map.find(Tile::End), Some(cell));
    }
}
