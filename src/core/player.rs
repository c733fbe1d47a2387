//! Player pose and per-tick movement against the grid.

use crate::consts::{MOVE_SPEED, TURN_COUPLING};
use crate::core::map::GridMap;

/// Held movement keys, snapshotted once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementInput {
    pub forward: bool,
    pub turn_left: bool,
    pub backward: bool,
    pub turn_right: bool,
}

/// Continuous position in tile units plus heading in radians. Heading 0
/// faces +y and the forward vector is (sin h, cos h); it is never
/// range-reduced, only ever fed through sin/cos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    /// Advance one tick. Turning always applies. Translation is proposed
    /// as one full step and rejected whole if the destination cell blocks;
    /// there is no per-axis sliding, so walls stop the player dead.
    pub fn update(&mut self, input: &MovementInput, dt: f32, map: &GridMap) {
        if input.turn_left {
            self.heading -= MOVE_SPEED * TURN_COUPLING * dt;
        }
        if input.turn_right {
            self.heading += MOVE_SPEED * TURN_COUPLING * dt;
        }

        let sign = match (input.forward, input.backward) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => return,
        };
        let nx = self.x + self.heading.sin() * MOVE_SPEED * dt * sign;
        let ny = self.y + self.heading.cos() * MOVE_SPEED * dt * sign;
        if !map.blocks(nx, ny) {
            self.x = nx;
            self.y = ny;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAP_DATA, MAP_HEIGHT, MAP_WIDTH, TICK_DT};

    fn maze() -> GridMap {
        GridMap::parse(MAP_DATA, MAP_WIDTH, MAP_HEIGHT).unwrap()
    }

    // 3x3 with only the center cell open.
    fn cell() -> GridMap {
        GridMap::parse("####.####", 3, 3).unwrap()
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let map = maze();
        let mut pose = Pose::new(1.5, 1.5, 0.7);
        let before = pose;
        pose.update(&MovementInput::default(), TICK_DT, &map);
        assert_eq!(pose, before);
    }

    #[test]
    fn one_forward_tick_from_start() {
        let map = maze();
        let mut pose = Pose::new(1.5, 1.5, 0.0);
        let input = MovementInput { forward: true, ..Default::default() };
        pose.update(&input, 0.016, &map);
        // (1.5 + sin(0)*5*0.016, 1.5 + cos(0)*5*0.016) = (1.5, 1.58)
        assert!((pose.x - 1.5).abs() < 1e-6);
        assert!((pose.y - 1.58).abs() < 1e-6);
        assert_eq!(pose.heading, 0.0);
    }

    #[test]
    fn backward_moves_opposite() {
        let map = maze();
        let mut pose = Pose::new(1.5, 3.0, 0.0);
        let input = MovementInput { backward: true, ..Default::default() };
        pose.update(&input, 0.016, &map);
        assert!((pose.y - 2.92).abs() < 1e-6);
    }

    #[test]
    fn forward_and_backward_cancel() {
        let map = maze();
        let mut pose = Pose::new(1.5, 1.5, 0.3);
        let before = pose;
        let input = MovementInput { forward: true, backward: true, ..Default::default() };
        pose.update(&input, TICK_DT, &map);
        assert_eq!(pose, before);
    }

    #[test]
    fn blocked_step_reverts_both_axes_but_still_turns() {
        let map = cell();
        let mut pose = Pose::new(1.5, 1.5, 0.0);
        let input = MovementInput { forward: true, turn_right: true, ..Default::default() };
        // Big dt so the full step lands in a wall cell whichever way the
        // updated heading points.
        pose.update(&input, 0.2, &map);
        assert_eq!(pose.x, 1.5);
        assert_eq!(pose.y, 1.5);
        assert_eq!(pose.heading, MOVE_SPEED * TURN_COUPLING * 0.2);
    }

    #[test]
    fn turning_alone_never_translates() {
        let map = cell();
        let mut pose = Pose::new(1.5, 1.5, 0.0);
        let input = MovementInput { turn_left: true, ..Default::default() };
        pose.update(&input, TICK_DT, &map);
        assert_eq!(pose.x, 1.5);
        assert_eq!(pose.y, 1.5);
        assert!(pose.heading < 0.0);
    }
}
