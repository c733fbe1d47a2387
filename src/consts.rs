//! Compiled-in configuration: screen, projection, movement, timing, map.

use std::f32::consts::PI;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

pub const MAP_WIDTH: usize = 16;
pub const MAP_HEIGHT: usize = 16;

/// Horizontal field of view, radians.
pub const FOV: f32 = PI / 4.0;
/// Rays stop after this many tile units and render as open sky.
pub const MAX_DEPTH: f32 = 16.0;
/// Fixed ray-march increment, tile units.
pub const RAY_STEP: f32 = 0.1;
/// Wall distances are clamped to this before the projection divide.
pub const MIN_WALL_DISTANCE: f32 = 1e-4;

/// Movement speed, tile units per second.
pub const MOVE_SPEED: f32 = 5.0;
/// Turn rate is this fraction of MOVE_SPEED (in radians/s), not an
/// independent knob.
pub const TURN_COUPLING: f32 = 0.75;

/// Simulation ticks per second of wall-clock time.
pub const TICK_RATE: f32 = 60.0;
/// Seconds of simulation advanced per tick. Deliberately its own constant
/// rather than `1.0 / TICK_RATE`; see the tests in `core::sim`.
pub const TICK_DT: f32 = 0.016;

pub const START_X: f32 = 1.5;
pub const START_Y: f32 = 1.5;
pub const START_HEADING: f32 = 0.0;

/// Center of the exit tile. Must agree with the 'E' cell in `MAP_DATA`.
pub const END_X: f32 = 14.5;
pub const END_Y: f32 = 14.5;
/// Reaching within this of the exit center on both axes wins.
pub const WIN_RADIUS: f32 = 0.5;

/// Row-major 16x16 maze. '#' wall, '.' open, 'S' conventional start
/// (informational, the initial pose comes from START_X/START_Y), 'E' exit.
pub const MAP_DATA: &str = concat!(
    "S.......#.......",
    "#...............",
    "#.......########",
    "#..............#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "###............#",
    "##.............#",
    "#......####..###",
    "#......#.......#",
    "#......#.......#",
    "#..............#",
    "#......#########",
    "#.............E#",
    "################",
);
