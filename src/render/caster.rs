//! Per-column ray marching against the grid.

use crate::consts::{FOV, MAX_DEPTH, RAY_STEP};
use crate::core::map::GridMap;
use crate::core::player::Pose;

/// Result of marching one ray. Ephemeral, one per screen column per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderColumn {
    pub angle: f32,
    pub distance: f32,
    /// The ray left the grid or ran out of depth instead of striking a
    /// wall; such columns render as open sky at max depth.
    pub hit_boundary: bool,
}

/// Ray angle for screen column `x` of `screen_width`: columns sweep the
/// FOV left to right, centered on the heading.
pub fn column_angle(heading: f32, x: u32, screen_width: u32) -> f32 {
    (heading - FOV / 2.0) + (x as f32 / screen_width as f32) * FOV
}

/// March a ray outward in RAY_STEP increments until it strikes a wall,
/// exits the grid, or exceeds MAX_DEPTH. Bounds are checked before every
/// tile sample, so the map is never queried outside the grid.
pub fn cast_ray(map: &GridMap, pose: &Pose, angle: f32) -> RenderColumn {
    let eye_x = angle.sin();
    let eye_y = angle.cos();

    let mut distance = 0.0;
    while distance < MAX_DEPTH {
        distance += RAY_STEP;
        let col = (pose.x + eye_x * distance).floor() as i32;
        let row = (pose.y + eye_y * distance).floor() as i32;

        if !map.in_bounds(col, row) {
            return RenderColumn { angle, distance: MAX_DEPTH, hit_boundary: true };
        }
        if map.is_wall(col, row) {
            return RenderColumn { angle, distance, hit_boundary: false };
        }
    }
    RenderColumn { angle, distance: MAX_DEPTH, hit_boundary: true }
}
