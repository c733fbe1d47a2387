//! Projection of wall distances into flat-shaded screen columns.

use raylib::prelude::*;

use crate::consts::MIN_WALL_DISTANCE;
use crate::core::map::GridMap;
use crate::core::player::Pose;
use crate::render::caster::{cast_ray, column_angle};
use crate::render::framebuffer::Framebuffer;

const FAR_BAND: Color = Color::BLACK;
const WALL_BAND: Color = Color::GRAY;
const FLOOR_BAND: Color = Color::WHITE;

/// Vertical extent of one wall slice in screen rows. `ceiling` can be
/// negative (and `floor` past the bottom) when the wall is very close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSpan {
    pub ceiling: i32,
    pub floor: i32,
}

/// Screen-space extents for a wall at `distance`: the slice grows as the
/// reciprocal of distance and stays centered on the horizon.
pub fn project(distance: f32, screen_height: i32) -> WallSpan {
    let d = distance.max(MIN_WALL_DISTANCE);
    let h = screen_height as f32;
    let ceiling = (h / 2.0 - h / d) as i32;
    WallSpan { ceiling, floor: screen_height - ceiling }
}

/// Band color for a row of a column with the given span: far above the
/// slice, wall inside it, floor below. The `ceiling` row itself falls
/// through to the floor band, matching the reference renderer.
fn band_color(y: i32, span: WallSpan) -> Color {
    if y < span.ceiling {
        FAR_BAND
    } else if y > span.ceiling && y <= span.floor {
        WALL_BAND
    } else {
        FLOOR_BAND
    }
}

/// One full scene pass: one ray per framebuffer column, three flat bands
/// per column. No fisheye correction is applied, so walls bow slightly at
/// the screen edges like the reference renderer.
pub fn render_scene(fb: &mut Framebuffer, map: &GridMap, pose: &Pose) {
    let width = fb.width;
    let height = fb.height as i32;

    for x in 0..width {
        let angle = column_angle(pose.heading, x, width);
        let column = cast_ray(map, pose, angle);
        let span = project(column.distance, height);
        for y in 0..height {
            fb.set_pixel_color(x, y as u32, band_color(y, span));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_DEPTH;

    #[test]
    fn span_is_centered_on_the_horizon() {
        let span = project(MAX_DEPTH, 600);
        // 300 - 600/16 = 262.5, truncated.
        assert_eq!(span, WallSpan { ceiling: 262, floor: 338 });
        assert_eq!(span.ceiling + span.floor, 600);
    }

    #[test]
    fn near_walls_overflow_the_screen() {
        let span = project(1.0, 600);
        assert_eq!(span, WallSpan { ceiling: -300, floor: 900 });
    }

    #[test]
    fn zero_distance_is_clamped() {
        let span = project(0.0, 600);
        assert!(span.ceiling < 0);
        assert!(span.floor > 600);
    }

    #[test]
    fn bands_partition_a_column() {
        let span = WallSpan { ceiling: 2, floor: 6 };
        assert_eq!(band_color(0, span), FAR_BAND);
        assert_eq!(band_color(1, span), FAR_BAND);
        // The ceiling row itself is painted as floor, the reference quirk.
        assert_eq!(band_color(2, span), FLOOR_BAND);
        assert_eq!(band_color(3, span), WALL_BAND);
        assert_eq!(band_color(6, span), WALL_BAND);
        assert_eq!(band_color(7, span), FLOOR_BAND);
    }

    #[test]
    fn scene_pass_paints_every_column_in_band_colors() {
        use crate::core::map::GridMap;

        let rows = ["#.#", "#.#", "#.#", "#.#", "#.#", "#.#", "###"];
        let map = GridMap::parse(&rows.concat(), 3, 7).unwrap();
        let pose = Pose::new(1.5, 0.5, 0.0);
        let mut fb = Framebuffer::new(8, 8);
        render_scene(&mut fb, &map, &pose);

        for y in 0..8 {
            for x in 0..8 {
                let c = fb.get_pixel(x, y);
                assert!(c == FAR_BAND || c == WALL_BAND || c == FLOOR_BAND);
            }
        }
        // The center column looks straight down the corridor: wall ~5.5
        // away, so the slice is short and the horizon sits mid-screen.
        let span = project(cast_ray(&map, &pose, 0.0).distance, 8);
        assert_eq!(fb.get_pixel(4, 0), FAR_BAND);
        assert_eq!(fb.get_pixel(4, (span.ceiling + 1) as u32), WALL_BAND);
        assert_eq!(fb.get_pixel(4, 7), FLOOR_BAND);
    }
}
