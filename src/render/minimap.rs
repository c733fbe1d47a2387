//! Top-down map overlay with a player marker and heading tick.

use raylib::prelude::*;

use crate::core::map::{GridMap, Tile};
use crate::core::player::Pose;
use crate::render::framebuffer::Framebuffer;

const TILE_SIZE: u32 = 12;
const OFFSET_X: u32 = 10;
const OFFSET_Y: u32 = 10;
const PLAYER_SIZE: u32 = 6;
const HEADING_TICK: u32 = 8;

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Wall => Color::BLACK,
        Tile::Start => Color::GREEN,
        Tile::End => Color::RED,
        Tile::Empty => Color::WHITE,
    }
}

fn fill_rect(fb: &mut Framebuffer, x0: u32, y0: u32, w: u32, h: u32) {
    for x in x0..x0 + w {
        for y in y0..y0 + h {
            fb.set_pixel(x, y);
        }
    }
}

pub fn render_minimap(fb: &mut Framebuffer, map: &GridMap, pose: &Pose) {
    for (row, tiles) in map.rows().enumerate() {
        for (col, &tile) in tiles.iter().enumerate() {
            fb.set_current_color(tile_color(tile));
            fill_rect(
                fb,
                OFFSET_X + col as u32 * TILE_SIZE,
                OFFSET_Y + row as u32 * TILE_SIZE,
                TILE_SIZE,
                TILE_SIZE,
            );
        }
    }

    // Player marker centered in its current tile.
    let pcol = pose.x.floor().max(0.0) as u32;
    let prow = pose.y.floor().max(0.0) as u32;
    let px = OFFSET_X + pcol * TILE_SIZE + (TILE_SIZE - PLAYER_SIZE) / 2;
    let py = OFFSET_Y + prow * TILE_SIZE + (TILE_SIZE - PLAYER_SIZE) / 2;
    fb.set_current_color(Color::BLUE);
    fill_rect(fb, px, py, PLAYER_SIZE, PLAYER_SIZE);

    // Short facing tick from the marker center.
    let cx = (px + PLAYER_SIZE / 2) as f32;
    let cy = (py + PLAYER_SIZE / 2) as f32;
    fb.set_current_color(Color::DARKBLUE);
    for r in 0..HEADING_TICK {
        let x = cx + pose.heading.sin() * r as f32;
        let y = cy + pose.heading.cos() * r as f32;
        if x >= 0.0 && y >= 0.0 {
            fb.set_pixel(x as u32, y as u32);
        }
    }
}
