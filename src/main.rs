mod audio;
mod consts;
mod core;
mod render;

use std::thread;
use std::time::Duration;

use raylib::prelude::*;

use crate::audio::AudioManager;
use crate::consts::*;
use crate::core::map::GridMap;
use crate::core::player::{MovementInput, Pose};
use crate::core::sim::{FixedStep, reached_end};
use crate::core::state::GameState;
use crate::render::framebuffer::Framebuffer;
use crate::render::minimap::render_minimap;
use crate::render::projector::render_scene;

fn poll_input(rl: &RaylibHandle) -> MovementInput {
    MovementInput {
        forward: rl.is_key_down(KeyboardKey::KEY_W),
        turn_left: rl.is_key_down(KeyboardKey::KEY_A),
        backward: rl.is_key_down(KeyboardKey::KEY_S),
        turn_right: rl.is_key_down(KeyboardKey::KEY_D),
    }
}

fn draw_startup_screen(d: &mut RaylibDrawHandle) {
    d.clear_background(Color::BLACK);
    d.draw_text("FPS Maze", SCREEN_WIDTH / 2 - 100, SCREEN_HEIGHT / 2 - 50, 36, Color::WHITE);
    d.draw_text(
        "Press ENTER to start",
        SCREEN_WIDTH / 2 - 130,
        SCREEN_HEIGHT / 2,
        24,
        Color::WHITE,
    );
}

fn draw_congrats_screen(d: &mut RaylibDrawHandle) {
    d.clear_background(Color::BLACK);
    d.draw_text(
        "Congratulations!",
        SCREEN_WIDTH / 2 - 150,
        SCREEN_HEIGHT / 2 - 50,
        36,
        Color::WHITE,
    );
    d.draw_text(
        "You reached the exit",
        SCREEN_WIDTH / 2 - 120,
        SCREEN_HEIGHT / 2,
        24,
        Color::WHITE,
    );
    d.draw_text(
        "Press ENTER to quit",
        SCREEN_WIDTH / 2 - 100,
        SCREEN_HEIGHT / 2 + 50,
        24,
        Color::WHITE,
    );
}

fn main() {
    env_logger::init();

    let map = match GridMap::parse(MAP_DATA, MAP_WIDTH, MAP_HEIGHT) {
        Ok(map) => map,
        Err(e) => {
            log::error!("embedded map is invalid: {e}");
            return;
        }
    };

    let (mut window, raylib_thread) = raylib::init()
        .size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .title("FPS Maze")
        .build();

    let audio = AudioManager::new();
    match &audio {
        Some(audio) => audio.play_music_loop("assets/music_bg.wav"),
        None => log::warn!("no audio output device, running silent"),
    }

    let mut framebuffer = Framebuffer::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    let blank = Image::gen_image_color(SCREEN_WIDTH, SCREEN_HEIGHT, Color::BLACK);
    let mut screen_tex = match window.load_texture_from_image(&raylib_thread, &blank) {
        Ok(tex) => tex,
        Err(e) => {
            log::error!("could not create the screen texture: {e}");
            return;
        }
    };

    let mut pose = Pose::new(START_X, START_Y, START_HEADING);
    let mut state = GameState::Startup;
    let mut clock = FixedStep::new();

    while !window.window_should_close() {
        match state {
            GameState::Startup => {
                if window.is_key_pressed(KeyboardKey::KEY_ENTER) {
                    state.begin();
                    // Don't replay the time spent on the title screen.
                    clock = FixedStep::new();
                }
                let mut d = window.begin_drawing(&raylib_thread);
                draw_startup_screen(&mut d);
            }
            GameState::InGame => {
                let ticks = clock.drain();
                for _ in 0..ticks {
                    let input = poll_input(&window);
                    pose.update(&input, TICK_DT, &map);
                }
                if ticks > 0 {
                    framebuffer.clear();
                    render_scene(&mut framebuffer, &map, &pose);
                    render_minimap(&mut framebuffer, &map, &pose);
                    framebuffer.upload_to_texture(&mut screen_tex);
                }

                let fps_now = window.get_fps();
                {
                    let mut d = window.begin_drawing(&raylib_thread);
                    d.clear_background(Color::BLACK);
                    d.draw_texture(&screen_tex, 0, 0, Color::WHITE);
                    d.draw_text(
                        &format!("FPS: {fps_now}"),
                        10,
                        SCREEN_HEIGHT - 30,
                        20,
                        Color::DARKGREEN,
                    );
                }

                if reached_end(&pose) {
                    log::info!("exit reached at ({:.2}, {:.2})", pose.x, pose.y);
                    state.finish();
                }
            }
            GameState::Finished => {
                if window.is_key_pressed(KeyboardKey::KEY_ENTER) {
                    break;
                }
                let mut d = window.begin_drawing(&raylib_thread);
                draw_congrats_screen(&mut d);
            }
        }

        // ~60 FPS frame wait.
        thread::sleep(Duration::from_millis(16));
    }
}
