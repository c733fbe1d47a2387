//! Core simulation: map data, player movement, game phases, fixed-step
//! timing. Nothing here touches the window, the audio device, or the
//! framebuffer.

pub mod map;
pub mod player;
pub mod sim;
pub mod state;
