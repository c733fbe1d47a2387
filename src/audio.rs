//! Background music playback. Every failure here is logged and swallowed;
//! audio must never take the game loop down with it.

use std::fs::File;
use std::io::{Cursor, Read};

use rodio::{Decoder, OutputStream, Sink};

pub struct AudioManager {
    _stream: OutputStream,
    bg_sink: Sink,
}

impl AudioManager {
    /// None when no output device is available.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        let bg_sink = Sink::try_new(&handle).ok()?;
        Some(Self { _stream, bg_sink })
    }

    /// Loop a music file forever. Missing or undecodable files are skipped.
    pub fn play_music_loop(&self, path: &str) {
        let mut bytes = Vec::new();
        let read = File::open(path).and_then(|mut f| f.read_to_end(&mut bytes));
        if let Err(e) = read {
            log::warn!("background music {path} not loaded: {e}");
            return;
        }
        match Decoder::new_looped(Cursor::new(bytes)) {
            Ok(source) => {
                self.bg_sink.set_volume(0.35);
                self.bg_sink.append(source);
            }
            Err(e) => log::warn!("could not decode {path}: {e}"),
        }
    }
}
