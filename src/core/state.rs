//! Game phase machine: Startup -> InGame -> Finished, Finished terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Startup,
    InGame,
    Finished,
}

impl GameState {
    /// Triggered by the title screen (ENTER). Only Startup moves.
    pub fn begin(&mut self) {
        if *self == GameState::Startup {
            *self = GameState::InGame;
        }
    }

    /// Declared by the win check. Idempotent; only InGame moves.
    pub fn finish(&mut self) {
        if *self == GameState::InGame {
            *self = GameState::Finished;
        }
    }
}
