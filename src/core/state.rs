//! Core domain: top-level game states.

/// Only `Playing` advances the simulation. `TimeStop` and `Editing` are reserved and behave like
/// a frozen frame.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
    TimeStop,
    Paused,
    Editing,
}

impl GameState {
    /// States from which entering `Playing` restarts at the starting level.
    pub fn restarts_on_play(self) -> bool {
        matches!(self, GameState::MainMenu | GameState::Paused)
    }
}
