use crate::ui::mvi::UiState;

/// Values reported by the backend after a click (or taken from the profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    pub bonus_balance: i64,
    pub game_progress: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameState {
    /// `None` until the first server value arrives.
    pub stats: Option<GameStats>,
    /// A click request is in flight; further clicks are ignored.
    pub pending: bool,
    pub error: Option<String>,
}

impl UiState for GameState {}
