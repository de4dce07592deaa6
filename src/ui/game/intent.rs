use crate::api::GameClickResult;
use crate::ui::game::state::GameStats;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GameIntent {
    /// Starting values from an already loaded profile. Ignored once the
    /// game has its own values.
    Seed(GameStats),
    /// User tapped. Marks the click as in flight.
    Click,
    Succeeded(GameClickResult),
    Failed { message: String },
}

impl Intent for GameIntent {}
