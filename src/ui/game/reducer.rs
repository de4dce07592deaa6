use crate::ui::game::intent::GameIntent;
use crate::ui::game::state::{GameState, GameStats};
use crate::ui::mvi::Reducer;

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Seed(stats) => match state.stats {
                None => GameState {
                    stats: Some(stats),
                    ..state
                },
                Some(_) => state,
            },
            GameIntent::Click => GameState {
                pending: true,
                error: None,
                ..state
            },
            GameIntent::Succeeded(result) => GameState {
                stats: Some(GameStats {
                    bonus_balance: result.new_bonus_balance,
                    game_progress: result.game_progress,
                }),
                pending: false,
                error: None,
            },
            GameIntent::Failed { message } => GameState {
                pending: false,
                error: Some(message),
                ..state
            },
        }
    }
}
