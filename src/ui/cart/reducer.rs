use crate::ui::cart::intent::CartScreenIntent;
use crate::ui::cart::state::CartScreenState;
use crate::ui::mvi::Reducer;

pub struct CartScreenReducer;

impl Reducer for CartScreenReducer {
    type State = CartScreenState;
    type Intent = CartScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartScreenIntent::MoveUp { lines } => {
                let selected = if state.selected == 0 {
                    lines.saturating_sub(1)
                } else {
                    state.selected.min(lines.saturating_sub(1)).saturating_sub(1)
                };
                CartScreenState { selected, ..state }
            }
            CartScreenIntent::MoveDown { lines } => {
                let selected = if state.selected + 1 >= lines {
                    0
                } else {
                    state.selected + 1
                };
                CartScreenState { selected, ..state }
            }
            CartScreenIntent::Clamp { lines } => CartScreenState {
                selected: state.selected.min(lines.saturating_sub(1)),
                ..state
            },
            CartScreenIntent::TogglePayment => CartScreenState {
                pay_with_bonus: !state.pay_with_bonus,
                ..state
            },
            CartScreenIntent::Submit => CartScreenState {
                pending: true,
                error: None,
                ..state
            },
            CartScreenIntent::Succeeded => CartScreenState {
                selected: 0,
                pending: false,
                error: None,
                ..state
            },
            CartScreenIntent::Failed { message } => CartScreenState {
                pending: false,
                error: Some(message),
                ..state
            },
        }
    }
}
