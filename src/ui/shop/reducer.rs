use crate::ui::fetch::FetchReducer;
use crate::ui::mvi::Reducer;
use crate::ui::shop::intent::ShopIntent;
use crate::ui::shop::state::ShopState;

pub struct ShopReducer;

impl Reducer for ShopReducer {
    type State = ShopState;
    type Intent = ShopIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShopIntent::Fetch(fetch) => {
                let catalog = FetchReducer::reduce(state.catalog, fetch);
                let len = catalog.data().map_or(0, Vec::len);
                ShopState {
                    catalog,
                    selected: state.selected.min(len.saturating_sub(1)),
                }
            }
            ShopIntent::MoveUp => {
                let len = state.catalog.data().map_or(0, Vec::len);
                let selected = if state.selected == 0 {
                    len.saturating_sub(1)
                } else {
                    state.selected - 1
                };
                ShopState { selected, ..state }
            }
            ShopIntent::MoveDown => {
                let len = state.catalog.data().map_or(0, Vec::len);
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                ShopState { selected, ..state }
            }
        }
    }
}
