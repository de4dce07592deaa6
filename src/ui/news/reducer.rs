use crate::ui::fetch::{FetchIntent, FetchReducer};
use crate::ui::mvi::Reducer;
use crate::ui::news::intent::NewsIntent;
use crate::ui::news::state::NewsState;

pub struct NewsReducer;

impl Reducer for NewsReducer {
    type State = NewsState;
    type Intent = NewsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NewsIntent::Fetch(fetch) => {
                let restart = matches!(fetch, FetchIntent::Start { .. });
                NewsState {
                    feed: FetchReducer::reduce(state.feed, fetch),
                    scroll: if restart { 0 } else { state.scroll },
                }
            }
            NewsIntent::ScrollUp => NewsState {
                scroll: state.scroll.saturating_sub(1),
                ..state
            },
            NewsIntent::ScrollDown => {
                let last = state.feed.data().map_or(0, |posts| posts.len().saturating_sub(1));
                NewsState {
                    scroll: (state.scroll + 1).min(last),
                    ..state
                }
            }
        }
    }
}
