use std::marker::PhantomData;

use crate::ui::fetch::intent::FetchIntent;
use crate::ui::fetch::state::FetchState;
use crate::ui::mvi::Reducer;

pub struct FetchReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchState<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start { generation } => FetchState::Loading { generation },
            FetchIntent::Loaded { generation, data } => match state {
                FetchState::Loading { generation: current } if current == generation => {
                    FetchState::Loaded { generation, data }
                }
                other => {
                    tracing::debug!(generation, "Dropping stale fetch result");
                    other
                }
            },
            FetchIntent::Failed {
                generation,
                message,
            } => match state {
                FetchState::Loading { generation: current } if current == generation => {
                    FetchState::Failed {
                        generation,
                        message,
                    }
                }
                other => {
                    tracing::debug!(generation, "Dropping stale fetch failure");
                    other
                }
            },
        }
    }
}
