use crate::ui::fetch::{FetchIntent, FetchReducer};
use crate::ui::mvi::Reducer;
use crate::ui::referrals::intent::ReferralsIntent;
use crate::ui::referrals::state::{CopyStatus, ReferralsState};

pub struct ReferralsReducer;

impl Reducer for ReferralsReducer {
    type State = ReferralsState;
    type Intent = ReferralsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReferralsIntent::Fetch(fetch) => {
                let restart = matches!(fetch, FetchIntent::Start { .. });
                ReferralsState {
                    summary: FetchReducer::reduce(state.summary, fetch),
                    copy_status: if restart { None } else { state.copy_status },
                }
            }
            ReferralsIntent::Copied => ReferralsState {
                copy_status: Some(CopyStatus::Copied),
                ..state
            },
            ReferralsIntent::CopyFailed { message } => ReferralsState {
                copy_status: Some(CopyStatus::Failed(message)),
                ..state
            },
        }
    }
}
