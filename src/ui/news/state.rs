use crate::api::NewsPost;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsState {
    pub feed: FetchState<Vec<NewsPost>>,
    /// Index of the first post shown.
    pub scroll: usize,
}

impl UiState for NewsState {}
