use crate::api::ShopItem;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShopState {
    pub catalog: FetchState<Vec<ShopItem>>,
    pub selected: usize,
}

impl UiState for ShopState {}

impl ShopState {
    pub fn selected_item(&self) -> Option<&ShopItem> {
        self.catalog.data().and_then(|items| items.get(self.selected))
    }
}
