use crate::api::ShopItem;
use crate::ui::fetch::FetchIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ShopIntent {
    Fetch(FetchIntent<Vec<ShopItem>>),
    MoveUp,
    MoveDown,
}

impl Intent for ShopIntent {}
