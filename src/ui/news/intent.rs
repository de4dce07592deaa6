use crate::api::NewsPost;
use crate::ui::fetch::FetchIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NewsIntent {
    Fetch(FetchIntent<Vec<NewsPost>>),
    ScrollUp,
    ScrollDown,
}

impl Intent for NewsIntent {}
