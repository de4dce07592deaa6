//! HTTP access to the camp backend.

mod client;
mod error;
mod types;

pub use client::{ApiClient, TELEGRAM_ID_HEADER};
pub use error::ApiError;
pub use types::{
    GameClickResult, InvitedUser, ItemId, LinkedAccount, NewsPost, OrderLine, OrderReceipt,
    OrderRequest, ReferralSummary, Role, ShopItem, UserProfile,
};
