//! Wire types served by the camp backend.
//!
//! Field names follow the backend's JSON (snake_case) so every type
//! deserializes without renames.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier of a shop item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsPost {
    pub id: i64,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Accepts both RFC 3339 and naive ISO-8601 timestamps. Naive values are UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Child,
    Parent,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Child => "Child",
            Role::Parent => "Parent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub tg_id: i64,
    pub full_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub linked_parent_tg_id: Option<i64>,
    #[serde(default)]
    pub linked_child_tg_id: Option<i64>,
    #[serde(default)]
    pub bonus_balance: i64,
    #[serde(default)]
    pub game_progress: i64,
}

/// The account linked to a profile, seen from the profile owner's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedAccount {
    Parent(Option<i64>),
    Child(Option<i64>),
}

impl UserProfile {
    /// A child is linked to a parent, a parent to a child.
    pub fn linked_account(&self) -> LinkedAccount {
        match self.role {
            Role::Child => LinkedAccount::Parent(self.linked_parent_tg_id),
            Role::Parent => LinkedAccount::Child(self.linked_child_tg_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InvitedUser {
    pub full_name: String,
    pub tg_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferralSummary {
    pub referral_link: String,
    pub invited_count: u32,
    pub bonus_earned: i64,
    #[serde(default)]
    pub invited_users: Vec<InvitedUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub price_bonus: u64,
    #[serde(default)]
    pub price_money: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GameClickResult {
    pub new_bonus_balance: i64,
    pub game_progress: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
    pub pay_with_bonus: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderReceipt {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    pub total_bonus: i64,
    #[serde(default)]
    pub total_money: Option<f64>,
    pub status: String,
}
