//! Identity of the user the client runs for.
//!
//! Inside the chat platform this comes from the host bridge once it reports
//! ready. Here it is read from the `[host]` config section (CLI flags may
//! override the id). It only feeds the request header and display fallbacks.

use crate::config::HostConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub photo_url: Option<String>,
}

impl HostUser {
    /// Returns `None` when no Telegram id is configured.
    pub fn from_config(config: &HostConfig) -> Option<Self> {
        let id = config.telegram_id?;
        Some(Self {
            id,
            first_name: non_empty(&config.first_name),
            last_name: non_empty(&config.last_name),
            username: non_empty(&config.username),
            photo_url: non_empty(&config.photo_url),
        })
    }

    /// "First Last", whichever parts are present.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
