use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::types::{
    GameClickResult, NewsPost, OrderReceipt, OrderRequest, ReferralSummary, ShopItem, UserProfile,
};
use crate::config::ApiConfig;
use crate::host::HostUser;

/// Header the backend reads the caller's Telegram id from.
pub const TELEGRAM_ID_HEADER: &str = "X-Telegram-Id";

/// Typed client for the camp backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, host_user: Option<&HostUser>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(user) = host_user {
            headers.insert(TELEGRAM_ID_HEADER, HeaderValue::from(user.id));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .default_headers(headers)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Published news, newest first.
    pub async fn news(&self, limit: u32, offset: u32) -> Result<Vec<NewsPost>, ApiError> {
        let builder = self
            .request(Method::GET, "/api/news")
            .query(&[("limit", limit), ("offset", offset)]);
        self.execute("/api/news", builder).await
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let path = "/api/profile/me";
        self.execute(path, self.request(Method::GET, path)).await
    }

    pub async fn referrals(&self) -> Result<ReferralSummary, ApiError> {
        let path = "/api/referrals/me";
        self.execute(path, self.request(Method::GET, path)).await
    }

    pub async fn shop_items(&self) -> Result<Vec<ShopItem>, ApiError> {
        let path = "/api/shop/items";
        self.execute(path, self.request(Method::GET, path)).await
    }

    pub async fn game_click(&self) -> Result<GameClickResult, ApiError> {
        let path = "/api/game/click";
        self.execute(path, self.request(Method::POST, path)).await
    }

    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        let path = "/api/shop/orders";
        let builder = self.request(Method::POST, path).json(order);
        self.execute(path, builder).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!(endpoint, "Sending backend request");

        let response = builder.send().await.map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }
}
