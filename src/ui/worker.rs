//! Executes backend requests for the UI thread.
//!
//! The UI sends [`ApiCommand`]s; each runs in its own task and its outcome is
//! delivered back as [`AppEvent::Api`]. Errors are converted to display
//! messages here, at the call site.

use std::future::Future;
use std::sync::mpsc as std_mpsc;
use tokio::sync::mpsc;

use crate::api::{
    ApiClient, ApiError, GameClickResult, NewsPost, OrderReceipt, OrderRequest, ReferralSummary,
    ShopItem, UserProfile,
};
use crate::ui::events::AppEvent;

/// Requests the UI can issue. Reads carry the generation of the screen visit
/// that asked for them.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    FetchNews { generation: u64 },
    FetchProfile { generation: u64 },
    FetchReferrals { generation: u64 },
    FetchShop { generation: u64 },
    GameClick,
    SubmitOrder { order: OrderRequest },
}

/// Outcome of an [`ApiCommand`]. Errors are already display messages.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    News {
        generation: u64,
        result: Result<Vec<NewsPost>, String>,
    },
    Profile {
        generation: u64,
        result: Result<UserProfile, String>,
    },
    Referrals {
        generation: u64,
        result: Result<ReferralSummary, String>,
    },
    Shop {
        generation: u64,
        result: Result<Vec<ShopItem>, String>,
    },
    GameClick(Result<GameClickResult, String>),
    Order(Result<OrderReceipt, String>),
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Capacity of the command queue. Screens issue at most one request per
/// action, so this is never approached in practice.
pub const COMMAND_QUEUE_CAPACITY: usize = 32;

pub struct RequestWorker {
    client: ApiClient,
    news_page_size: u32,
    events: std_mpsc::Sender<AppEvent>,
}

impl RequestWorker {
    pub fn new(client: ApiClient, news_page_size: u32, events: std_mpsc::Sender<AppEvent>) -> Self {
        Self {
            client,
            news_page_size,
            events,
        }
    }

    /// Runs until every command sender is dropped.
    pub async fn run(self, mut commands: mpsc::Receiver<ApiCommand>) {
        tracing::info!(base_url = self.client.base_url(), "Request worker started");
        while let Some(command) = commands.recv().await {
            tracing::debug!(?command, "Dispatching backend request");
            let client = self.client.clone();
            let events = self.events.clone();
            let news_page_size = self.news_page_size;
            tokio::spawn(async move {
                let event = execute(&client, news_page_size, command).await;
                if events.send(AppEvent::Api(event)).is_err() {
                    tracing::trace!("Backend result dropped (UI gone)");
                }
            });
        }
        tracing::info!("Request worker stopped");
    }
}

/// Performs one command against the backend.
pub async fn execute(client: &ApiClient, news_page_size: u32, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FetchNews { generation } => ApiEvent::News {
            generation,
            result: outcome("news", client.news(news_page_size, 0)).await,
        },
        ApiCommand::FetchProfile { generation } => ApiEvent::Profile {
            generation,
            result: outcome("profile", client.profile()).await,
        },
        ApiCommand::FetchReferrals { generation } => ApiEvent::Referrals {
            generation,
            result: outcome("referrals", client.referrals()).await,
        },
        ApiCommand::FetchShop { generation } => ApiEvent::Shop {
            generation,
            result: outcome("shop", client.shop_items()).await,
        },
        ApiCommand::GameClick => ApiEvent::GameClick(outcome("game_click", client.game_click()).await),
        ApiCommand::SubmitOrder { order } => {
            ApiEvent::Order(outcome("order", client.create_order(&order)).await)
        }
    }
}

async fn outcome<T>(
    action: &'static str,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, String> {
    request.await.map_err(|err| {
        tracing::warn!(action, error_type = err.error_type(), error = %err, "Backend request failed");
        err.user_message()
    })
}
