//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use fillcamp::api::{ApiClient, ItemId, ShopItem};
use fillcamp::clipboard::{ClipboardError, ClipboardSink};
use fillcamp::config::{ApiConfig, HostConfig};
use fillcamp::host::HostUser;
use fillcamp::ui::app::App;
use fillcamp::ui::worker::{ApiCommand, COMMAND_QUEUE_CAPACITY};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub const TEST_TELEGRAM_ID: i64 = 424242;

/// Find a port nothing listens on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn host_user() -> HostUser {
    HostUser::from_config(&HostConfig {
        telegram_id: Some(TEST_TELEGRAM_ID),
        first_name: Some("Ann".to_string()),
        last_name: Some("Lee".to_string()),
        ..HostConfig::default()
    })
    .expect("host user")
}

/// Client pointed at `base_url`, acting as [`TEST_TELEGRAM_ID`].
pub fn api_client(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..ApiConfig::default()
    };
    ApiClient::new(&config, Some(&host_user())).expect("client")
}

pub fn shop_item(id: i64, name: &str, price_bonus: u64) -> ShopItem {
    ShopItem {
        id: ItemId::new(id),
        name: name.to_string(),
        description: None,
        image_url: None,
        price_bonus,
        price_money: None,
        category: None,
    }
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command queue the test drains itself.
pub fn make_app() -> (App, mpsc::Receiver<ApiCommand>) {
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
    let mut app = App::new(Some(host_user()));
    app.set_command_sender(tx);
    (app, rx)
}

/// Pops every queued command.
pub fn drain(rx: &mut mpsc::Receiver<ApiCommand>) -> Vec<ApiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

// -- Clipboard fakes ----------------------------------------------------------

/// Records every copied string.
#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copied.push(text.to_string());
        Ok(())
    }
}
