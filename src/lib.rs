pub mod api;
pub mod cart;
pub mod clipboard;
pub mod config;
pub mod host;
pub mod logging;
pub mod ui;
