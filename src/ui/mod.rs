pub mod app;
pub mod cart;
pub mod events;
pub mod fetch;
pub mod footer;
pub mod game;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod news;
pub mod profile;
pub mod referrals;
pub mod render;
pub mod runtime;
pub mod shop;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;
pub mod worker;
