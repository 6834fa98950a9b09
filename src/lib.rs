//! Telegram marketplace bot: buyers browse, save, and cart products;
//! sellers run a shop profile and listings through chat wizards; admins
//! manage both from extra menu rows.

pub mod commands;
pub mod conversation;
pub mod database;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod ui;

pub use error::BotError;
pub use model::AppState;
