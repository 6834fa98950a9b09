//! Pure presentation: keyboards, inline buttons, and message text. Nothing
//! in here talks to Telegram or the store.

pub mod buttons;
pub mod menu;
pub mod text;
