//! Buttons on the seller's profile card.

use crate::conversation::{InfoStep, PendingState};
use crate::error::BotError;
use crate::gateway::types::CallbackQuery;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::text;

pub async fn change_photo(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
) -> Result<(), BotError> {
    state
        .sessions
        .set(cb.from.id, PendingState::ChangeProfilePhoto)
        .await;
    gw.answer_callback_query(&cb.id, None).await?;
    gw.send_message(chat_id, text::PROMPT_PROFILE_PHOTO, None)
        .await?;
    Ok(())
}

/// Walks the shop name, bio, and phone fields again; each accepts "skip"
/// to keep what is stored.
pub async fn edit_info(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
) -> Result<(), BotError> {
    state
        .sessions
        .set(
            cb.from.id,
            PendingState::EditProfileInfo(InfoStep::ShopName),
        )
        .await;
    gw.answer_callback_query(&cb.id, None).await?;
    gw.send_message(chat_id, text::PROMPT_SHOP_NAME, None).await?;
    Ok(())
}
