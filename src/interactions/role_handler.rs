//! The buyer/seller choice buttons shown to fresh users.

use crate::database::models::Role;
use crate::database::{admins, users};
use crate::error::BotError;
use crate::gateway::types::{CallbackQuery, ReplyMarkup};
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{menu, text};

/// Stores the chosen role and swaps in the matching menu. Also clears any
/// armed wizard, including the role prompt's own text fallback.
pub async fn choose_role(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
    role: Role,
) -> Result<(), BotError> {
    users::set_role(&state.db, cb.from.id, role).await?;
    state.sessions.clear(cb.from.id).await;
    gw.answer_callback_query(&cb.id, None).await?;
    // Rewrite the prompt in place so its buttons stop inviting a re-pick.
    if let Some(prompt) = &cb.message {
        gw.edit_message_text(chat_id, prompt.message_id, &text::role_confirmed(role))
            .await?;
    }
    let is_admin = admins::is_admin(&state.db, cb.from.id).await?;
    gw.send_message(
        chat_id,
        text::MSG_WELCOME_BACK,
        Some(ReplyMarkup::Reply(menu::main_menu(Some(role), is_admin))),
    )
    .await?;
    Ok(())
}
