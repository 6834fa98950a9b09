//! /start: returning users get their menu, fresh users get the role
//! prompt with a text fallback armed behind it.

use crate::conversation::PendingState;
use crate::database::{admins, users};
use crate::error::BotError;
use crate::gateway::types::ReplyMarkup;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{buttons, menu, text};

pub async fn run(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    let role = users::get_role(&state.db, user_id).await?;
    match role {
        Some(role) => {
            let is_admin = admins::is_admin(&state.db, user_id).await?;
            gw.send_message(
                chat_id,
                text::MSG_WELCOME_BACK,
                Some(ReplyMarkup::Reply(menu::main_menu(Some(role), is_admin))),
            )
            .await?;
        }
        None => {
            gw.send_message(chat_id, text::ROLE_PROMPT, Some(buttons::role_buttons()))
                .await?;
            state
                .sessions
                .set(user_id, PendingState::AwaitingRoleChoice)
                .await;
        }
    }
    Ok(())
}
