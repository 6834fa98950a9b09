//! Admin commands: the self-grant backdoor, the management listings, and
//! the id wizards behind the management buttons.

use crate::conversation::{AdminIdKind, PendingState};
use crate::database::admins::add_admin;
use crate::database::products::all_products;
use crate::database::users::{get_role, list_users};
use crate::error::BotError;
use crate::gateway::types::ReplyMarkup;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{menu, text};

/// /make_me_admin. Open self-service grant; meant for bootstrapping a
/// fresh deployment, not for production policy.
pub async fn make_me_admin(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    add_admin(&state.db, user_id).await?;
    let role = get_role(&state.db, user_id).await?;
    gw.send_message(
        chat_id,
        text::MSG_NOW_ADMIN,
        Some(ReplyMarkup::Reply(menu::main_menu(role, true))),
    )
    .await?;
    Ok(())
}

pub async fn manage_users(
    gw: &TelegramClient,
    state: &AppState,
    chat_id: i64,
) -> Result<(), BotError> {
    let users = list_users(&state.db).await?;
    let lines: Vec<String> = users.iter().map(text::user_summary_line).collect();
    gw.send_message(chat_id, &lines.join("\n"), None).await?;
    Ok(())
}

pub async fn manage_products(
    gw: &TelegramClient,
    state: &AppState,
    chat_id: i64,
) -> Result<(), BotError> {
    let listings = all_products(&state.db).await?;
    if listings.is_empty() {
        gw.send_message(chat_id, text::MSG_NO_PRODUCTS_YET, None)
            .await?;
        return Ok(());
    }
    let lines: Vec<String> = listings.iter().map(text::admin_product_line).collect();
    gw.send_message(chat_id, &lines.join("\n"), None).await?;
    Ok(())
}

/// Prompts for an id and arms the matching admin wizard. All six
/// management buttons funnel through here.
pub async fn start_id_wizard(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
    kind: AdminIdKind,
) -> Result<(), BotError> {
    let prompt = match kind {
        AdminIdKind::AddAdmin | AdminIdKind::RemoveAdmin | AdminIdKind::BanUser
        | AdminIdKind::ChangeRole => text::PROMPT_USER_ID,
        AdminIdKind::DeleteProduct | AdminIdKind::EditProduct => text::PROMPT_PRODUCT_ID,
    };
    gw.send_message(chat_id, prompt, None).await?;
    state
        .sessions
        .set(user_id, PendingState::AdminAwaitId(kind))
        .await;
    Ok(())
}
