//! The recent seller-contacts listing.

use crate::database::history::recent_contacts;
use crate::error::BotError;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::text;

pub async fn show(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    let records = recent_contacts(&state.db, user_id).await?;
    if records.is_empty() {
        gw.send_message(chat_id, text::MSG_HISTORY_EMPTY, None)
            .await?;
        return Ok(());
    }
    let mut lines = vec![text::HISTORY_HEADER.to_string()];
    lines.extend(records.iter().map(text::history_line));
    gw.send_message(chat_id, &lines.join("\n"), None).await?;
    Ok(())
}
