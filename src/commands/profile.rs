//! The seller profile card, or the first-time setup wizard when there is
//! no profile photo yet.

use crate::conversation::{PendingState, ProfileStep};
use crate::database::products::count_by_seller;
use crate::database::users::get_user;
use crate::error::BotError;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{buttons, text};

pub async fn show(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    // The row exists: every inbound message upserts before dispatch.
    let Some(record) = get_user(&state.db, user_id).await? else {
        return Ok(());
    };
    match record.profile_photo.clone() {
        None => {
            gw.send_message(chat_id, text::PROMPT_PROFILE_PHOTO, None)
                .await?;
            state
                .sessions
                .set(user_id, PendingState::FirstProfile(ProfileStep::Photo))
                .await;
        }
        Some(photo) => {
            let count = count_by_seller(&state.db, user_id).await?;
            gw.send_photo(
                chat_id,
                &photo,
                Some(&text::profile_caption(&record, count)),
                Some(buttons::profile_actions()),
            )
            .await?;
        }
    }
    Ok(())
}
