//! Edit and delete buttons on product cards. Every entry point re-checks
//! authorization against the store; button payloads are forgeable.

use crate::conversation::{PendingState, ProductField};
use crate::database::{admins, products};
use crate::error::BotError;
use crate::gateway::types::CallbackQuery;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{buttons, text};

/// Owner of the product, or any admin.
async fn may_modify(
    state: &AppState,
    product_id: i64,
    user_id: i64,
) -> Result<Option<bool>, BotError> {
    let Some(product) = products::get_product(&state.db, product_id).await? else {
        return Ok(None);
    };
    if product.seller_id == user_id {
        return Ok(Some(true));
    }
    Ok(Some(admins::is_admin(&state.db, user_id).await?))
}

pub async fn delete(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
    product_id: i64,
) -> Result<(), BotError> {
    match may_modify(state, product_id, cb.from.id).await? {
        None => {
            gw.answer_callback_query(&cb.id, Some(text::CB_GONE)).await?;
        }
        Some(false) => {
            gw.answer_callback_query(&cb.id, Some(text::CB_NOT_ALLOWED))
                .await?;
        }
        Some(true) => {
            products::delete_product(&state.db, product_id).await?;
            // Rewrite the card in place so stale buttons disappear.
            if let Some(card) = &cb.message {
                gw.edit_message_caption(chat_id, card.message_id, text::CB_DELETED_CAPTION)
                    .await?;
            }
            gw.answer_callback_query(&cb.id, Some(text::MSG_PRODUCT_DELETED))
                .await?;
        }
    }
    Ok(())
}

pub async fn edit_menu(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
    product_id: i64,
) -> Result<(), BotError> {
    match may_modify(state, product_id, cb.from.id).await? {
        None => {
            gw.answer_callback_query(&cb.id, Some(text::CB_GONE)).await?;
        }
        Some(false) => {
            gw.answer_callback_query(&cb.id, Some(text::CB_NOT_ALLOWED))
                .await?;
        }
        Some(true) => {
            gw.answer_callback_query(&cb.id, None).await?;
            gw.send_message(
                chat_id,
                text::PROMPT_CHOOSE_FIELD,
                Some(buttons::field_menu(product_id, false)),
            )
            .await?;
        }
    }
    Ok(())
}

/// Arms the single-field edit wizard. The `admin` flag only changes which
/// payload family the press came from; authorization is re-derived here.
pub async fn edit_field(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
    field: ProductField,
    product_id: i64,
) -> Result<(), BotError> {
    match may_modify(state, product_id, cb.from.id).await? {
        None => {
            gw.answer_callback_query(&cb.id, Some(text::CB_GONE)).await?;
            return Ok(());
        }
        Some(false) => {
            gw.answer_callback_query(&cb.id, Some(text::CB_NOT_ALLOWED))
                .await?;
            return Ok(());
        }
        Some(true) => {}
    }
    state
        .sessions
        .set(cb.from.id, PendingState::EditProductField { field, product_id })
        .await;
    gw.answer_callback_query(&cb.id, None).await?;
    let prompt = match field {
        ProductField::Title => text::PROMPT_PRODUCT_TITLE,
        ProductField::Description => text::PROMPT_PRODUCT_DESC,
        ProductField::Price => text::PROMPT_PRODUCT_PRICE,
        ProductField::Photo => text::PROMPT_PRODUCT_PHOTO,
    };
    gw.send_message(chat_id, prompt, None).await?;
    Ok(())
}
