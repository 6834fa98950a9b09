//! Buttons on browse, saved-for-later, and cart cards.

use crate::database::{cart, history, later, products};
use crate::error::BotError;
use crate::gateway::types::CallbackQuery;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{buttons, text};

pub async fn later_add(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    product_id: i64,
) -> Result<(), BotError> {
    if products::get_product(&state.db, product_id).await?.is_none() {
        gw.answer_callback_query(&cb.id, Some(text::CB_GONE)).await?;
        return Ok(());
    }
    let fresh = later::save(&state.db, cb.from.id, product_id).await?;
    let note = if fresh {
        text::CB_SAVED
    } else {
        text::CB_ALREADY_SAVED
    };
    gw.answer_callback_query(&cb.id, Some(note)).await?;
    Ok(())
}

/// Plain insert; pressing the button twice means two cart rows.
pub async fn cart_add(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    product_id: i64,
) -> Result<(), BotError> {
    if products::get_product(&state.db, product_id).await?.is_none() {
        gw.answer_callback_query(&cb.id, Some(text::CB_GONE)).await?;
        return Ok(());
    }
    cart::add(&state.db, cb.from.id, product_id).await?;
    gw.answer_callback_query(&cb.id, Some(text::CB_ADDED_TO_CART))
        .await?;
    Ok(())
}

pub async fn later_del(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
    entry_id: i64,
) -> Result<(), BotError> {
    later::remove(&state.db, entry_id).await?;
    if let Some(card) = &cb.message {
        gw.edit_message_caption(chat_id, card.message_id, text::CB_REMOVED)
            .await?;
    }
    gw.answer_callback_query(&cb.id, Some(text::CB_REMOVED))
        .await?;
    Ok(())
}

pub async fn later_to_cart(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    entry_id: i64,
) -> Result<(), BotError> {
    let Some(product_id) = later::product_id(&state.db, entry_id).await? else {
        gw.answer_callback_query(&cb.id, Some(text::CB_GONE)).await?;
        return Ok(());
    };
    cart::add(&state.db, cb.from.id, product_id).await?;
    later::remove(&state.db, entry_id).await?;
    gw.answer_callback_query(&cb.id, Some(text::CB_MOVED_TO_CART))
        .await?;
    Ok(())
}

/// Records the contact in history, then hands out a t.me deep link when
/// the seller has a public handle.
pub async fn contact(
    gw: &TelegramClient,
    state: &AppState,
    cb: &CallbackQuery,
    chat_id: i64,
    product_id: i64,
) -> Result<(), BotError> {
    let Some((seller_id, username)) = products::seller_of(&state.db, product_id).await? else {
        gw.answer_callback_query(&cb.id, Some(text::CB_GONE)).await?;
        return Ok(());
    };
    history::record_contact(&state.db, cb.from.id, product_id, seller_id).await?;
    gw.answer_callback_query(&cb.id, None).await?;
    match username {
        Some(handle) => {
            gw.send_message(
                chat_id,
                text::MSG_CONTACT_SELLER,
                Some(buttons::link_button("Open chat", &text::contact_link(&handle))),
            )
            .await?;
        }
        None => {
            gw.send_message(chat_id, text::MSG_NO_SELLER_HANDLE, None)
                .await?;
        }
    }
    Ok(())
}
