//! Buyer-side listings: browse, saved for later, and the cart.

use crate::database::{cart, later, products};
use crate::error::BotError;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{buttons, text};

pub async fn browse(gw: &TelegramClient, state: &AppState, chat_id: i64) -> Result<(), BotError> {
    let listings = products::all_products(&state.db).await?;
    if listings.is_empty() {
        gw.send_message(chat_id, text::MSG_NO_PRODUCTS_YET, None)
            .await?;
        return Ok(());
    }
    for listing in listings {
        gw.send_photo(
            chat_id,
            &listing.photo,
            Some(&text::product_card(&listing)),
            Some(buttons::browse_buttons(listing.id)),
        )
        .await?;
    }
    Ok(())
}

pub async fn saved(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    let items = later::items(&state.db, user_id).await?;
    if items.is_empty() {
        gw.send_message(chat_id, text::MSG_LATER_EMPTY, None).await?;
        return Ok(());
    }
    for item in items {
        gw.send_photo(
            chat_id,
            &item.photo,
            Some(&text::saved_card(&item)),
            Some(buttons::saved_buttons(item.entry_id)),
        )
        .await?;
    }
    Ok(())
}

/// Cart cards followed by a total line. The total sums current prices, so
/// it moves when a seller re-prices something already in carts.
pub async fn cart(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    let items = cart::items(&state.db, user_id).await?;
    if items.is_empty() {
        gw.send_message(chat_id, text::MSG_CART_EMPTY, None).await?;
        return Ok(());
    }
    let total: i64 = items.iter().map(|item| item.price).sum();
    for item in &items {
        gw.send_photo(
            chat_id,
            &item.photo,
            Some(&text::cart_card(item)),
            Some(buttons::cart_buttons(item.product_id)),
        )
        .await?;
    }
    gw.send_message(chat_id, &text::cart_total_line(total), None)
        .await?;
    Ok(())
}
