//! Seller-side product commands: the add wizard and the own-products
//! listing with edit and delete buttons.

use crate::conversation::{AddProductStep, PendingState};
use crate::database::products::products_by_seller;
use crate::error::BotError;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{buttons, text};

pub async fn add(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    gw.send_message(chat_id, text::PROMPT_PRODUCT_TITLE, None)
        .await?;
    state
        .sessions
        .set(user_id, PendingState::AddProduct(AddProductStep::Title))
        .await;
    Ok(())
}

pub async fn mine(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
) -> Result<(), BotError> {
    let listings = products_by_seller(&state.db, user_id).await?;
    if listings.is_empty() {
        gw.send_message(chat_id, text::MSG_NO_OWN_PRODUCTS, None)
            .await?;
        return Ok(());
    }
    for product in listings {
        gw.send_photo(
            chat_id,
            &product.photo,
            Some(&text::own_product_card(&product)),
            Some(buttons::own_product_buttons(product.id)),
        )
        .await?;
    }
    Ok(())
}
