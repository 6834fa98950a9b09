//! Inline keyboard builders. Callback payloads always go through
//! [`Action::encode`] so the button side and the parser side cannot drift.

use crate::conversation::ProductField;
use crate::database::models::Role;
use crate::gateway::types::{InlineKeyboardButton, InlineKeyboardMarkup, ReplyMarkup};
use crate::interactions::ids::Action;

fn cb(text: &str, data: String) -> InlineKeyboardButton {
    InlineKeyboardButton {
        text: text.to_string(),
        callback_data: Some(data),
        url: None,
    }
}

fn inline(rows: Vec<Vec<InlineKeyboardButton>>) -> ReplyMarkup {
    ReplyMarkup::Inline(InlineKeyboardMarkup {
        inline_keyboard: rows,
    })
}

pub fn role_buttons() -> ReplyMarkup {
    inline(vec![vec![
        cb("🛒 Buyer", Action::ChooseRole(Role::Buyer).encode()),
        cb("🏪 Seller", Action::ChooseRole(Role::Seller).encode()),
    ]])
}

pub fn profile_actions() -> ReplyMarkup {
    inline(vec![
        vec![cb("📷 Change Photo", Action::ChangeProfilePhoto.encode())],
        vec![cb("✏️ Edit Info", Action::EditProfileInfo.encode())],
    ])
}

/// Edit and delete controls attached to a seller's own product card.
pub fn own_product_buttons(product_id: i64) -> ReplyMarkup {
    inline(vec![vec![
        cb("✏️ Edit", Action::EditMenu(product_id).encode()),
        cb("🗑 Delete", Action::Delete(product_id).encode()),
    ]])
}

pub fn browse_buttons(product_id: i64) -> ReplyMarkup {
    inline(vec![vec![
        cb("⭐ Save for later", Action::LaterAdd(product_id).encode()),
        cb("🛒 Add to cart", Action::CartAdd(product_id).encode()),
    ]])
}

/// Controls on a saved-for-later card; both take the later entry id, not
/// the product id.
pub fn saved_buttons(entry_id: i64) -> ReplyMarkup {
    inline(vec![vec![
        cb("🛒 Move to cart", Action::LaterToCart(entry_id).encode()),
        cb("❌ Remove", Action::LaterDel(entry_id).encode()),
    ]])
}

pub fn cart_buttons(product_id: i64) -> ReplyMarkup {
    inline(vec![vec![cb(
        "📞 Contact seller",
        Action::Contact(product_id).encode(),
    )]])
}

pub fn field_menu(product_id: i64, admin: bool) -> ReplyMarkup {
    let field = |label: &str, field: ProductField| {
        cb(
            label,
            Action::EditField {
                field,
                product_id,
                admin,
            }
            .encode(),
        )
    };
    inline(vec![
        vec![
            field("🏷 Title", ProductField::Title),
            field("📝 Description", ProductField::Description),
        ],
        vec![
            field("💰 Price", ProductField::Price),
            field("📷 Photo", ProductField::Photo),
        ],
    ])
}

/// A single link-out button, used for the t.me seller chat link.
pub fn link_button(label: &str, url: &str) -> ReplyMarkup {
    inline(vec![vec![InlineKeyboardButton {
        text: label.to_string(),
        callback_data: None,
        url: Some(url.to_string()),
    }]])
}
