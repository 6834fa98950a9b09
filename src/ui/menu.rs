//! The persistent reply keyboard. Button labels double as the routing keys
//! for plain-text messages, so they live here as constants.

use crate::database::models::Role;
use crate::gateway::types::{KeyboardButton, ReplyKeyboardMarkup};

pub const BTN_PROFILE: &str = "👤 My Profile";
pub const BTN_ADD_PRODUCT: &str = "➕ Add Product";
pub const BTN_MY_PRODUCTS: &str = "📦 My Products";
pub const BTN_BROWSE: &str = "🛍 Browse Products";
pub const BTN_LATER: &str = "⭐ Saved for Later";
pub const BTN_CART: &str = "🛒 Cart";
pub const BTN_HISTORY: &str = "📜 History";

pub const BTN_MANAGE_USERS: &str = "👥 Manage Users";
pub const BTN_MANAGE_PRODUCTS: &str = "🛒 Manage Products";
pub const BTN_ADD_ADMIN: &str = "➕ Add Admin";
pub const BTN_REMOVE_ADMIN: &str = "❌ Remove Admin";
pub const BTN_BAN_USER: &str = "🚫 Ban User";
pub const BTN_CHANGE_ROLE: &str = "🔄 Change Role";
pub const BTN_DELETE_PRODUCT: &str = "🗑 Delete Product";
pub const BTN_EDIT_PRODUCT: &str = "✏️ Edit Product";

fn row(labels: &[&str]) -> Vec<KeyboardButton> {
    labels
        .iter()
        .map(|label| KeyboardButton {
            text: label.to_string(),
        })
        .collect()
}

/// Builds the reply keyboard for a user. Sellers get the shop rows, buyers
/// and role-less users get the shopping rows, admins get the management
/// rows appended on top of whichever base they have.
pub fn main_menu(role: Option<Role>, is_admin: bool) -> ReplyKeyboardMarkup {
    let mut keyboard = match role {
        Some(Role::Seller) => vec![
            row(&[BTN_PROFILE]),
            row(&[BTN_ADD_PRODUCT, BTN_MY_PRODUCTS]),
            row(&[BTN_BROWSE]),
        ],
        Some(Role::Buyer) | None => vec![
            row(&[BTN_BROWSE]),
            row(&[BTN_LATER, BTN_CART]),
            row(&[BTN_HISTORY]),
        ],
    };
    if is_admin {
        keyboard.push(row(&[BTN_MANAGE_USERS, BTN_MANAGE_PRODUCTS]));
        keyboard.push(row(&[BTN_ADD_ADMIN, BTN_REMOVE_ADMIN]));
        keyboard.push(row(&[BTN_BAN_USER, BTN_CHANGE_ROLE]));
        keyboard.push(row(&[BTN_DELETE_PRODUCT, BTN_EDIT_PRODUCT]));
    }
    ReplyKeyboardMarkup {
        keyboard,
        resize_keyboard: true,
    }
}
