//! Every user-visible string in one place, plus the small formatters that
//! turn store rows into card captions and listing lines.

use crate::database::models::{CartItem, ContactRecord, Product, ProductListing, Role, SavedItem,
    User, UserSummary};

pub const SKIP_WORD: &str = "skip";

pub const ROLE_PROMPT: &str = "👋 Welcome! Are you here to buy or to sell?";
pub const MSG_WELCOME_BACK: &str = "👇 Here is your menu.";

pub const PROMPT_PROFILE_PHOTO: &str = "📷 Send a photo for your shop profile:";
pub const PROMPT_SHOP_NAME: &str = "🏪 What is your shop called?";
pub const PROMPT_BIO: &str = "📝 Send a short bio for your shop (or \"skip\"):";
pub const PROMPT_PHONE: &str = "📞 Send a contact phone number (or \"skip\"):";
pub const MSG_PROFILE_SAVED: &str = "✅ Profile saved.";
pub const MSG_PROFILE_UPDATED: &str = "✅ Profile updated.";
pub const MSG_PHOTO_UPDATED: &str = "✅ Profile photo updated.";

pub const PROMPT_PRODUCT_TITLE: &str = "🏷 Send the product title:";
pub const PROMPT_PRODUCT_DESC: &str = "📝 Send the product description:";
pub const PROMPT_PRODUCT_PRICE: &str = "💰 Send the price (a whole number):";
pub const PROMPT_PRODUCT_PHOTO: &str = "📷 Send a photo of the product:";
pub const MSG_PRODUCT_ADDED: &str = "✅ Product added.";
pub const MSG_PRODUCT_UPDATED: &str = "✅ Product updated.";
pub const MSG_PRODUCT_DELETED: &str = "🗑 Product deleted.";
pub const PROMPT_CHOOSE_FIELD: &str = "✏️ Choose a field to edit:";

pub const PROMPT_USER_ID: &str = "Send the user id:";
pub const PROMPT_PRODUCT_ID: &str = "Send the product id:";
pub const PROMPT_NEW_ROLE: &str = "Send the new role (buyer or seller):";
pub const MSG_ADMIN_ADDED: &str = "✅ Admin added.";
pub const MSG_ADMIN_REMOVED: &str = "✅ Admin removed.";
pub const MSG_USER_BANNED: &str = "🚫 User banned.";
pub const MSG_ROLE_UPDATED: &str = "✅ Role updated.";
pub const MSG_NOW_ADMIN: &str = "🛡 You are now an admin.";

pub const ERR_SELLERS_ONLY: &str = "🏪 This action is for sellers only.";
pub const ERR_NEED_PHOTO: &str = "Please send a photo.";
pub const ERR_NEED_TEXT: &str = "Please send text.";
pub const ERR_BAD_PRICE: &str = "That doesn't look like a price. Send a whole number:";
pub const ERR_BAD_ID: &str = "❌ That is not a valid id.";
pub const ERR_BAD_ROLE: &str = "❌ Unknown role.";
pub const ERR_STORE: &str = "Something went wrong, please try again.";

pub const MSG_NO_PRODUCTS_YET: &str = "No products yet.";
pub const MSG_NO_OWN_PRODUCTS: &str = "You have no products yet.";
pub const MSG_LATER_EMPTY: &str = "⭐ Nothing saved for later.";
pub const MSG_CART_EMPTY: &str = "🛒 Your cart is empty.";
pub const MSG_HISTORY_EMPTY: &str = "📜 No contacts yet.";
pub const HISTORY_HEADER: &str = "📜 Recent seller contacts:";

pub const CB_SAVED: &str = "⭐ Saved for later";
pub const CB_ALREADY_SAVED: &str = "Already saved";
pub const CB_ADDED_TO_CART: &str = "🛒 Added to cart";
pub const CB_REMOVED: &str = "Removed";
pub const CB_MOVED_TO_CART: &str = "Moved to cart";
pub const CB_GONE: &str = "That item is gone.";
pub const CB_NOT_ALLOWED: &str = "Not allowed.";
pub const CB_DELETED_CAPTION: &str = "🗑 Deleted.";
pub const MSG_CONTACT_SELLER: &str = "📞 Reach the seller here:";
pub const MSG_NO_SELLER_HANDLE: &str =
    "The seller has no public username, so there is no chat link.";

pub fn role_confirmed(role: Role) -> String {
    match role {
        Role::Buyer => "✅ You're set up as a buyer.".to_string(),
        Role::Seller => "✅ You're set up as a seller.".to_string(),
    }
}

pub fn echo(input: &str) -> String {
    format!("You said:\n{input}")
}

fn seller_line(username: Option<&str>) -> String {
    match username {
        Some(u) => format!("\n👤 Seller: @{u}"),
        None => String::new(),
    }
}

pub fn product_card(listing: &ProductListing) -> String {
    format!(
        "🛍 {}\n{}\n💰 Price: {}{}",
        listing.title,
        listing.description,
        listing.price,
        seller_line(listing.seller_username.as_deref()),
    )
}

/// Card for the seller's own listing; includes the id so the owner can
/// reference it in admin flows.
pub fn own_product_card(product: &Product) -> String {
    format!(
        "🛍 {} (#{})\n{}\n💰 Price: {}",
        product.title, product.id, product.description, product.price,
    )
}

pub fn saved_card(item: &SavedItem) -> String {
    format!(
        "🛍 {}\n{}\n💰 Price: {}",
        item.title, item.description, item.price,
    )
}

pub fn cart_card(item: &CartItem) -> String {
    format!(
        "🛍 {}\n{}\n💰 Price: {}{}",
        item.title,
        item.description,
        item.price,
        seller_line(item.seller_username.as_deref()),
    )
}

pub fn cart_total_line(total: i64) -> String {
    format!("💰 Cart total: {total}")
}

pub fn profile_caption(user: &User, product_count: i64) -> String {
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    let handle = match user.username.as_deref() {
        Some(u) => format!("@{u}"),
        None => "-".to_string(),
    };
    format!(
        "🏪 {}\n👤 {}\n📝 {}\n📞 {}\n📦 Products: {}",
        field(&user.shop_name),
        handle,
        field(&user.bio),
        field(&user.phone),
        product_count,
    )
}

/// Drops the sub-second part and the timezone suffix of an RFC 3339 stamp.
pub fn pretty_timestamp(stamp: &str) -> String {
    stamp
        .split('.')
        .next()
        .unwrap_or(stamp)
        .replace('T', " ")
}

pub fn history_line(record: &ContactRecord) -> String {
    let seller = match record.seller_username.as_deref() {
        Some(u) => format!("@{u}"),
        None => "unknown seller".to_string(),
    };
    format!(
        "• {} — {} ({})",
        record.title,
        seller,
        pretty_timestamp(&record.timestamp),
    )
}

pub fn user_summary_line(user: &UserSummary) -> String {
    let handle = match user.username.as_deref() {
        Some(u) => format!("@{u}"),
        None => "-".to_string(),
    };
    let role = user.role.as_deref().unwrap_or("none");
    let badge = if user.is_admin { " 🛡" } else { "" };
    format!("{} — {} — {}{}", user.telegram_id, handle, role, badge)
}

pub fn admin_product_line(listing: &ProductListing) -> String {
    let seller = match listing.seller_username.as_deref() {
        Some(u) => format!("@{u}"),
        None => format!("id {}", listing.seller_id),
    };
    format!(
        "#{} {} — 💰 {} — {}",
        listing.id, listing.title, listing.price, seller,
    )
}

pub fn contact_link(username: &str) -> String {
    format!("https://t.me/{username}")
}
