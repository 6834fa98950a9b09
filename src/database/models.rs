//! Row types shared across the entity store and the UI layer.

use sqlx::FromRow;

/// Marketplace role a user has chosen. Stored as lowercase text; `None`
/// in the row means the user has not picked one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
        }
    }

    /// Exact-token parse; anything but "buyer" or "seller" is rejected.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "buyer" => Some(Role::Buyer),
            "seller" => Some(Role::Seller),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub telegram_id: i64,
    pub role: Option<String>,
    pub username: Option<String>,
    pub profile_photo: Option<String>,
    pub shop_name: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
}

impl User {
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub seller_id: i64,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub photo: String,
}

/// Product joined with its seller's display handle, for browse renders.
#[derive(Debug, Clone, FromRow)]
pub struct ProductListing {
    pub id: i64,
    pub seller_id: i64,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub photo: String,
    pub seller_username: Option<String>,
}

/// A `later` row joined with its product. Rows whose product vanished are
/// dropped by the join and never surface here.
#[derive(Debug, Clone, FromRow)]
pub struct SavedItem {
    pub entry_id: i64,
    pub product_id: i64,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub photo: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct CartItem {
    pub entry_id: i64,
    pub product_id: i64,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub photo: String,
    pub seller_id: i64,
    pub seller_username: Option<String>,
}

/// One "contact seller" event as shown in the history listing.
#[derive(Debug, Clone, FromRow)]
pub struct ContactRecord {
    pub timestamp: String,
    pub title: String,
    pub seller_username: Option<String>,
}

/// Compact per-user row for the admin "manage users" listing.
#[derive(Debug, Clone, FromRow)]
pub struct UserSummary {
    pub telegram_id: i64,
    pub role: Option<String>,
    pub username: Option<String>,
    pub is_admin: bool,
}
