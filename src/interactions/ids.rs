//! Callback payload codec. Payloads are short prefixed strings with a
//! numeric tail; several prefixes share a stem, so parsing checks the most
//! specific prefix first.

use crate::conversation::ProductField;
use crate::database::models::Role;

pub const ROLE_BUYER: &str = "role_buyer";
pub const ROLE_SELLER: &str = "role_seller";
pub const CHANGE_PROFILE_PHOTO: &str = "change_profile_photo";
pub const EDIT_PROFILE_INFO: &str = "edit_profile_info";

pub const ADMIN_EDIT_TITLE: &str = "admin_edit_title_";
pub const ADMIN_EDIT_DESC: &str = "admin_edit_desc_";
pub const ADMIN_EDIT_PRICE: &str = "admin_edit_price_";
pub const ADMIN_EDIT_PHOTO: &str = "admin_edit_photo_";
pub const EDIT_TITLE: &str = "edit_title_";
pub const EDIT_DESC: &str = "edit_desc_";
pub const EDIT_PRICE: &str = "edit_price_";
pub const EDIT_PHOTO: &str = "edit_photo_";
pub const LATER_TO_CART: &str = "later_to_cart_";
pub const LATER_ADD: &str = "later_add_";
pub const LATER_DEL: &str = "later_del_";
pub const CART_ADD: &str = "cart_add_";
pub const CONTACT: &str = "contact_";
pub const DELETE: &str = "delete_";
// Bare "edit_" is a prefix of the field payloads, so it must parse last.
pub const EDIT_MENU: &str = "edit_";

/// Every button press the bot understands, decoded from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChooseRole(Role),
    ChangeProfilePhoto,
    EditProfileInfo,
    /// Open the field menu for a product the presser owns.
    EditMenu(i64),
    Delete(i64),
    EditField {
        field: ProductField,
        product_id: i64,
        admin: bool,
    },
    /// Save a browsed product for later; carries the product id.
    LaterAdd(i64),
    /// Drop a saved entry; carries the later entry id.
    LaterDel(i64),
    /// Move a saved entry into the cart; carries the later entry id.
    LaterToCart(i64),
    CartAdd(i64),
    Contact(i64),
}

fn tail(data: &str, prefix: &str) -> Option<i64> {
    data.strip_prefix(prefix)?.parse().ok()
}

impl Action {
    pub fn parse(data: &str) -> Option<Action> {
        match data {
            ROLE_BUYER => return Some(Action::ChooseRole(Role::Buyer)),
            ROLE_SELLER => return Some(Action::ChooseRole(Role::Seller)),
            CHANGE_PROFILE_PHOTO => return Some(Action::ChangeProfilePhoto),
            EDIT_PROFILE_INFO => return Some(Action::EditProfileInfo),
            _ => {}
        }
        let field_prefixes = [
            (ADMIN_EDIT_TITLE, ProductField::Title, true),
            (ADMIN_EDIT_DESC, ProductField::Description, true),
            (ADMIN_EDIT_PRICE, ProductField::Price, true),
            (ADMIN_EDIT_PHOTO, ProductField::Photo, true),
            (EDIT_TITLE, ProductField::Title, false),
            (EDIT_DESC, ProductField::Description, false),
            (EDIT_PRICE, ProductField::Price, false),
            (EDIT_PHOTO, ProductField::Photo, false),
        ];
        for (prefix, field, admin) in field_prefixes {
            if let Some(product_id) = tail(data, prefix) {
                return Some(Action::EditField {
                    field,
                    product_id,
                    admin,
                });
            }
        }
        let id_prefixes: [(&str, fn(i64) -> Action); 7] = [
            (LATER_TO_CART, Action::LaterToCart),
            (LATER_ADD, Action::LaterAdd),
            (LATER_DEL, Action::LaterDel),
            (CART_ADD, Action::CartAdd),
            (CONTACT, Action::Contact),
            (DELETE, Action::Delete),
            (EDIT_MENU, Action::EditMenu),
        ];
        for (prefix, build) in id_prefixes {
            if let Some(id) = tail(data, prefix) {
                return Some(build(id));
            }
        }
        None
    }

    pub fn encode(&self) -> String {
        match self {
            Action::ChooseRole(Role::Buyer) => ROLE_BUYER.to_string(),
            Action::ChooseRole(Role::Seller) => ROLE_SELLER.to_string(),
            Action::ChangeProfilePhoto => CHANGE_PROFILE_PHOTO.to_string(),
            Action::EditProfileInfo => EDIT_PROFILE_INFO.to_string(),
            Action::EditMenu(id) => format!("{EDIT_MENU}{id}"),
            Action::Delete(id) => format!("{DELETE}{id}"),
            Action::EditField {
                field,
                product_id,
                admin,
            } => {
                let prefix = match (field, admin) {
                    (ProductField::Title, true) => ADMIN_EDIT_TITLE,
                    (ProductField::Description, true) => ADMIN_EDIT_DESC,
                    (ProductField::Price, true) => ADMIN_EDIT_PRICE,
                    (ProductField::Photo, true) => ADMIN_EDIT_PHOTO,
                    (ProductField::Title, false) => EDIT_TITLE,
                    (ProductField::Description, false) => EDIT_DESC,
                    (ProductField::Price, false) => EDIT_PRICE,
                    (ProductField::Photo, false) => EDIT_PHOTO,
                };
                format!("{prefix}{product_id}")
            }
            Action::LaterAdd(id) => format!("{LATER_ADD}{id}"),
            Action::LaterDel(id) => format!("{LATER_DEL}{id}"),
            Action::LaterToCart(id) => format!("{LATER_TO_CART}{id}"),
            Action::CartAdd(id) => format!("{CART_ADD}{id}"),
            Action::Contact(id) => format!("{CONTACT}{id}"),
        }
    }
}
