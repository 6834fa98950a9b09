//! Plain-message routing: slash commands and the reply-keyboard captions
//! that act like commands.

pub mod admin;
pub mod history;
pub mod products;
pub mod profile;
pub mod shopping;
pub mod start;

use std::str::FromStr;

use crate::conversation::AdminIdKind;
use crate::database::models::Role;
use crate::error::BotError;
use crate::gateway::TelegramClient;
use crate::model::AppState;
use crate::ui::{menu, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    MakeMeAdmin,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "/start" => Ok(Command::Start),
            "/make_me_admin" => Ok(Command::MakeMeAdmin),
            _ => Err(()),
        }
    }
}

/// A reply-keyboard caption resolved against the sender's admin flag.
/// Admin-only captions from a non-admin resolve to `None` and fall
/// through to the echo fallback, as if the button did not exist.
/// Seller-only captions resolve for everyone; `run_caption` rejects
/// non-sellers with a notice instead of hiding the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionAction {
    Profile,
    AddProduct,
    MyProducts,
    Browse,
    Later,
    Cart,
    History,
    ManageUsers,
    ManageProducts,
    AddAdmin,
    RemoveAdmin,
    BanUser,
    ChangeRole,
    DeleteProduct,
    EditProduct,
}

impl CaptionAction {
    pub fn resolve(caption: &str, is_admin: bool) -> Option<CaptionAction> {
        match caption {
            menu::BTN_PROFILE => Some(CaptionAction::Profile),
            menu::BTN_ADD_PRODUCT => Some(CaptionAction::AddProduct),
            menu::BTN_MY_PRODUCTS => Some(CaptionAction::MyProducts),
            menu::BTN_BROWSE => Some(CaptionAction::Browse),
            menu::BTN_LATER => Some(CaptionAction::Later),
            menu::BTN_CART => Some(CaptionAction::Cart),
            menu::BTN_HISTORY => Some(CaptionAction::History),
            menu::BTN_MANAGE_USERS if is_admin => Some(CaptionAction::ManageUsers),
            menu::BTN_MANAGE_PRODUCTS if is_admin => Some(CaptionAction::ManageProducts),
            menu::BTN_ADD_ADMIN if is_admin => Some(CaptionAction::AddAdmin),
            menu::BTN_REMOVE_ADMIN if is_admin => Some(CaptionAction::RemoveAdmin),
            menu::BTN_BAN_USER if is_admin => Some(CaptionAction::BanUser),
            menu::BTN_CHANGE_ROLE if is_admin => Some(CaptionAction::ChangeRole),
            menu::BTN_DELETE_PRODUCT if is_admin => Some(CaptionAction::DeleteProduct),
            menu::BTN_EDIT_PRODUCT if is_admin => Some(CaptionAction::EditProduct),
            _ => None,
        }
    }

    pub fn seller_only(self) -> bool {
        matches!(
            self,
            CaptionAction::Profile | CaptionAction::AddProduct | CaptionAction::MyProducts
        )
    }
}

/// Whether unmatched free text gets the echo acknowledgment. Admins are
/// never echoed, and neither are unrecognized slash commands.
pub fn echoes_back(text: &str, is_admin: bool) -> bool {
    !is_admin && !text.starts_with('/')
}

pub async fn run_caption(
    gw: &TelegramClient,
    state: &AppState,
    user_id: i64,
    chat_id: i64,
    action: CaptionAction,
    role: Option<Role>,
) -> Result<(), BotError> {
    if action.seller_only() && role != Some(Role::Seller) {
        gw.send_message(chat_id, text::ERR_SELLERS_ONLY, None).await?;
        return Ok(());
    }
    match action {
        CaptionAction::Profile => profile::show(gw, state, user_id, chat_id).await,
        CaptionAction::AddProduct => products::add(gw, state, user_id, chat_id).await,
        CaptionAction::MyProducts => products::mine(gw, state, user_id, chat_id).await,
        CaptionAction::Browse => shopping::browse(gw, state, chat_id).await,
        CaptionAction::Later => shopping::saved(gw, state, user_id, chat_id).await,
        CaptionAction::Cart => shopping::cart(gw, state, user_id, chat_id).await,
        CaptionAction::History => history::show(gw, state, user_id, chat_id).await,
        CaptionAction::ManageUsers => admin::manage_users(gw, state, chat_id).await,
        CaptionAction::ManageProducts => admin::manage_products(gw, state, chat_id).await,
        CaptionAction::AddAdmin => {
            admin::start_id_wizard(gw, state, user_id, chat_id, AdminIdKind::AddAdmin).await
        }
        CaptionAction::RemoveAdmin => {
            admin::start_id_wizard(gw, state, user_id, chat_id, AdminIdKind::RemoveAdmin).await
        }
        CaptionAction::BanUser => {
            admin::start_id_wizard(gw, state, user_id, chat_id, AdminIdKind::BanUser).await
        }
        CaptionAction::ChangeRole => {
            admin::start_id_wizard(gw, state, user_id, chat_id, AdminIdKind::ChangeRole).await
        }
        CaptionAction::DeleteProduct => {
            admin::start_id_wizard(gw, state, user_id, chat_id, AdminIdKind::DeleteProduct).await
        }
        CaptionAction::EditProduct => {
            admin::start_id_wizard(gw, state, user_id, chat_id, AdminIdKind::EditProduct).await
        }
    }
}
