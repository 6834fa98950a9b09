//! Reply-keyboard composition and caption gating.

use bazaar_bot::commands::{self, CaptionAction};
use bazaar_bot::database::models::Role;
use bazaar_bot::ui::menu;

fn labels(keyboard: &[Vec<bazaar_bot::gateway::types::KeyboardButton>]) -> Vec<Vec<&str>> {
    keyboard
        .iter()
        .map(|row| row.iter().map(|b| b.text.as_str()).collect())
        .collect()
}

#[test]
fn seller_menu_has_shop_rows() {
    let markup = menu::main_menu(Some(Role::Seller), false);
    assert_eq!(
        labels(&markup.keyboard),
        vec![
            vec![menu::BTN_PROFILE],
            vec![menu::BTN_ADD_PRODUCT, menu::BTN_MY_PRODUCTS],
            vec![menu::BTN_BROWSE],
        ]
    );
}

#[test]
fn buyer_menu_has_shopping_rows() {
    let markup = menu::main_menu(Some(Role::Buyer), false);
    assert_eq!(
        labels(&markup.keyboard),
        vec![
            vec![menu::BTN_BROWSE],
            vec![menu::BTN_LATER, menu::BTN_CART],
            vec![menu::BTN_HISTORY],
        ]
    );
}

#[test]
fn roleless_user_gets_the_buyer_layout() {
    let without_role = menu::main_menu(None, false);
    let buyer = menu::main_menu(Some(Role::Buyer), false);
    assert_eq!(labels(&without_role.keyboard), labels(&buyer.keyboard));
}

#[test]
fn admin_rows_append_to_either_base() {
    let markup = menu::main_menu(Some(Role::Seller), true);
    let rows = labels(&markup.keyboard);
    assert_eq!(rows.len(), 7);
    let admin_rows: Vec<Vec<&str>> = rows[3..].to_vec();
    assert_eq!(
        admin_rows,
        vec![
            vec![menu::BTN_MANAGE_USERS, menu::BTN_MANAGE_PRODUCTS],
            vec![menu::BTN_ADD_ADMIN, menu::BTN_REMOVE_ADMIN],
            vec![menu::BTN_BAN_USER, menu::BTN_CHANGE_ROLE],
            vec![menu::BTN_DELETE_PRODUCT, menu::BTN_EDIT_PRODUCT],
        ]
    );

    let buyer_admin = menu::main_menu(Some(Role::Buyer), true);
    assert_eq!(labels(&buyer_admin.keyboard).len(), 7);
}

// Seller captions resolve regardless of role; the runner rejects
// non-sellers with a notice instead of pretending the button is unknown.
#[test]
fn seller_captions_resolve_for_everyone() {
    for caption in [menu::BTN_PROFILE, menu::BTN_ADD_PRODUCT, menu::BTN_MY_PRODUCTS] {
        let action = CaptionAction::resolve(caption, false);
        assert!(action.is_some(), "{caption} must resolve");
        assert!(action.unwrap().seller_only());
    }
}

#[test]
fn only_the_shop_captions_are_seller_only() {
    assert!(!CaptionAction::Browse.seller_only());
    assert!(!CaptionAction::Cart.seller_only());
    assert!(!CaptionAction::History.seller_only());
    assert!(!CaptionAction::BanUser.seller_only());
}

#[test]
fn admin_captions_gate_on_flag() {
    assert_eq!(
        CaptionAction::resolve(menu::BTN_BAN_USER, true),
        Some(CaptionAction::BanUser)
    );
    assert_eq!(CaptionAction::resolve(menu::BTN_BAN_USER, false), None);
    assert_eq!(CaptionAction::resolve(menu::BTN_MANAGE_USERS, false), None);
}

#[test]
fn shopping_captions_are_open_to_everyone() {
    assert_eq!(
        CaptionAction::resolve(menu::BTN_BROWSE, false),
        Some(CaptionAction::Browse)
    );
    assert_eq!(
        CaptionAction::resolve(menu::BTN_HISTORY, false),
        Some(CaptionAction::History)
    );
}

#[test]
fn unknown_text_resolves_to_nothing() {
    assert_eq!(CaptionAction::resolve("hello there", true), None);
}

#[test]
fn echo_skips_admins_and_slash_commands() {
    assert!(commands::echoes_back("hello", false));
    assert!(!commands::echoes_back("hello", true));
    assert!(!commands::echoes_back("/foo", false));
    assert!(!commands::echoes_back("/foo", true));
}
