//! Callback payload codec: encode/parse agreement and the prefix
//! ambiguities that make ordering matter.

use bazaar_bot::conversation::ProductField;
use bazaar_bot::database::models::Role;
use bazaar_bot::interactions::ids::Action;

#[test]
fn exact_payloads_parse() {
    assert_eq!(Action::parse("role_buyer"), Some(Action::ChooseRole(Role::Buyer)));
    assert_eq!(
        Action::parse("role_seller"),
        Some(Action::ChooseRole(Role::Seller))
    );
    assert_eq!(
        Action::parse("change_profile_photo"),
        Some(Action::ChangeProfilePhoto)
    );
    assert_eq!(Action::parse("edit_profile_info"), Some(Action::EditProfileInfo));
}

#[test]
fn id_payloads_parse() {
    assert_eq!(Action::parse("delete_42"), Some(Action::Delete(42)));
    assert_eq!(Action::parse("later_add_7"), Some(Action::LaterAdd(7)));
    assert_eq!(Action::parse("later_del_7"), Some(Action::LaterDel(7)));
    assert_eq!(Action::parse("later_to_cart_7"), Some(Action::LaterToCart(7)));
    assert_eq!(Action::parse("cart_add_9"), Some(Action::CartAdd(9)));
    assert_eq!(Action::parse("contact_3"), Some(Action::Contact(3)));
}

#[test]
fn bare_edit_prefix_is_the_field_menu() {
    assert_eq!(Action::parse("edit_5"), Some(Action::EditMenu(5)));
}

#[test]
fn field_payloads_beat_the_bare_edit_prefix() {
    assert_eq!(
        Action::parse("edit_title_5"),
        Some(Action::EditField {
            field: ProductField::Title,
            product_id: 5,
            admin: false,
        })
    );
    assert_eq!(
        Action::parse("edit_price_5"),
        Some(Action::EditField {
            field: ProductField::Price,
            product_id: 5,
            admin: false,
        })
    );
}

#[test]
fn admin_field_payloads_keep_their_flag() {
    assert_eq!(
        Action::parse("admin_edit_photo_12"),
        Some(Action::EditField {
            field: ProductField::Photo,
            product_id: 12,
            admin: true,
        })
    );
}

#[test]
fn junk_payloads_parse_to_nothing() {
    assert_eq!(Action::parse(""), None);
    assert_eq!(Action::parse("delete_"), None);
    assert_eq!(Action::parse("delete_abc"), None);
    assert_eq!(Action::parse("frobnicate_1"), None);
    // A non-numeric tail must not fall back to a shorter prefix.
    assert_eq!(Action::parse("edit_title_x"), None);
}

#[test]
fn every_action_round_trips() {
    let actions = [
        Action::ChooseRole(Role::Buyer),
        Action::ChooseRole(Role::Seller),
        Action::ChangeProfilePhoto,
        Action::EditProfileInfo,
        Action::EditMenu(1),
        Action::Delete(2),
        Action::EditField {
            field: ProductField::Description,
            product_id: 3,
            admin: false,
        },
        Action::EditField {
            field: ProductField::Description,
            product_id: 3,
            admin: true,
        },
        Action::LaterAdd(4),
        Action::LaterDel(5),
        Action::LaterToCart(6),
        Action::CartAdd(7),
        Action::Contact(8),
    ];
    for action in actions {
        assert_eq!(Action::parse(&action.encode()), Some(action));
    }
}
