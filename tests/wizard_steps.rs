//! Conversation engine behavior: step ordering, re-prompt loops, the skip
//! sentinel, and the admin abort rule.

use bazaar_bot::conversation::{
    advance, AddProductStep, AdminIdKind, Followup, InfoStep, PendingState, ProductField,
    ProfileStep, StepInput, StoreWrite,
};
use bazaar_bot::database::models::Role;

const USER: i64 = 1001;

#[test]
fn add_product_accumulates_across_steps() {
    let out = advance(
        PendingState::AddProduct(AddProductStep::Title),
        USER,
        &StepInput::text("Teapot"),
    );
    assert!(out.write.is_none());
    let next = out.next.unwrap();

    let out = advance(next, USER, &StepInput::text("Cast iron, 1.2l"));
    let next = out.next.unwrap();

    let out = advance(next, USER, &StepInput::text("250"));
    let next = out.next.unwrap();

    let out = advance(next, USER, &StepInput::photo("file-abc"));
    assert!(out.next.is_none());
    assert_eq!(
        out.write,
        Some(StoreWrite::NewProduct {
            seller: USER,
            title: "Teapot".to_string(),
            description: "Cast iron, 1.2l".to_string(),
            price: 250,
            photo: "file-abc".to_string(),
        })
    );
}

#[test]
fn bad_price_reprompts_without_losing_progress() {
    let state = PendingState::AddProduct(AddProductStep::Price {
        title: "Teapot".to_string(),
        description: "desc".to_string(),
    });
    let out = advance(state.clone(), USER, &StepInput::text("cheap"));
    assert!(out.write.is_none());
    assert_eq!(out.next, Some(state.clone()));

    let out = advance(state.clone(), USER, &StepInput::text("-5"));
    assert_eq!(out.next, Some(state));
}

#[test]
fn photo_step_rejects_text() {
    let state = PendingState::FirstProfile(ProfileStep::Photo);
    let out = advance(state.clone(), USER, &StepInput::text("no photo, sorry"));
    assert!(out.write.is_none());
    assert_eq!(out.next, Some(state));
}

#[test]
fn first_profile_walks_photo_name_bio_phone() {
    let out = advance(
        PendingState::FirstProfile(ProfileStep::Photo),
        USER,
        &StepInput::photo("file-1"),
    );
    assert_eq!(
        out.write,
        Some(StoreWrite::ProfilePhoto {
            user: USER,
            file_id: "file-1".to_string(),
        })
    );
    assert_eq!(out.next, Some(PendingState::FirstProfile(ProfileStep::ShopName)));

    let out = advance(out.next.unwrap(), USER, &StepInput::text("Samovar House"));
    assert_eq!(out.next, Some(PendingState::FirstProfile(ProfileStep::Bio)));

    let out = advance(out.next.unwrap(), USER, &StepInput::text("Tea gear"));
    assert_eq!(out.next, Some(PendingState::FirstProfile(ProfileStep::Phone)));

    let out = advance(out.next.unwrap(), USER, &StepInput::text("+98-21-555"));
    assert_eq!(
        out.write,
        Some(StoreWrite::Phone {
            user: USER,
            value: "+98-21-555".to_string(),
        })
    );
    assert!(out.next.is_none());
}

#[test]
fn skip_keeps_the_stored_field() {
    let out = advance(
        PendingState::FirstProfile(ProfileStep::Bio),
        USER,
        &StepInput::text("SKIP"),
    );
    assert!(out.write.is_none());
    assert_eq!(out.next, Some(PendingState::FirstProfile(ProfileStep::Phone)));

    let out = advance(
        PendingState::EditProfileInfo(InfoStep::ShopName),
        USER,
        &StepInput::text("skip"),
    );
    assert!(out.write.is_none());
    assert_eq!(out.next, Some(PendingState::EditProfileInfo(InfoStep::Bio)));
}

#[test]
fn edit_field_writes_exactly_one_column() {
    let out = advance(
        PendingState::EditProductField {
            field: ProductField::Title,
            product_id: 9,
        },
        USER,
        &StepInput::text("New title"),
    );
    assert_eq!(
        out.write,
        Some(StoreWrite::ProductTitle {
            product: 9,
            value: "New title".to_string(),
        })
    );
    assert!(out.next.is_none());

    let out = advance(
        PendingState::EditProductField {
            field: ProductField::Photo,
            product_id: 9,
        },
        USER,
        &StepInput::photo("file-2"),
    );
    assert_eq!(
        out.write,
        Some(StoreWrite::ProductPhoto {
            product: 9,
            value: "file-2".to_string(),
        })
    );
}

#[test]
fn admin_id_step_aborts_on_garbage() {
    let out = advance(
        PendingState::AdminAwaitId(AdminIdKind::BanUser),
        USER,
        &StepInput::text("not a number"),
    );
    assert!(out.write.is_none());
    assert!(out.next.is_none(), "bad admin input must end the flow");
}

#[test]
fn admin_id_step_routes_per_kind() {
    let out = advance(
        PendingState::AdminAwaitId(AdminIdKind::AddAdmin),
        USER,
        &StepInput::text("555"),
    );
    assert_eq!(out.write, Some(StoreWrite::GrantAdmin { user: 555 }));

    let out = advance(
        PendingState::AdminAwaitId(AdminIdKind::DeleteProduct),
        USER,
        &StepInput::text("7"),
    );
    assert_eq!(out.write, Some(StoreWrite::DeleteProduct { product: 7 }));

    let out = advance(
        PendingState::AdminAwaitId(AdminIdKind::EditProduct),
        USER,
        &StepInput::text("7"),
    );
    assert!(out.write.is_none());
    assert_eq!(
        out.followup,
        Some(Followup::ProductFieldMenu {
            product_id: 7,
            admin: true,
        })
    );
}

#[test]
fn change_role_chains_into_the_role_step() {
    let out = advance(
        PendingState::AdminAwaitId(AdminIdKind::ChangeRole),
        USER,
        &StepInput::text("42"),
    );
    assert_eq!(out.next, Some(PendingState::AdminAwaitRole { target: 42 }));

    let out = advance(out.next.unwrap(), USER, &StepInput::text("Seller"));
    assert_eq!(
        out.write,
        Some(StoreWrite::SetRole {
            user: 42,
            role: Role::Seller,
        })
    );

    let out = advance(
        PendingState::AdminAwaitRole { target: 42 },
        USER,
        &StepInput::text("overlord"),
    );
    assert!(out.write.is_none());
    assert!(out.next.is_none(), "bad role token must end the flow");
}

#[test]
fn typed_role_choice_works_as_button_fallback() {
    let out = advance(PendingState::AwaitingRoleChoice, USER, &StepInput::text("buyer"));
    assert_eq!(
        out.write,
        Some(StoreWrite::SetRole {
            user: USER,
            role: Role::Buyer,
        })
    );
    assert_eq!(out.followup, Some(Followup::MainMenu));

    let out = advance(
        PendingState::AwaitingRoleChoice,
        USER,
        &StepInput::text("pirate"),
    );
    assert!(out.write.is_none());
    assert_eq!(out.followup, Some(Followup::RolePrompt));
    assert_eq!(out.next, Some(PendingState::AwaitingRoleChoice));
}
