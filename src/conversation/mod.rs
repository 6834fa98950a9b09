//! Multi-step wizard engine. Every conversation flow is an explicit
//! [`PendingState`]; feeding it one input through [`advance`] yields the
//! replies, at most one store write, and the next state. No IO happens
//! here, which is what keeps the flows testable.

pub mod state;

pub use state::{
    AddProductStep, AdminIdKind, Followup, InfoStep, PendingState, ProductField, ProfileStep,
    StepInput, StepOutcome, StoreWrite,
};

use crate::database::models::Role;
use crate::ui::text;

/// Case-insensitive check for the "leave this field empty" sentinel.
pub fn is_skip(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(text::SKIP_WORD)
}

/// Prices are whole non-negative numbers; anything else re-prompts.
pub fn parse_price(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|p| *p >= 0)
}

fn reply(msg: &str) -> StepOutcome {
    StepOutcome {
        messages: vec![msg.to_string()],
        ..Default::default()
    }
}

fn reprompt(msg: &str, same: PendingState) -> StepOutcome {
    StepOutcome {
        messages: vec![msg.to_string()],
        next: Some(same),
        ..Default::default()
    }
}

fn trimmed_text(input: &StepInput) -> Option<&str> {
    input
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Runs one wizard step. The caller has already taken the state out of the
/// session map, so a step that neither re-prompts nor continues simply ends
/// the conversation.
pub fn advance(pending: PendingState, user_id: i64, input: &StepInput) -> StepOutcome {
    match pending {
        PendingState::AwaitingRoleChoice => role_choice(user_id, input),
        PendingState::FirstProfile(step) => first_profile(step, user_id, input),
        PendingState::ChangeProfilePhoto => change_photo(user_id, input),
        PendingState::EditProfileInfo(step) => edit_info(step, user_id, input),
        PendingState::AddProduct(step) => add_product(step, user_id, input),
        PendingState::EditProductField { field, product_id } => {
            edit_product_field(field, product_id, input)
        }
        PendingState::AdminAwaitId(kind) => admin_id(kind, input),
        PendingState::AdminAwaitRole { target } => admin_role(target, input),
    }
}

fn role_choice(user_id: i64, input: &StepInput) -> StepOutcome {
    let Some(word) = trimmed_text(input) else {
        return StepOutcome {
            followup: Some(Followup::RolePrompt),
            next: Some(PendingState::AwaitingRoleChoice),
            ..Default::default()
        };
    };
    match Role::parse(&word.to_lowercase()) {
        Some(role) => StepOutcome {
            messages: vec![text::role_confirmed(role)],
            write: Some(StoreWrite::SetRole {
                user: user_id,
                role,
            }),
            followup: Some(Followup::MainMenu),
            ..Default::default()
        },
        None => StepOutcome {
            followup: Some(Followup::RolePrompt),
            next: Some(PendingState::AwaitingRoleChoice),
            ..Default::default()
        },
    }
}

fn first_profile(step: ProfileStep, user_id: i64, input: &StepInput) -> StepOutcome {
    match step {
        ProfileStep::Photo => match &input.photo {
            Some(file_id) => StepOutcome {
                messages: vec![text::PROMPT_SHOP_NAME.to_string()],
                write: Some(StoreWrite::ProfilePhoto {
                    user: user_id,
                    file_id: file_id.clone(),
                }),
                next: Some(PendingState::FirstProfile(ProfileStep::ShopName)),
                ..Default::default()
            },
            None => reprompt(
                text::ERR_NEED_PHOTO,
                PendingState::FirstProfile(ProfileStep::Photo),
            ),
        },
        ProfileStep::ShopName => match trimmed_text(input) {
            Some(name) => StepOutcome {
                messages: vec![text::PROMPT_BIO.to_string()],
                write: (!is_skip(name)).then(|| StoreWrite::ShopName {
                    user: user_id,
                    value: name.to_string(),
                }),
                next: Some(PendingState::FirstProfile(ProfileStep::Bio)),
                ..Default::default()
            },
            None => reprompt(
                text::ERR_NEED_TEXT,
                PendingState::FirstProfile(ProfileStep::ShopName),
            ),
        },
        ProfileStep::Bio => match trimmed_text(input) {
            Some(bio) => {
                let write = if is_skip(bio) {
                    None
                } else {
                    Some(StoreWrite::Bio {
                        user: user_id,
                        value: bio.to_string(),
                    })
                };
                StepOutcome {
                    messages: vec![text::PROMPT_PHONE.to_string()],
                    write,
                    next: Some(PendingState::FirstProfile(ProfileStep::Phone)),
                    ..Default::default()
                }
            }
            None => reprompt(
                text::ERR_NEED_TEXT,
                PendingState::FirstProfile(ProfileStep::Bio),
            ),
        },
        ProfileStep::Phone => match trimmed_text(input) {
            Some(phone) => {
                let write = if is_skip(phone) {
                    None
                } else {
                    Some(StoreWrite::Phone {
                        user: user_id,
                        value: phone.to_string(),
                    })
                };
                StepOutcome {
                    messages: vec![text::MSG_PROFILE_SAVED.to_string()],
                    write,
                    ..Default::default()
                }
            }
            None => reprompt(
                text::ERR_NEED_TEXT,
                PendingState::FirstProfile(ProfileStep::Phone),
            ),
        },
    }
}

fn change_photo(user_id: i64, input: &StepInput) -> StepOutcome {
    match &input.photo {
        Some(file_id) => StepOutcome {
            messages: vec![text::MSG_PHOTO_UPDATED.to_string()],
            write: Some(StoreWrite::ProfilePhoto {
                user: user_id,
                file_id: file_id.clone(),
            }),
            ..Default::default()
        },
        None => reprompt(text::ERR_NEED_PHOTO, PendingState::ChangeProfilePhoto),
    }
}

fn edit_info(step: InfoStep, user_id: i64, input: &StepInput) -> StepOutcome {
    let Some(value) = trimmed_text(input) else {
        return reprompt(text::ERR_NEED_TEXT, PendingState::EditProfileInfo(step));
    };
    // "skip" keeps the stored value and moves on.
    let keep = is_skip(value);
    match step {
        InfoStep::ShopName => StepOutcome {
            messages: vec![text::PROMPT_BIO.to_string()],
            write: (!keep).then(|| StoreWrite::ShopName {
                user: user_id,
                value: value.to_string(),
            }),
            next: Some(PendingState::EditProfileInfo(InfoStep::Bio)),
            ..Default::default()
        },
        InfoStep::Bio => StepOutcome {
            messages: vec![text::PROMPT_PHONE.to_string()],
            write: (!keep).then(|| StoreWrite::Bio {
                user: user_id,
                value: value.to_string(),
            }),
            next: Some(PendingState::EditProfileInfo(InfoStep::Phone)),
            ..Default::default()
        },
        InfoStep::Phone => StepOutcome {
            messages: vec![text::MSG_PROFILE_UPDATED.to_string()],
            write: (!keep).then(|| StoreWrite::Phone {
                user: user_id,
                value: value.to_string(),
            }),
            ..Default::default()
        },
    }
}

fn add_product(step: AddProductStep, user_id: i64, input: &StepInput) -> StepOutcome {
    match step {
        AddProductStep::Title => match trimmed_text(input) {
            Some(title) => StepOutcome {
                messages: vec![text::PROMPT_PRODUCT_DESC.to_string()],
                next: Some(PendingState::AddProduct(AddProductStep::Description {
                    title: title.to_string(),
                })),
                ..Default::default()
            },
            None => reprompt(
                text::ERR_NEED_TEXT,
                PendingState::AddProduct(AddProductStep::Title),
            ),
        },
        AddProductStep::Description { title } => match trimmed_text(input) {
            Some(description) => StepOutcome {
                messages: vec![text::PROMPT_PRODUCT_PRICE.to_string()],
                next: Some(PendingState::AddProduct(AddProductStep::Price {
                    title,
                    description: description.to_string(),
                })),
                ..Default::default()
            },
            None => reprompt(
                text::ERR_NEED_TEXT,
                PendingState::AddProduct(AddProductStep::Description { title }),
            ),
        },
        AddProductStep::Price { title, description } => {
            match input.text.as_deref().and_then(parse_price) {
                Some(price) => StepOutcome {
                    messages: vec![text::PROMPT_PRODUCT_PHOTO.to_string()],
                    next: Some(PendingState::AddProduct(AddProductStep::Photo {
                        title,
                        description,
                        price,
                    })),
                    ..Default::default()
                },
                None => reprompt(
                    text::ERR_BAD_PRICE,
                    PendingState::AddProduct(AddProductStep::Price { title, description }),
                ),
            }
        }
        AddProductStep::Photo {
            title,
            description,
            price,
        } => match &input.photo {
            Some(file_id) => StepOutcome {
                messages: vec![text::MSG_PRODUCT_ADDED.to_string()],
                write: Some(StoreWrite::NewProduct {
                    seller: user_id,
                    title,
                    description,
                    price,
                    photo: file_id.clone(),
                }),
                ..Default::default()
            },
            None => reprompt(
                text::ERR_NEED_PHOTO,
                PendingState::AddProduct(AddProductStep::Photo {
                    title,
                    description,
                    price,
                }),
            ),
        },
    }
}

fn edit_product_field(field: ProductField, product_id: i64, input: &StepInput) -> StepOutcome {
    let same = PendingState::EditProductField { field, product_id };
    let write = match field {
        ProductField::Title => match trimmed_text(input) {
            Some(value) => StoreWrite::ProductTitle {
                product: product_id,
                value: value.to_string(),
            },
            None => return reprompt(text::ERR_NEED_TEXT, same),
        },
        ProductField::Description => match trimmed_text(input) {
            Some(value) => StoreWrite::ProductDescription {
                product: product_id,
                value: value.to_string(),
            },
            None => return reprompt(text::ERR_NEED_TEXT, same),
        },
        ProductField::Price => match input.text.as_deref().and_then(parse_price) {
            Some(value) => StoreWrite::ProductPrice {
                product: product_id,
                value,
            },
            None => return reprompt(text::ERR_BAD_PRICE, same),
        },
        ProductField::Photo => match &input.photo {
            Some(file_id) => StoreWrite::ProductPhoto {
                product: product_id,
                value: file_id.clone(),
            },
            None => return reprompt(text::ERR_NEED_PHOTO, same),
        },
    };
    StepOutcome {
        messages: vec![text::MSG_PRODUCT_UPDATED.to_string()],
        write: Some(write),
        ..Default::default()
    }
}

/// Admin id steps abort on bad input instead of re-prompting: the admin is
/// at a menu, not trapped in a flow.
fn admin_id(kind: AdminIdKind, input: &StepInput) -> StepOutcome {
    let Some(id) = trimmed_text(input).and_then(|t| t.parse::<i64>().ok()) else {
        return reply(text::ERR_BAD_ID);
    };
    match kind {
        AdminIdKind::AddAdmin => StepOutcome {
            messages: vec![text::MSG_ADMIN_ADDED.to_string()],
            write: Some(StoreWrite::GrantAdmin { user: id }),
            ..Default::default()
        },
        AdminIdKind::RemoveAdmin => StepOutcome {
            messages: vec![text::MSG_ADMIN_REMOVED.to_string()],
            write: Some(StoreWrite::RevokeAdmin { user: id }),
            ..Default::default()
        },
        AdminIdKind::BanUser => StepOutcome {
            messages: vec![text::MSG_USER_BANNED.to_string()],
            write: Some(StoreWrite::BanUser { user: id }),
            ..Default::default()
        },
        AdminIdKind::ChangeRole => StepOutcome {
            messages: vec![text::PROMPT_NEW_ROLE.to_string()],
            next: Some(PendingState::AdminAwaitRole { target: id }),
            ..Default::default()
        },
        AdminIdKind::DeleteProduct => StepOutcome {
            messages: vec![text::MSG_PRODUCT_DELETED.to_string()],
            write: Some(StoreWrite::DeleteProduct { product: id }),
            ..Default::default()
        },
        AdminIdKind::EditProduct => StepOutcome {
            followup: Some(Followup::ProductFieldMenu {
                product_id: id,
                admin: true,
            }),
            ..Default::default()
        },
    }
}

/// Same abort-on-bad-input rule as the id step.
fn admin_role(target: i64, input: &StepInput) -> StepOutcome {
    let role = trimmed_text(input).and_then(|t| Role::parse(&t.to_lowercase()));
    match role {
        Some(role) => StepOutcome {
            messages: vec![text::MSG_ROLE_UPDATED.to_string()],
            write: Some(StoreWrite::SetRole { user: target, role }),
            ..Default::default()
        },
        None => reply(text::ERR_BAD_ROLE),
    }
}
