//! The data side of the wizard engine: what the bot is waiting for from a
//! user, what one input did, and which store mutation it asked for.

use crate::database::models::Role;

/// What the next plain message from a user will be interpreted as. At most
/// one of these is armed per user; arming a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingState {
    /// Fresh user who has not picked buyer or seller yet.
    AwaitingRoleChoice,
    /// Seller setting up their profile for the first time.
    FirstProfile(ProfileStep),
    /// Replacing just the profile photo.
    ChangeProfilePhoto,
    /// Re-entering the text fields of an existing profile.
    EditProfileInfo(InfoStep),
    AddProduct(AddProductStep),
    EditProductField { field: ProductField, product_id: i64 },
    /// Admin typed a management button and owes us a numeric id.
    AdminAwaitId(AdminIdKind),
    /// Second step of the change-role flow: the id arrived, the role is next.
    AdminAwaitRole { target: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStep {
    Photo,
    ShopName,
    Bio,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoStep {
    ShopName,
    Bio,
    Phone,
}

/// Add-product wizard. Each step carries everything collected so far, so
/// the product row is written once, at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddProductStep {
    Title,
    Description {
        title: String,
    },
    Price {
        title: String,
        description: String,
    },
    Photo {
        title: String,
        description: String,
        price: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Title,
    Description,
    Price,
    Photo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminIdKind {
    AddAdmin,
    RemoveAdmin,
    BanUser,
    ChangeRole,
    DeleteProduct,
    EditProduct,
}

/// One inbound message, reduced to the parts the wizards care about.
/// `photo` is the file id of the largest size when the message had photos.
#[derive(Debug, Clone, Default)]
pub struct StepInput {
    pub text: Option<String>,
    pub photo: Option<String>,
}

impl StepInput {
    pub fn text(t: impl Into<String>) -> Self {
        StepInput {
            text: Some(t.into()),
            photo: None,
        }
    }

    pub fn photo(file_id: impl Into<String>) -> Self {
        StepInput {
            text: None,
            photo: Some(file_id.into()),
        }
    }
}

/// What feeding one input into a pending state produced. The caller sends
/// the messages, applies the write, re-arms `next`, then runs `followup`.
#[derive(Debug, Default)]
pub struct StepOutcome {
    pub messages: Vec<String>,
    pub write: Option<StoreWrite>,
    pub next: Option<PendingState>,
    pub followup: Option<Followup>,
}

/// A store mutation requested by a wizard step. Kept as data so the engine
/// stays pure and the handler owns the one place writes can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    ProfilePhoto { user: i64, file_id: String },
    ShopName { user: i64, value: String },
    Bio { user: i64, value: String },
    Phone { user: i64, value: String },
    NewProduct {
        seller: i64,
        title: String,
        description: String,
        price: i64,
        photo: String,
    },
    ProductTitle { product: i64, value: String },
    ProductDescription { product: i64, value: String },
    ProductPrice { product: i64, value: i64 },
    ProductPhoto { product: i64, value: String },
    SetRole { user: i64, role: Role },
    GrantAdmin { user: i64 },
    RevokeAdmin { user: i64 },
    BanUser { user: i64 },
    DeleteProduct { product: i64 },
}

/// A reply that needs buttons or fresh store reads, so the engine cannot
/// render it as plain text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    RolePrompt,
    MainMenu,
    ProductFieldMenu { product_id: i64, admin: bool },
}
