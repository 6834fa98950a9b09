//! Update dispatch: one place that turns raw Telegram updates into command
//! runs, button handlers, and wizard steps.

use std::sync::Arc;

use tracing::{error, warn};

use crate::commands::{self, CaptionAction, Command};
use crate::conversation::{self, Followup, PendingState, StepInput, StoreWrite};
use crate::database::{admins, products, users};
use crate::error::BotError;
use crate::gateway::types::{CallbackQuery, Message, ReplyMarkup, Update};
use crate::gateway::TelegramClient;
use crate::interactions::ids::Action;
use crate::interactions::{product_handler, profile_handler, role_handler, shopping_handler};
use crate::model::AppState;
use crate::ui::{buttons, menu, text};

pub struct Handler {
    pub gateway: Arc<TelegramClient>,
    pub state: Arc<AppState>,
}

impl Handler {
    pub fn new(gateway: Arc<TelegramClient>, state: Arc<AppState>) -> Self {
        Handler { gateway, state }
    }

    pub async fn dispatch(&self, update: Update) {
        if let Some(message) = update.message {
            self.on_message(message).await;
        } else if let Some(cb) = update.callback_query {
            self.on_callback(cb).await;
        }
    }

    async fn on_message(&self, message: Message) {
        let Some(from) = message.from.clone() else {
            return;
        };
        let user_id = from.id;
        let chat_id = message.chat.id;
        if let Err(err) = users::upsert_user(&self.state.db, user_id, from.username.as_deref()).await
        {
            error!(user_id, %err, "user upsert failed");
            return;
        }

        if let Some(text_body) = message.text.as_deref() {
            // A command or menu caption always wins over an armed wizard.
            if let Ok(command) = text_body.parse::<Command>() {
                self.state.sessions.clear(user_id).await;
                let result = match command {
                    Command::Start => {
                        commands::start::run(&self.gateway, &self.state, user_id, chat_id).await
                    }
                    Command::MakeMeAdmin => {
                        commands::admin::make_me_admin(&self.gateway, &self.state, user_id, chat_id)
                            .await
                    }
                };
                if let Err(err) = result {
                    error!(user_id, %err, "command failed");
                }
                return;
            }

            let role = match users::get_role(&self.state.db, user_id).await {
                Ok(role) => role,
                Err(err) => {
                    error!(user_id, %err, "role lookup failed");
                    return;
                }
            };
            let is_admin = match admins::is_admin(&self.state.db, user_id).await {
                Ok(flag) => flag,
                Err(err) => {
                    error!(user_id, %err, "admin lookup failed");
                    return;
                }
            };
            if let Some(action) = CaptionAction::resolve(text_body, is_admin) {
                self.state.sessions.clear(user_id).await;
                if let Err(err) = commands::run_caption(
                    &self.gateway,
                    &self.state,
                    user_id,
                    chat_id,
                    action,
                    role,
                )
                .await
                {
                    error!(user_id, %err, "caption command failed");
                }
                return;
            }
        }

        if let Some(pending) = self.state.sessions.take(user_id).await {
            let input = StepInput {
                text: message.text.clone(),
                photo: message.largest_photo().map(str::to_string),
            };
            self.run_step(pending, user_id, chat_id, input).await;
            return;
        }

        // No wizard, no command: echo for regular users, silence for
        // admins and for unrecognized slash commands.
        if let Some(text_body) = message.text.as_deref() {
            match admins::is_admin(&self.state.db, user_id).await {
                Ok(is_admin) => {
                    if commands::echoes_back(text_body, is_admin) {
                        if let Err(err) = self
                            .gateway
                            .send_message(chat_id, &text::echo(text_body), None)
                            .await
                        {
                            warn!(user_id, %err, "echo failed");
                        }
                    }
                }
                Err(err) => error!(user_id, %err, "admin lookup failed"),
            }
        }
    }

    async fn run_step(&self, pending: PendingState, user_id: i64, chat_id: i64, input: StepInput) {
        let outcome = conversation::advance(pending, user_id, &input);
        if let Some(write) = outcome.write {
            if let Err(err) = self.apply_write(write).await {
                error!(user_id, %err, "wizard write failed");
                if let Err(err) = self.gateway.send_message(chat_id, text::ERR_STORE, None).await {
                    warn!(user_id, %err, "error notice failed");
                }
                return;
            }
        }
        for line in &outcome.messages {
            if let Err(err) = self.gateway.send_message(chat_id, line, None).await {
                warn!(user_id, %err, "wizard reply failed");
            }
        }
        if let Some(next) = outcome.next {
            self.state.sessions.set(user_id, next).await;
        }
        if let Some(followup) = outcome.followup {
            if let Err(err) = self.run_followup(followup, user_id, chat_id).await {
                error!(user_id, %err, "wizard followup failed");
            }
        }
    }

    async fn run_followup(
        &self,
        followup: Followup,
        user_id: i64,
        chat_id: i64,
    ) -> Result<(), BotError> {
        match followup {
            Followup::RolePrompt => {
                self.gateway
                    .send_message(chat_id, text::ROLE_PROMPT, Some(buttons::role_buttons()))
                    .await?;
            }
            Followup::MainMenu => {
                let role = users::get_role(&self.state.db, user_id).await?;
                let is_admin = admins::is_admin(&self.state.db, user_id).await?;
                self.gateway
                    .send_message(
                        chat_id,
                        text::MSG_WELCOME_BACK,
                        Some(ReplyMarkup::Reply(menu::main_menu(role, is_admin))),
                    )
                    .await?;
            }
            Followup::ProductFieldMenu { product_id, admin } => {
                self.gateway
                    .send_message(
                        chat_id,
                        text::PROMPT_CHOOSE_FIELD,
                        Some(buttons::field_menu(product_id, admin)),
                    )
                    .await?;
            }
        }
        Ok(())
    }

    async fn apply_write(&self, write: StoreWrite) -> Result<(), sqlx::Error> {
        let db = &self.state.db;
        match write {
            StoreWrite::ProfilePhoto { user, file_id } => {
                users::set_profile_photo(db, user, &file_id).await
            }
            StoreWrite::ShopName { user, value } => users::set_shop_name(db, user, &value).await,
            StoreWrite::Bio { user, value } => users::set_bio(db, user, &value).await,
            StoreWrite::Phone { user, value } => users::set_phone(db, user, &value).await,
            StoreWrite::NewProduct {
                seller,
                title,
                description,
                price,
                photo,
            } => products::insert_product(db, seller, &title, &description, price, &photo)
                .await
                .map(|_| ()),
            StoreWrite::ProductTitle { product, value } => {
                products::update_title(db, product, &value).await
            }
            StoreWrite::ProductDescription { product, value } => {
                products::update_description(db, product, &value).await
            }
            StoreWrite::ProductPrice { product, value } => {
                products::update_price(db, product, value).await
            }
            StoreWrite::ProductPhoto { product, value } => {
                products::update_photo(db, product, &value).await
            }
            StoreWrite::SetRole { user, role } => users::set_role(db, user, role).await,
            StoreWrite::GrantAdmin { user } => admins::add_admin(db, user).await,
            StoreWrite::RevokeAdmin { user } => admins::remove_admin(db, user).await,
            StoreWrite::BanUser { user } => users::delete_user(db, user).await,
            StoreWrite::DeleteProduct { product } => products::delete_product(db, product).await,
        }
    }

    async fn on_callback(&self, cb: CallbackQuery) {
        let Some(data) = cb.data.clone() else {
            return;
        };
        let Some(action) = Action::parse(&data) else {
            warn!(user_id = cb.from.id, %data, "unrecognized callback payload");
            if let Err(err) = self.gateway.answer_callback_query(&cb.id, None).await {
                warn!(%err, "callback ack failed");
            }
            return;
        };
        // Button presses on an expired card still carry no message.
        let Some(chat_id) = cb.message.as_ref().map(|m| m.chat.id) else {
            if let Err(err) = self.gateway.answer_callback_query(&cb.id, None).await {
                warn!(%err, "callback ack failed");
            }
            return;
        };
        if let Err(err) = users::upsert_user(&self.state.db, cb.from.id, cb.from.username.as_deref())
            .await
        {
            error!(user_id = cb.from.id, %err, "user upsert failed");
            return;
        }
        let gw = &self.gateway;
        let state = &self.state;
        let result = match action {
            Action::ChooseRole(role) => {
                role_handler::choose_role(gw, state, &cb, chat_id, role).await
            }
            Action::ChangeProfilePhoto => {
                profile_handler::change_photo(gw, state, &cb, chat_id).await
            }
            Action::EditProfileInfo => profile_handler::edit_info(gw, state, &cb, chat_id).await,
            Action::EditMenu(product_id) => {
                product_handler::edit_menu(gw, state, &cb, chat_id, product_id).await
            }
            Action::Delete(product_id) => {
                product_handler::delete(gw, state, &cb, chat_id, product_id).await
            }
            Action::EditField {
                field, product_id, ..
            } => product_handler::edit_field(gw, state, &cb, chat_id, field, product_id).await,
            Action::LaterAdd(product_id) => {
                shopping_handler::later_add(gw, state, &cb, product_id).await
            }
            Action::LaterDel(entry_id) => {
                shopping_handler::later_del(gw, state, &cb, chat_id, entry_id).await
            }
            Action::LaterToCart(entry_id) => {
                shopping_handler::later_to_cart(gw, state, &cb, entry_id).await
            }
            Action::CartAdd(product_id) => {
                shopping_handler::cart_add(gw, state, &cb, product_id).await
            }
            Action::Contact(product_id) => {
                shopping_handler::contact(gw, state, &cb, chat_id, product_id).await
            }
        };
        if let Err(err) = result {
            error!(user_id = cb.from.id, %data, %err, "callback handler failed");
        }
    }
}
