//! Telegram Bot API client.
//!
//! Thin typed wrapper over the HTTP API: every call POSTs a JSON body to
//! `/bot<token>/<method>` and unwraps the `ok`/`result` envelope.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::GatewayError;
use super::types::{Message, ReplyMarkup, Update};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

// Missing `Option` fields deserialize to `None` on their own; a `default`
// attribute here would force a `T: Default` bound onto every caller.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{TELEGRAM_API_BASE}/bot{token}"),
        }
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let parsed: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| GatewayError::Response(e.to_string()))?;

        if !parsed.ok {
            return Err(GatewayError::Api(
                parsed.description.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        parsed
            .result
            .ok_or_else(|| GatewayError::Response("missing result payload".to_string()))
    }

    /// Long-poll for new updates. `offset` must be one past the last
    /// confirmed update id.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>, GatewayError> {
        #[derive(Serialize)]
        struct GetUpdates {
            offset: i64,
            timeout: u64,
            allowed_updates: [&'static str; 2],
        }
        self.call(
            "getUpdates",
            &GetUpdates {
                offset,
                timeout: timeout_secs,
                allowed_updates: ["message", "callback_query"],
            },
        )
        .await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<Message, GatewayError> {
        #[derive(Serialize)]
        struct SendMessage<'a> {
            chat_id: i64,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            reply_markup: Option<ReplyMarkup>,
        }
        let sent = self
            .call(
                "sendMessage",
                &SendMessage {
                    chat_id,
                    text,
                    reply_markup,
                },
            )
            .await?;
        debug!(chat = chat_id, "message sent");
        Ok(sent)
    }

    /// `photo` is an opaque file id previously observed on an inbound message.
    pub async fn send_photo(
        &self,
        chat_id: i64,
        photo: &str,
        caption: Option<&str>,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<Message, GatewayError> {
        #[derive(Serialize)]
        struct SendPhoto<'a> {
            chat_id: i64,
            photo: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            caption: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            reply_markup: Option<ReplyMarkup>,
        }
        self.call(
            "sendPhoto",
            &SendPhoto {
                chat_id,
                photo,
                caption,
                reply_markup,
            },
        )
        .await
    }

    /// Show a toast on the client that pressed an inline button.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
    ) -> Result<bool, GatewayError> {
        #[derive(Serialize)]
        struct AnswerCallbackQuery<'a> {
            callback_query_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            text: Option<&'a str>,
        }
        self.call(
            "answerCallbackQuery",
            &AnswerCallbackQuery {
                callback_query_id,
                text,
            },
        )
        .await
    }

    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
    ) -> Result<(), GatewayError> {
        #[derive(Serialize)]
        struct EditMessageText<'a> {
            chat_id: i64,
            message_id: i64,
            text: &'a str,
        }
        // The API returns the edited Message (or True for inline messages);
        // neither payload is used here.
        let _: serde_json::Value = self
            .call(
                "editMessageText",
                &EditMessageText {
                    chat_id,
                    message_id,
                    text,
                },
            )
            .await?;
        Ok(())
    }

    pub async fn edit_message_caption(
        &self,
        chat_id: i64,
        message_id: i64,
        caption: &str,
    ) -> Result<(), GatewayError> {
        #[derive(Serialize)]
        struct EditMessageCaption<'a> {
            chat_id: i64,
            message_id: i64,
            caption: &'a str,
        }
        let _: serde_json::Value = self
            .call(
                "editMessageCaption",
                &EditMessageCaption {
                    chat_id,
                    message_id,
                    caption,
                },
            )
            .await?;
        Ok(())
    }
}
