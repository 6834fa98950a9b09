use thiserror::Error;

/// Failures talking to the Telegram Bot API.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("malformed response: {0}")]
    Response(String),
    #[error("telegram api error: {0}")]
    Api(String),
}
