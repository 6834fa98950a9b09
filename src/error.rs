use crate::gateway::GatewayError;

/// Everything a command or button handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("telegram: {0}")]
    Gateway(#[from] GatewayError),
    #[error("store: {0}")]
    Database(#[from] sqlx::Error),
}
