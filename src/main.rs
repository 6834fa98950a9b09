use std::env;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bazaar_bot::gateway::TelegramClient;
use bazaar_bot::handler::Handler;
use bazaar_bot::{database, AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bazaar_bot=info")),
        )
        .init();

    let token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");
    let db_path = env::var("DATABASE_PATH").expect("DATABASE_PATH must be set");

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
        .expect("failed to open the database");
    database::init::create_schema(&pool)
        .await
        .expect("failed to create the schema");

    let gateway = Arc::new(TelegramClient::new(&token));
    let state = Arc::new(AppState::new(pool));
    let handler = Arc::new(Handler::new(gateway.clone(), state.clone()));
    info!("bot started");

    let mut offset: i64 = 0;
    loop {
        let updates = match gateway.get_updates(offset, 30).await {
            Ok(updates) => updates,
            Err(err) => {
                error!(%err, "getUpdates failed, retrying");
                tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                continue;
            }
        };
        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(user_id) = update_author(&update) else {
                continue;
            };
            let handler = handler.clone();
            let state = state.clone();
            tokio::spawn(async move {
                // Serialize per user so wizard steps apply in send order.
                let lock = state.sessions.user_lock(user_id).await;
                let _guard = lock.lock().await;
                handler.dispatch(update).await;
            });
        }
    }
}

fn update_author(update: &bazaar_bot::gateway::types::Update) -> Option<i64> {
    if let Some(message) = &update.message {
        return message.from.as_ref().map(|u| u.id);
    }
    update.callback_query.as_ref().map(|cb| cb.from.id)
}
