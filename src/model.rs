//! Shared state handed to every handler: the store pool and the per-user
//! conversation sessions.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::{Mutex, RwLock};

use crate::conversation::PendingState;

/// Pending wizard states plus a per-user lock so one user's updates apply
/// in order even though updates are handled on separate tasks.
#[derive(Default)]
pub struct SessionMap {
    states: RwLock<HashMap<i64, PendingState>>,
    locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl SessionMap {
    /// Removes and returns the armed state. Taking rather than reading is
    /// what makes abandoned wizards disappear instead of lingering.
    pub async fn take(&self, user_id: i64) -> Option<PendingState> {
        self.states.write().await.remove(&user_id)
    }

    /// Arms a wizard state, replacing whatever was armed before.
    pub async fn set(&self, user_id: i64, state: PendingState) {
        self.states.write().await.insert(user_id, state);
    }

    pub async fn clear(&self, user_id: i64) {
        self.states.write().await.remove(&user_id);
    }

    /// The serialization lock for one user. Entries are never reaped; the
    /// map grows by one small allocation per distinct user.
    pub async fn user_lock(&self, user_id: i64) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .await
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

pub struct AppState {
    pub db: SqlitePool,
    pub sessions: SessionMap,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        AppState {
            db,
            sessions: SessionMap::default(),
        }
    }
}
