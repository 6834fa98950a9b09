//! Admin membership: a bare set of user ids with elevated capabilities.

use sqlx::SqlitePool;

pub async fn is_admin(pool: &SqlitePool, user_id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT user_id FROM admins WHERE user_id = ?1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Idempotent: granting an existing admin is a no-op.
pub async fn add_admin(pool: &SqlitePool, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO admins (user_id) VALUES (?1)")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Idempotent: revoking a non-admin is a no-op, never an error.
pub async fn remove_admin(pool: &SqlitePool, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM admins WHERE user_id = ?1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
