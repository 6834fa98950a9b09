//! User rows: registration, role, and the seller profile fields.

use sqlx::SqlitePool;

use super::models::{Role, User, UserSummary};

/// Registers the user if unseen and refreshes their handle. Runs on every
/// inbound event, so it must stay idempotent.
pub async fn upsert_user(
    pool: &SqlitePool,
    telegram_id: i64,
    username: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (telegram_id, username) VALUES (?1, ?2)
         ON CONFLICT (telegram_id) DO UPDATE SET username = excluded.username",
    )
    .bind(telegram_id)
    .bind(username)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_user(pool: &SqlitePool, telegram_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT telegram_id, role, username, profile_photo, shop_name, bio, phone
         FROM users WHERE telegram_id = ?1",
    )
    .bind(telegram_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_role(pool: &SqlitePool, telegram_id: i64) -> Result<Option<Role>, sqlx::Error> {
    let stored: Option<Option<String>> =
        sqlx::query_scalar("SELECT role FROM users WHERE telegram_id = ?1")
            .bind(telegram_id)
            .fetch_optional(pool)
            .await?;
    Ok(stored.flatten().as_deref().and_then(Role::parse))
}

/// Sets the role, creating the row if the user somehow skipped registration.
pub async fn set_role(pool: &SqlitePool, telegram_id: i64, role: Role) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (telegram_id, role) VALUES (?1, ?2)
         ON CONFLICT (telegram_id) DO UPDATE SET role = excluded.role",
    )
    .bind(telegram_id)
    .bind(role.as_str())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn set_profile_photo(
    pool: &SqlitePool,
    telegram_id: i64,
    file_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET profile_photo = ?1 WHERE telegram_id = ?2")
        .bind(file_id)
        .bind(telegram_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_shop_name(
    pool: &SqlitePool,
    telegram_id: i64,
    shop_name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET shop_name = ?1 WHERE telegram_id = ?2")
        .bind(shop_name)
        .bind(telegram_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_bio(pool: &SqlitePool, telegram_id: i64, bio: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET bio = ?1 WHERE telegram_id = ?2")
        .bind(bio)
        .bind(telegram_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_phone(pool: &SqlitePool, telegram_id: i64, phone: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET phone = ?1 WHERE telegram_id = ?2")
        .bind(phone)
        .bind(telegram_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Hard delete of the user row. Products and saved entries that point at
/// the id stay behind; listing joins hide them where it matters.
pub async fn delete_user(pool: &SqlitePool, telegram_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE telegram_id = ?1")
        .bind(telegram_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Every registered user with admin flag, for the management listing.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>(
        "SELECT u.telegram_id, u.role, u.username,
                (a.user_id IS NOT NULL) AS is_admin
         FROM users u LEFT JOIN admins a ON u.telegram_id = a.user_id
         ORDER BY u.telegram_id",
    )
    .fetch_all(pool)
    .await
}
