//! Idempotent schema creation, run once at process start.

use sqlx::SqlitePool;

pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            telegram_id INTEGER PRIMARY KEY,
            role TEXT,
            username TEXT,
            profile_photo TEXT,
            shop_name TEXT,
            bio TEXT,
            phone TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            seller_id INTEGER,
            title TEXT,
            description TEXT,
            price INTEGER,
            photo TEXT
        )",
    )
    .execute(pool)
    .await?;

    // No uniqueness constraint: carting the same product twice duplicates.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS cart (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            product_id INTEGER
        )",
    )
    .execute(pool)
    .await?;

    // Dedup for `later` happens at write time, not in the schema.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS later (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            product_id INTEGER
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            product_id INTEGER,
            seller_id INTEGER,
            timestamp TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS admins (
            user_id INTEGER PRIMARY KEY
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
