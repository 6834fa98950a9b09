//! Saved-for-later rows. Unlike the cart, saving is deduplicated at write
//! time: saving an already-saved product is a no-op.

use sqlx::SqlitePool;

use super::models::SavedItem;

/// Returns `true` if a new row was written, `false` if it already existed.
pub async fn save(pool: &SqlitePool, user_id: i64, product_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO later (user_id, product_id)
         SELECT ?1, ?2
         WHERE NOT EXISTS (SELECT 1 FROM later WHERE user_id = ?1 AND product_id = ?2)",
    )
    .bind(user_id)
    .bind(product_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn items(pool: &SqlitePool, user_id: i64) -> Result<Vec<SavedItem>, sqlx::Error> {
    sqlx::query_as::<_, SavedItem>(
        "SELECT l.id AS entry_id, p.id AS product_id, p.title, p.description,
                p.price, p.photo
         FROM later l
         JOIN products p ON l.product_id = p.id
         WHERE l.user_id = ?1
         ORDER BY l.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn remove(pool: &SqlitePool, entry_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM later WHERE id = ?1")
        .bind(entry_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Product id behind a later entry, if the entry still exists.
pub async fn product_id(pool: &SqlitePool, entry_id: i64) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT product_id FROM later WHERE id = ?1")
        .bind(entry_id)
        .fetch_optional(pool)
        .await
}
