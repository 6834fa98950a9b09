//! Append-only log of "contact seller" actions. Never updated or deleted
//! by normal flows.

use chrono::Utc;
use sqlx::SqlitePool;

use super::models::ContactRecord;

/// How many contacts the history listing shows, most recent first.
pub const HISTORY_LIMIT: i64 = 20;

pub async fn record_contact(
    pool: &SqlitePool,
    user_id: i64,
    product_id: i64,
    seller_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO history (user_id, product_id, seller_id, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(user_id)
    .bind(product_id)
    .bind(seller_id)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;
    Ok(())
}

/// Most recent contacts first, capped at [`HISTORY_LIMIT`]. The join on
/// products drops records for deleted products.
pub async fn recent_contacts(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<ContactRecord>, sqlx::Error> {
    sqlx::query_as::<_, ContactRecord>(
        "SELECT h.timestamp, p.title, u.username AS seller_username
         FROM history h
         JOIN products p ON h.product_id = p.id
         LEFT JOIN users u ON h.seller_id = u.telegram_id
         WHERE h.user_id = ?1
         ORDER BY h.id DESC
         LIMIT ?2",
    )
    .bind(user_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await
}
