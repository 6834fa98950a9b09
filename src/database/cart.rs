//! Cart rows. The cart deliberately allows duplicates: adding the same
//! product twice yields two rows.

use sqlx::SqlitePool;

use super::models::CartItem;

pub async fn add(pool: &SqlitePool, user_id: i64, product_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO cart (user_id, product_id) VALUES (?1, ?2)")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Cart contents with product and seller details. The INNER JOIN on
/// products silently drops entries whose product was deleted.
pub async fn items(pool: &SqlitePool, user_id: i64) -> Result<Vec<CartItem>, sqlx::Error> {
    sqlx::query_as::<_, CartItem>(
        "SELECT c.id AS entry_id, p.id AS product_id, p.title, p.description,
                p.price, p.photo, p.seller_id, u.username AS seller_username
         FROM cart c
         JOIN products p ON c.product_id = p.id
         LEFT JOIN users u ON p.seller_id = u.telegram_id
         WHERE c.user_id = ?1
         ORDER BY c.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
