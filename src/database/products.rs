//! Product rows and the joined listings built from them.

use sqlx::SqlitePool;

use super::models::{Product, ProductListing};

/// Inserts a new product and returns its assigned id.
pub async fn insert_product(
    pool: &SqlitePool,
    seller_id: i64,
    title: &str,
    description: &str,
    price: i64,
    photo: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO products (seller_id, title, description, price, photo)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(seller_id)
    .bind(title)
    .bind(description)
    .bind(price)
    .bind(photo)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn get_product(pool: &SqlitePool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, seller_id, title, description, price, photo FROM products WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn products_by_seller(
    pool: &SqlitePool,
    seller_id: i64,
) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, seller_id, title, description, price, photo
         FROM products WHERE seller_id = ?1 ORDER BY id",
    )
    .bind(seller_id)
    .fetch_all(pool)
    .await
}

/// Every product with its seller's handle. Sellers that were banned still
/// list; the LEFT JOIN just leaves the handle empty.
pub async fn all_products(pool: &SqlitePool) -> Result<Vec<ProductListing>, sqlx::Error> {
    sqlx::query_as::<_, ProductListing>(
        "SELECT p.id, p.seller_id, p.title, p.description, p.price, p.photo,
                u.username AS seller_username
         FROM products p LEFT JOIN users u ON p.seller_id = u.telegram_id
         ORDER BY p.id",
    )
    .fetch_all(pool)
    .await
}

pub async fn count_by_seller(pool: &SqlitePool, seller_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE seller_id = ?1")
        .bind(seller_id)
        .fetch_one(pool)
        .await
}

/// The owning seller's id and handle, for the contact-seller flow.
pub async fn seller_of(
    pool: &SqlitePool,
    product_id: i64,
) -> Result<Option<(i64, Option<String>)>, sqlx::Error> {
    let row: Option<(i64, Option<String>)> = sqlx::query_as(
        "SELECT p.seller_id, u.username
         FROM products p LEFT JOIN users u ON p.seller_id = u.telegram_id
         WHERE p.id = ?1",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn update_title(pool: &SqlitePool, id: i64, title: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET title = ?1 WHERE id = ?2")
        .bind(title)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_description(
    pool: &SqlitePool,
    id: i64,
    description: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET description = ?1 WHERE id = ?2")
        .bind(description)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_price(pool: &SqlitePool, id: i64, price: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET price = ?1 WHERE id = ?2")
        .bind(price)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_photo(pool: &SqlitePool, id: i64, photo: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET photo = ?1 WHERE id = ?2")
        .bind(photo)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Immediate, irreversible delete. Cart/later/history rows that reference
/// the id are left behind; list joins drop them.
pub async fn delete_product(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM products WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
