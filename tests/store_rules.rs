//! Store semantics against a real in-memory SQLite database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use bazaar_bot::database::models::Role;
use bazaar_bot::database::{admins, cart, history, init, later, products, users};

// One connection: each :memory: connection is its own database.
async fn pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init::create_schema(&pool).await.unwrap();
    pool
}

async fn seed_product(pool: &SqlitePool, seller: i64, title: &str, price: i64) -> i64 {
    products::insert_product(pool, seller, title, "desc", price, "file-1")
        .await
        .unwrap()
}

#[tokio::test]
async fn upsert_registers_once_and_refreshes_handle() {
    let pool = pool().await;
    users::upsert_user(&pool, 1, Some("ava")).await.unwrap();
    users::set_role(&pool, 1, Role::Seller).await.unwrap();
    users::upsert_user(&pool, 1, Some("ava_renamed")).await.unwrap();

    let user = users::get_user(&pool, 1).await.unwrap().unwrap();
    assert_eq!(user.username.as_deref(), Some("ava_renamed"));
    // Re-registration must not clobber the chosen role.
    assert_eq!(users::get_role(&pool, 1).await.unwrap(), Some(Role::Seller));
}

#[tokio::test]
async fn later_dedups_but_cart_duplicates() {
    let pool = pool().await;
    users::upsert_user(&pool, 2, Some("seller")).await.unwrap();
    let product = seed_product(&pool, 2, "Teapot", 100).await;

    assert!(later::save(&pool, 1, product).await.unwrap());
    assert!(!later::save(&pool, 1, product).await.unwrap());
    assert_eq!(later::items(&pool, 1).await.unwrap().len(), 1);

    cart::add(&pool, 1, product).await.unwrap();
    cart::add(&pool, 1, product).await.unwrap();
    let items = cart::items(&pool, 1).await.unwrap();
    assert_eq!(items.len(), 2);
    let total: i64 = items.iter().map(|i| i.price).sum();
    assert_eq!(total, 200);
}

#[tokio::test]
async fn deleting_a_product_hides_it_from_saved_and_cart_lists() {
    let pool = pool().await;
    users::upsert_user(&pool, 2, Some("seller")).await.unwrap();
    let keep = seed_product(&pool, 2, "Kept", 10).await;
    let gone = seed_product(&pool, 2, "Doomed", 20).await;

    later::save(&pool, 1, keep).await.unwrap();
    later::save(&pool, 1, gone).await.unwrap();
    cart::add(&pool, 1, gone).await.unwrap();

    products::delete_product(&pool, gone).await.unwrap();

    let saved = later::items(&pool, 1).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Kept");
    assert!(cart::items(&pool, 1).await.unwrap().is_empty());
}

#[tokio::test]
async fn listings_carry_the_seller_handle() {
    let pool = pool().await;
    users::upsert_user(&pool, 2, Some("shopkeeper")).await.unwrap();
    users::upsert_user(&pool, 3, None).await.unwrap();
    seed_product(&pool, 2, "Named", 10).await;
    seed_product(&pool, 3, "Anonymous", 20).await;

    let listings = products::all_products(&pool).await.unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].seller_username.as_deref(), Some("shopkeeper"));
    assert_eq!(listings[1].seller_username, None);

    let seller = products::seller_of(&pool, listings[0].id).await.unwrap();
    assert_eq!(seller, Some((2, Some("shopkeeper".to_string()))));
}

#[tokio::test]
async fn banned_sellers_products_stay_listed_without_a_handle() {
    let pool = pool().await;
    users::upsert_user(&pool, 2, Some("shopkeeper")).await.unwrap();
    let product = seed_product(&pool, 2, "Orphan", 10).await;

    users::delete_user(&pool, 2).await.unwrap();

    let listings = products::all_products(&pool).await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, product);
    assert_eq!(listings[0].seller_username, None);
}

#[tokio::test]
async fn field_updates_touch_one_column() {
    let pool = pool().await;
    let product = seed_product(&pool, 2, "Teapot", 100).await;

    products::update_price(&pool, product, 150).await.unwrap();
    let row = products::get_product(&pool, product).await.unwrap().unwrap();
    assert_eq!(row.price, 150);
    assert_eq!(row.title, "Teapot");
    assert_eq!(row.description, "desc");

    products::update_title(&pool, product, "Kettle").await.unwrap();
    let row = products::get_product(&pool, product).await.unwrap().unwrap();
    assert_eq!(row.title, "Kettle");
    assert_eq!(row.price, 150);
}

#[tokio::test]
async fn history_is_capped_and_newest_first() {
    let pool = pool().await;
    users::upsert_user(&pool, 2, Some("seller")).await.unwrap();
    let mut last = 0;
    for n in 0..25 {
        let product = seed_product(&pool, 2, &format!("Item {n}"), n).await;
        history::record_contact(&pool, 1, product, 2).await.unwrap();
        last = n;
    }

    let records = history::recent_contacts(&pool, 1).await.unwrap();
    assert_eq!(records.len() as i64, history::HISTORY_LIMIT);
    assert_eq!(records[0].title, format!("Item {last}"));
    assert_eq!(records[0].seller_username.as_deref(), Some("seller"));
}

#[tokio::test]
async fn contact_history_skips_deleted_products() {
    let pool = pool().await;
    users::upsert_user(&pool, 2, Some("seller")).await.unwrap();
    let product = seed_product(&pool, 2, "Ephemeral", 5).await;
    history::record_contact(&pool, 1, product, 2).await.unwrap();

    products::delete_product(&pool, product).await.unwrap();
    assert!(history::recent_contacts(&pool, 1).await.unwrap().is_empty());
}

#[tokio::test]
async fn admin_grants_are_idempotent() {
    let pool = pool().await;
    users::upsert_user(&pool, 1, Some("root")).await.unwrap();

    assert!(!admins::is_admin(&pool, 1).await.unwrap());
    admins::add_admin(&pool, 1).await.unwrap();
    admins::add_admin(&pool, 1).await.unwrap();
    assert!(admins::is_admin(&pool, 1).await.unwrap());

    let summary = users::list_users(&pool).await.unwrap();
    assert_eq!(summary.len(), 1);
    assert!(summary[0].is_admin);

    admins::remove_admin(&pool, 1).await.unwrap();
    admins::remove_admin(&pool, 1).await.unwrap();
    assert!(!admins::is_admin(&pool, 1).await.unwrap());
}

#[tokio::test]
async fn moving_later_to_cart_consumes_the_entry() {
    let pool = pool().await;
    users::upsert_user(&pool, 2, Some("seller")).await.unwrap();
    let product = seed_product(&pool, 2, "Teapot", 100).await;
    later::save(&pool, 1, product).await.unwrap();

    let entry = later::items(&pool, 1).await.unwrap()[0].entry_id;
    let pid = later::product_id(&pool, entry).await.unwrap().unwrap();
    cart::add(&pool, 1, pid).await.unwrap();
    later::remove(&pool, entry).await.unwrap();

    assert!(later::items(&pool, 1).await.unwrap().is_empty());
    assert_eq!(cart::items(&pool, 1).await.unwrap().len(), 1);
    assert_eq!(later::product_id(&pool, entry).await.unwrap(), None);
}

#[tokio::test]
async fn products_count_tracks_the_seller() {
    let pool = pool().await;
    seed_product(&pool, 2, "One", 1).await;
    seed_product(&pool, 2, "Two", 2).await;
    seed_product(&pool, 9, "Other", 3).await;

    assert_eq!(products::count_by_seller(&pool, 2).await.unwrap(), 2);
    assert_eq!(products::count_by_seller(&pool, 9).await.unwrap(), 1);
    assert_eq!(products::products_by_seller(&pool, 2).await.unwrap().len(), 2);
}
