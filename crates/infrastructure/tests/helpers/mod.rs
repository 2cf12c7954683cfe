#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use crm_jobs_domain::timestamp;
use crm_jobs_infrastructure::database::MIGRATOR;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn create_test_db() -> SqlitePool {
    // One connection: every connection to `sqlite::memory:` is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

pub async fn insert_customer(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO customers (name, email, phone) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(format!("{}@example.com", name.to_lowercase()))
    .bind("+15550100")
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_order(
    pool: &SqlitePool,
    customer_id: i64,
    order_date: DateTime<Utc>,
    total_cents: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (customer_id, total_amount_cents, order_date) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(customer_id)
    .bind(total_cents)
    .bind(timestamp::to_db(order_date))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert an order whose date is stored exactly as given, bypassing the
/// usual storage format.
pub async fn insert_order_with_raw_date(pool: &SqlitePool, customer_id: i64, order_date: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (customer_id, total_amount_cents, order_date) VALUES (?, 0, ?) RETURNING id",
    )
    .bind(customer_id)
    .bind(order_date)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// ISO 8601 form with a `T` separator, as other writers may store it.
pub fn iso_t(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub async fn insert_product(pool: &SqlitePool, name: &str, stock: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO products (name, price_cents, stock) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(1_999_i64)
    .bind(stock)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
