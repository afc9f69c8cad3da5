use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{Client, ClientContact};

pub async fn create(pool: &PgPool, client: &Client) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO clients (id, name, email, phone, company, total_orders, total_spent,
             last_order_date, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(&client.id)
    .bind(&client.name)
    .bind(&client.email)
    .bind(&client.phone)
    .bind(&client.company)
    .bind(client.total_orders)
    .bind(client.total_spent)
    .bind(client.last_order_date)
    .bind(client.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn list(
    pool: &PgPool,
    limit: Option<i64>,
    offset: i64,
) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT * FROM clients ORDER BY created_at DESC, email ASC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn update(pool: &PgPool, client: &Client) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE clients
         SET name = $2, phone = $3, company = $4, total_orders = $5, total_spent = $6,
             last_order_date = $7
         WHERE email = $1",
    )
    .bind(&client.email)
    .bind(&client.name)
    .bind(&client.phone)
    .bind(&client.company)
    .bind(client.total_orders)
    .bind(client.total_spent)
    .bind(client.last_order_date)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Single-statement upsert keyed on the unique email, so concurrent first orders
/// from one address converge on one row.
pub async fn record_order(
    pool: &PgPool,
    new_id: &str,
    contact: &ClientContact,
    at: DateTime<Utc>,
) -> Result<Client, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "INSERT INTO clients (id, name, email, phone, company, total_orders, total_spent,
             last_order_date, created_at)
         VALUES ($1, $2, $3, $4, $5, 1, 0, $6, $6)
         ON CONFLICT (email) DO UPDATE
         SET name = EXCLUDED.name,
             phone = EXCLUDED.phone,
             company = EXCLUDED.company,
             total_orders = clients.total_orders + 1,
             last_order_date = GREATEST(clients.last_order_date, EXCLUDED.last_order_date)
         RETURNING *",
    )
    .bind(new_id)
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.phone)
    .bind(&contact.company)
    .bind(at)
    .fetch_one(pool)
    .await
}
