use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::Order;

pub async fn create(pool: &PgPool, order: &Order) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO orders (id, client_name, email, phone, company, project_type, services,
             project_title, description, budget, deadline, priority, status,
             communication_preference, revision_rounds, file_format, color_preferences,
             target_audience, additional_notes, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
             $17, $18, $19, $20, $21)",
    )
    .bind(&order.id)
    .bind(&order.client_name)
    .bind(&order.email)
    .bind(&order.phone)
    .bind(&order.company)
    .bind(&order.project_type)
    .bind(&order.services)
    .bind(&order.project_title)
    .bind(&order.description)
    .bind(&order.budget)
    .bind(&order.deadline)
    .bind(&order.priority)
    .bind(&order.status)
    .bind(&order.communication_preference)
    .bind(&order.revision_rounds)
    .bind(&order.file_format)
    .bind(&order.color_preferences)
    .bind(&order.target_audience)
    .bind(&order.additional_notes)
    .bind(order.created_at)
    .bind(order.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT * FROM orders ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

/// `updated_at` always moves forward by at least one microsecond.
pub async fn update_status(
    pool: &PgPool,
    id: &str,
    status: &str,
    at: DateTime<Utc>,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "UPDATE orders
         SET status = $2,
             updated_at = GREATEST($3, updated_at + interval '1 microsecond')
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status)
    .bind(at)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
