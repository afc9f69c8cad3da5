use sqlx::PgPool;

use crate::models::{Project, ProjectFields};

pub async fn create(pool: &PgPool, fields: &ProjectFields) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO projects (client_name, email, phone, project_type, services,
             project_title, description, budget, deadline, reference_files,
             additional_notes, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING id",
    )
    .bind(&fields.client_name)
    .bind(&fields.email)
    .bind(&fields.phone)
    .bind(&fields.project_type)
    .bind(&fields.services)
    .bind(&fields.project_title)
    .bind(&fields.description)
    .bind(&fields.budget)
    .bind(&fields.deadline)
    .bind(&fields.reference_files)
    .bind(&fields.additional_notes)
    .bind(&fields.status)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// A `None` limit binds SQL NULL, which Postgres treats as no limit.
pub async fn list(
    pool: &PgPool,
    limit: Option<i64>,
    offset: i64,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY id ASC LIMIT $1 OFFSET $2")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    fields: &ProjectFields,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET client_name = $2, email = $3, phone = $4, project_type = $5,
             services = $6, project_title = $7, description = $8, budget = $9,
             deadline = $10, reference_files = $11, additional_notes = $12, status = $13
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&fields.client_name)
    .bind(&fields.email)
    .bind(&fields.phone)
    .bind(&fields.project_type)
    .bind(&fields.services)
    .bind(&fields.project_title)
    .bind(&fields.description)
    .bind(&fields.budget)
    .bind(&fields.deadline)
    .bind(&fields.reference_files)
    .bind(&fields.additional_notes)
    .bind(&fields.status)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
