//! Persistence contract for projects, orders and clients.
//!
//! Handlers and services only ever see `dyn Store`; the Postgres and in-memory
//! backends are interchangeable behind it.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{Client, ClientContact, Order, Project, ProjectFields};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::ConstraintViolation(db_err.message().to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A slice of a listing: `limit` rows starting after `offset` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn create_project(&self, fields: &ProjectFields) -> StoreResult<i64>;
    async fn get_project(&self, id: i64) -> StoreResult<Project>;
    /// Insertion order. `None` returns every row. The count ignores the window.
    async fn list_projects(&self, window: Option<PageWindow>) -> StoreResult<(Vec<Project>, i64)>;
    async fn update_project(&self, id: i64, fields: &ProjectFields) -> StoreResult<Project>;
    async fn delete_project(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts with the caller-supplied key; a duplicate key is a `ConstraintViolation`.
    async fn create_order(&self, order: &Order) -> StoreResult<String>;
    async fn get_order(&self, id: &str) -> StoreResult<Order>;
    /// Newest first (`created_at DESC, id DESC`).
    async fn list_orders(&self, window: PageWindow) -> StoreResult<(Vec<Order>, i64)>;
    /// `updated_at` becomes `max(at, previous + 1µs)`.
    async fn update_order_status(&self, id: &str, status: &str, at: DateTime<Utc>)
    -> StoreResult<Order>;
    async fn delete_order(&self, id: &str) -> StoreResult<()>;
}

#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Fails with `ConstraintViolation` when the email is already present.
    async fn create_client(&self, client: &Client) -> StoreResult<String>;
    async fn get_client_by_email(&self, email: &str) -> StoreResult<Client>;
    /// Newest first. `None` returns every row.
    async fn list_clients(&self, window: Option<PageWindow>) -> StoreResult<(Vec<Client>, i64)>;
    /// Overwrites the row matching `client.email`.
    async fn update_client(&self, client: &Client) -> StoreResult<()>;
    /// Insert-or-update keyed by email in one atomic step. A new client starts at one
    /// order; an existing one takes the new contact details and one more order.
    async fn record_order(
        &self,
        new_id: &str,
        contact: &ClientContact,
        at: DateTime<Utc>,
    ) -> StoreResult<Client>;
}

pub trait Store: ProjectStore + OrderStore + ClientStore {}

impl<T: ProjectStore + OrderStore + ClientStore> Store for T {}

/// One microsecond past `previous` if `at` does not move forward.
pub fn next_update_time(previous: DateTime<Utc>, at: DateTime<Utc>) -> DateTime<Utc> {
    at.max(previous + chrono::Duration::microseconds(1))
}
