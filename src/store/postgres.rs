use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db;
use crate::models::{Client, ClientContact, Order, Project, ProjectFields};

use super::{ClientStore, OrderStore, PageWindow, ProjectStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn split_window(window: Option<PageWindow>) -> (Option<i64>, i64) {
    match window {
        Some(w) => (Some(w.limit), w.offset),
        None => (None, 0),
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn create_project(&self, fields: &ProjectFields) -> StoreResult<i64> {
        Ok(db::projects::create(&self.pool, fields).await?)
    }

    async fn get_project(&self, id: i64) -> StoreResult<Project> {
        db::projects::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| StoreError::not_found("project", id))
    }

    async fn list_projects(&self, window: Option<PageWindow>) -> StoreResult<(Vec<Project>, i64)> {
        let (limit, offset) = split_window(window);
        let projects = db::projects::list(&self.pool, limit, offset).await?;
        let total = db::projects::count(&self.pool).await?;
        Ok((projects, total))
    }

    async fn update_project(&self, id: i64, fields: &ProjectFields) -> StoreResult<Project> {
        db::projects::update(&self.pool, id, fields)
            .await?
            .ok_or_else(|| StoreError::not_found("project", id))
    }

    async fn delete_project(&self, id: i64) -> StoreResult<()> {
        match db::projects::delete(&self.pool, id).await? {
            0 => Err(StoreError::not_found("project", id)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl OrderStore for PgStore {
    async fn create_order(&self, order: &Order) -> StoreResult<String> {
        db::orders::create(&self.pool, order).await?;
        Ok(order.id.clone())
    }

    async fn get_order(&self, id: &str) -> StoreResult<Order> {
        db::orders::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| StoreError::not_found("order", id))
    }

    async fn list_orders(&self, window: PageWindow) -> StoreResult<(Vec<Order>, i64)> {
        let orders = db::orders::list(&self.pool, window.limit, window.offset).await?;
        let total = db::orders::count(&self.pool).await?;
        Ok((orders, total))
    }

    async fn update_order_status(
        &self,
        id: &str,
        status: &str,
        at: DateTime<Utc>,
    ) -> StoreResult<Order> {
        db::orders::update_status(&self.pool, id, status, at)
            .await?
            .ok_or_else(|| StoreError::not_found("order", id))
    }

    async fn delete_order(&self, id: &str) -> StoreResult<()> {
        match db::orders::delete(&self.pool, id).await? {
            0 => Err(StoreError::not_found("order", id)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ClientStore for PgStore {
    async fn create_client(&self, client: &Client) -> StoreResult<String> {
        db::clients::create(&self.pool, client).await?;
        Ok(client.id.clone())
    }

    async fn get_client_by_email(&self, email: &str) -> StoreResult<Client> {
        db::clients::find_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| StoreError::not_found("client", email))
    }

    async fn list_clients(&self, window: Option<PageWindow>) -> StoreResult<(Vec<Client>, i64)> {
        let (limit, offset) = split_window(window);
        let clients = db::clients::list(&self.pool, limit, offset).await?;
        let total = db::clients::count(&self.pool).await?;
        Ok((clients, total))
    }

    async fn update_client(&self, client: &Client) -> StoreResult<()> {
        match db::clients::update(&self.pool, client).await? {
            0 => Err(StoreError::not_found("client", &client.email)),
            _ => Ok(()),
        }
    }

    async fn record_order(
        &self,
        new_id: &str,
        contact: &ClientContact,
        at: DateTime<Utc>,
    ) -> StoreResult<Client> {
        Ok(db::clients::record_order(&self.pool, new_id, contact, at).await?)
    }
}
