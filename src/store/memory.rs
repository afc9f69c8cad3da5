use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::models::{Client, ClientContact, Order, Project, ProjectFields};

use super::{
    ClientStore, OrderStore, PageWindow, ProjectStore, StoreError, StoreResult, next_update_time,
};

/// Process-local store. Every single-row operation holds the shard lock for its key,
/// which gives the same atomicity the Postgres statements have.
pub struct MemoryStore {
    next_project_id: AtomicI64,
    projects: DashMap<i64, Project>,
    orders: DashMap<String, Order>,
    /// Keyed by email, which makes the email unique by construction.
    clients: DashMap<String, Client>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_project_id: AtomicI64::new(1),
            projects: DashMap::new(),
            orders: DashMap::new(),
            clients: DashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn paginate<T>(rows: Vec<T>, window: Option<PageWindow>) -> (Vec<T>, i64) {
    let total = rows.len() as i64;
    let rows = match window {
        Some(w) => rows
            .into_iter()
            .skip(w.offset.max(0) as usize)
            .take(w.limit.max(0) as usize)
            .collect(),
        None => rows,
    };
    (rows, total)
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn create_project(&self, fields: &ProjectFields) -> StoreResult<i64> {
        let id = self.next_project_id.fetch_add(1, Ordering::SeqCst);
        self.projects.insert(id, Project::from_fields(id, fields));
        Ok(id)
    }

    async fn get_project(&self, id: i64) -> StoreResult<Project> {
        self.projects
            .get(&id)
            .map(|p| p.value().clone())
            .ok_or_else(|| StoreError::not_found("project", id))
    }

    async fn list_projects(&self, window: Option<PageWindow>) -> StoreResult<(Vec<Project>, i64)> {
        let mut rows: Vec<Project> = self.projects.iter().map(|p| p.value().clone()).collect();
        rows.sort_by_key(|p| p.id);
        Ok(paginate(rows, window))
    }

    async fn update_project(&self, id: i64, fields: &ProjectFields) -> StoreResult<Project> {
        let mut entry = self
            .projects
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("project", id))?;
        *entry = Project::from_fields(id, fields);
        Ok(entry.clone())
    }

    async fn delete_project(&self, id: i64) -> StoreResult<()> {
        self.projects
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("project", id))
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn create_order(&self, order: &Order) -> StoreResult<String> {
        match self.orders.entry(order.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::ConstraintViolation(format!(
                "order {} already exists",
                order.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(order.clone());
                Ok(order.id.clone())
            }
        }
    }

    async fn get_order(&self, id: &str) -> StoreResult<Order> {
        self.orders
            .get(id)
            .map(|o| o.value().clone())
            .ok_or_else(|| StoreError::not_found("order", id))
    }

    async fn list_orders(&self, window: PageWindow) -> StoreResult<(Vec<Order>, i64)> {
        let mut rows: Vec<Order> = self.orders.iter().map(|o| o.value().clone()).collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(paginate(rows, Some(window)))
    }

    async fn update_order_status(
        &self,
        id: &str,
        status: &str,
        at: DateTime<Utc>,
    ) -> StoreResult<Order> {
        let mut order = self
            .orders
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("order", id))?;
        order.status = status.to_string();
        order.updated_at = next_update_time(order.updated_at, at);
        Ok(order.clone())
    }

    async fn delete_order(&self, id: &str) -> StoreResult<()> {
        self.orders
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("order", id))
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn create_client(&self, client: &Client) -> StoreResult<String> {
        match self.clients.entry(client.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::ConstraintViolation(format!(
                "client with email {} already exists",
                client.email
            ))),
            Entry::Vacant(slot) => {
                slot.insert(client.clone());
                Ok(client.id.clone())
            }
        }
    }

    async fn get_client_by_email(&self, email: &str) -> StoreResult<Client> {
        self.clients
            .get(email)
            .map(|c| c.value().clone())
            .ok_or_else(|| StoreError::not_found("client", email))
    }

    async fn list_clients(&self, window: Option<PageWindow>) -> StoreResult<(Vec<Client>, i64)> {
        let mut rows: Vec<Client> = self.clients.iter().map(|c| c.value().clone()).collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.email.cmp(&b.email))
        });
        Ok(paginate(rows, window))
    }

    async fn update_client(&self, client: &Client) -> StoreResult<()> {
        let mut existing = self
            .clients
            .get_mut(&client.email)
            .ok_or_else(|| StoreError::not_found("client", &client.email))?;
        let id = existing.id.clone();
        let created_at = existing.created_at;
        *existing = Client {
            id,
            created_at,
            ..client.clone()
        };
        Ok(())
    }

    async fn record_order(
        &self,
        new_id: &str,
        contact: &ClientContact,
        at: DateTime<Utc>,
    ) -> StoreResult<Client> {
        let client = self
            .clients
            .entry(contact.email.clone())
            .and_modify(|existing| existing.apply_order(contact, at))
            .or_insert_with(|| Client::first_order(new_id.to_string(), contact, at));
        Ok(client.clone())
    }
}
