use crate::dto::codec::encode_list;
use crate::dto::envelope::Pagination;
use crate::dto::{OrderRequest, OrderResponse, normalize_email};
use crate::error::AppResult;
use crate::ids;
use crate::models::Order;
use crate::models::order::DEFAULT_STATUS;
use crate::pagination::PageRequest;
use crate::store::Store;

use super::reconcile;

/// How far order creation got. Rejected input and failed inserts are errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStage {
    /// The order is stored but client reconciliation failed and was abandoned.
    Persisted,
    Reconciled,
}

#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub order: Order,
    pub stage: CreationStage,
}

pub fn build_order(req: OrderRequest, id: String, now: chrono::DateTime<chrono::Utc>) -> Order {
    let status = req
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_STATUS)
        .to_string();

    Order {
        id,
        client_name: req.client_name.trim().to_string(),
        email: normalize_email(&req.email),
        phone: req.phone,
        company: req.company,
        project_type: req.project_type,
        services: encode_list(&req.services),
        project_title: req.project_title,
        description: req.description,
        budget: req.budget,
        deadline: req.deadline,
        priority: req.priority,
        status,
        communication_preference: req.communication_preference,
        revision_rounds: req.revision_rounds,
        file_format: encode_list(&req.file_format),
        color_preferences: req.color_preferences,
        target_audience: req.target_audience,
        additional_notes: req.additional_notes,
        created_at: now,
        updated_at: now,
    }
}

/// Validate, persist, then reconcile the client.
///
/// Once the insert succeeds the order is the caller's: a reconciliation failure is
/// logged and reported through [`CreationStage::Persisted`], never as an error.
pub async fn create(store: &dyn Store, req: OrderRequest) -> AppResult<CreatedOrder> {
    req.validate()?;

    let order = build_order(req, ids::new_order_id(), ids::timestamp());

    if let Err(e) = store.create_order(&order).await {
        tracing::error!(order_id = %order.id, "Failed to store order: {e}");
        return Err(e.into());
    }
    tracing::info!(order_id = %order.id, email = %order.email, "Order created");

    let stage = match reconcile::reconcile(store, &order).await {
        Ok(client) => {
            tracing::debug!(
                client_id = %client.id,
                total_orders = client.total_orders,
                "Client reconciled"
            );
            CreationStage::Reconciled
        }
        Err(e) => {
            tracing::warn!(
                order_id = %order.id,
                email = %order.email,
                "Client reconciliation failed: {e}"
            );
            CreationStage::Persisted
        }
    };

    Ok(CreatedOrder { order, stage })
}

pub async fn get(store: &dyn Store, id: &str) -> AppResult<OrderResponse> {
    Ok(store.get_order(id).await?.into())
}

pub async fn list(
    store: &dyn Store,
    page: PageRequest,
) -> AppResult<(Vec<OrderResponse>, Pagination)> {
    let (orders, total) = store.list_orders(page.window()).await?;
    let orders = orders.into_iter().map(OrderResponse::from).collect();
    Ok((orders, page.pagination(total)))
}

pub async fn update_status(store: &dyn Store, id: &str, status: &str) -> AppResult<OrderResponse> {
    let order = store
        .update_order_status(id, status, ids::timestamp())
        .await?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
    Ok(order.into())
}

pub async fn delete(store: &dyn Store, id: &str) -> AppResult<()> {
    store.delete_order(id).await?;
    tracing::info!(order_id = %id, "Order deleted");
    Ok(())
}
