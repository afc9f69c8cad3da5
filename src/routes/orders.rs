use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::envelope::Envelope;
use crate::dto::{OrderRequest, OrderResponse, OrderStatusUpdate, PageQuery};
use crate::error::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::pagination::PageRequest;
use crate::services;
use crate::state::SharedState;

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<OrderRequest>,
) -> Result<(StatusCode, Json<Envelope<OrderResponse>>), AppError> {
    let created = services::orders::create(state.store.as_ref(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(
            Envelope::data(OrderResponse::from(created.order))
                .with_message("Order created successfully"),
        ),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Envelope<Vec<OrderResponse>>>, AppError> {
    let page = PageRequest::from_query(
        query.page,
        query.limit,
        state.config.default_page_size,
        state.config.max_page_size,
    )?;
    let (orders, pagination) = services::orders::list(state.store.as_ref(), page).await?;
    Ok(Json(Envelope::data(orders).with_pagination(Some(pagination))))
}

pub async fn get(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Envelope<OrderResponse>>, AppError> {
    let order = services::orders::get(state.store.as_ref(), &id).await?;
    Ok(Json(Envelope::data(order)))
}

pub async fn update_status(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<OrderStatusUpdate>,
) -> Result<Json<Envelope<OrderResponse>>, AppError> {
    let status = req.validated_status()?;
    let order = services::orders::update_status(state.store.as_ref(), &id, status).await?;
    Ok(Json(
        Envelope::data(order).with_message("Order updated successfully"),
    ))
}

pub async fn delete(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    services::orders::delete(state.store.as_ref(), &id).await?;
    Ok(Json(Envelope::message("Order deleted successfully")))
}
