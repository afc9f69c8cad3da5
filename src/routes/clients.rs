use axum::extract::State;
use axum::Json;

use crate::dto::envelope::Envelope;
use crate::dto::{ClientResponse, PageQuery};
use crate::error::AppError;
use crate::extract::{ApiPath, ApiQuery};
use crate::pagination::PageRequest;
use crate::services;
use crate::state::SharedState;

pub async fn list(
    State(state): State<SharedState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Envelope<Vec<ClientResponse>>>, AppError> {
    let page = PageRequest::optional(
        query.page,
        query.limit,
        state.config.default_page_size,
        state.config.max_page_size,
    )?;
    let (clients, pagination) = services::clients::list(state.store.as_ref(), page).await?;
    Ok(Json(Envelope::data(clients).with_pagination(pagination)))
}

pub async fn get(
    State(state): State<SharedState>,
    ApiPath(email): ApiPath<String>,
) -> Result<Json<Envelope<ClientResponse>>, AppError> {
    let client = services::clients::get_by_email(state.store.as_ref(), &email).await?;
    Ok(Json(Envelope::data(client)))
}
