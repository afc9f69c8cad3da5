use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::envelope::Envelope;
use crate::dto::{CreatedId, PageQuery, ProjectRequest, ProjectResponse};
use crate::error::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::pagination::PageRequest;
use crate::services;
use crate::state::SharedState;

pub async fn list(
    State(state): State<SharedState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Envelope<Vec<ProjectResponse>>>, AppError> {
    let page = PageRequest::optional(
        query.page,
        query.limit,
        state.config.default_page_size,
        state.config.max_page_size,
    )?;
    let (projects, pagination) = services::projects::list(state.store.as_ref(), page).await?;
    Ok(Json(Envelope::data(projects).with_pagination(pagination)))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<ProjectRequest>,
) -> Result<(StatusCode, Json<Envelope<CreatedId<i64>>>), AppError> {
    let id = services::projects::create(state.store.as_ref(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(CreatedId { id }).with_message("Project created successfully")),
    ))
}

pub async fn get(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Envelope<ProjectResponse>>, AppError> {
    let project = services::projects::get(state.store.as_ref(), id).await?;
    Ok(Json(Envelope::data(project)))
}

pub async fn update(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<ProjectRequest>,
) -> Result<Json<Envelope<ProjectResponse>>, AppError> {
    let project = services::projects::update(state.store.as_ref(), id, req).await?;
    Ok(Json(
        Envelope::data(project).with_message("Project updated successfully"),
    ))
}

pub async fn delete(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Envelope<()>>, AppError> {
    services::projects::delete(state.store.as_ref(), id).await?;
    Ok(Json(Envelope::message("Project deleted successfully")))
}
