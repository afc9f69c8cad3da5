use crate::dto::envelope::Pagination;
use crate::dto::{ProjectRequest, ProjectResponse};
use crate::error::AppResult;
use crate::pagination::PageRequest;
use crate::store::Store;

pub async fn create(store: &dyn Store, req: ProjectRequest) -> AppResult<i64> {
    req.validate()?;
    let id = store.create_project(&req.into_fields()).await?;
    tracing::info!(project_id = id, "Project created");
    Ok(id)
}

pub async fn list(
    store: &dyn Store,
    page: Option<PageRequest>,
) -> AppResult<(Vec<ProjectResponse>, Option<Pagination>)> {
    let (projects, total) = store.list_projects(page.map(|p| p.window())).await?;
    let projects = projects.into_iter().map(ProjectResponse::from).collect();
    Ok((projects, page.map(|p| p.pagination(total))))
}

pub async fn get(store: &dyn Store, id: i64) -> AppResult<ProjectResponse> {
    Ok(store.get_project(id).await?.into())
}

pub async fn update(store: &dyn Store, id: i64, req: ProjectRequest) -> AppResult<ProjectResponse> {
    req.validate()?;
    let project = store.update_project(id, &req.into_fields()).await?;
    tracing::info!(project_id = id, "Project updated");
    Ok(project.into())
}

pub async fn delete(store: &dyn Store, id: i64) -> AppResult<()> {
    store.delete_project(id).await?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(())
}
