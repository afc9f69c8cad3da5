use crate::dto::envelope::Pagination;
use crate::dto::{ClientResponse, normalize_email};
use crate::error::AppResult;
use crate::pagination::PageRequest;
use crate::store::Store;

pub async fn list(
    store: &dyn Store,
    page: Option<PageRequest>,
) -> AppResult<(Vec<ClientResponse>, Option<Pagination>)> {
    let (clients, total) = store.list_clients(page.map(|p| p.window())).await?;
    let clients = clients.into_iter().map(ClientResponse::from).collect();
    Ok((clients, page.map(|p| p.pagination(total))))
}

pub async fn get_by_email(store: &dyn Store, email: &str) -> AppResult<ClientResponse> {
    Ok(store
        .get_client_by_email(&normalize_email(email))
        .await?
        .into())
}
