pub mod clients;
pub mod orders;
pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Projects
        .route("/projects", get(projects::list).post(projects::create))
        .route(
            "/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Orders
        .route("/api/orders", get(orders::list).post(orders::create))
        .route(
            "/api/orders/{id}",
            get(orders::get)
                .patch(orders::update_status)
                .delete(orders::delete),
        )
        // Clients
        .route("/api/clients", get(clients::list))
        .route("/api/clients/{email}", get(clients::get))
}
