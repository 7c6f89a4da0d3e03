use axum::routing::get;
use tower_http::cors::CorsLayer;

use super::endpoints::*;
use super::State;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/", get(welcome))
        .route("/api/users", get(users).post(create_user))
        .route("/api/users/all", get(list_users))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
