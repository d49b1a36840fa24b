use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::route::{health, users};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::get))
        .route("/api/users/create", post(users::post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
