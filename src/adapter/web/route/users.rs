use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::handler::users::post::UserHandler;

pub async fn post(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let handler = UserHandler::new(state.user_create_use_case.clone());
    handler.create_user(&body).await
}
