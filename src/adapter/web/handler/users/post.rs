use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::core::domain::entity::user::user::UnvalidatedCreateUserInput;
use crate::core::port::create_user::CreateUserInputBoundary;

use crate::adapter::web::dto::create_user_web_input::CreateUserWebInput;
use crate::adapter::web::presenter::create_user::CreateUserPresenter;
use crate::adapter::web::response::ApiResponse;

pub struct UserHandler {
    use_case: Arc<dyn CreateUserInputBoundary>,
}

impl UserHandler {
    pub fn new(use_case: Arc<dyn CreateUserInputBoundary>) -> Self {
        Self { use_case }
    }

    /// Decode, validate, accept. Each failure ends the request with its own envelope.
    pub async fn create_user(&self, body: &[u8]) -> Response {
        let mut presenter = CreateUserPresenter::new();

        let user = match CreateUserWebInput::from_body(body) {
            Ok(user) => user,
            Err(error) => return presenter.decode_failure(error).into_response(),
        };
        let input = UnvalidatedCreateUserInput::from(user);

        match self.use_case.execute(input, &mut presenter).await {
            Ok(_) => {
                if let Some(output) = presenter.output.take() {
                    presenter.success(output).into_response()
                } else {
                    tracing::error!("create user output not set by presenter");
                    ApiResponse::internal_error().into_response()
                }
            }
            Err(error) => presenter.failure(error).into_response(),
        }
    }
}
