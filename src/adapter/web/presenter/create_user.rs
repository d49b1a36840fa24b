use axum::http::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::adapter::web::dto::create_user_web_input::DecodeError;
use crate::adapter::web::response::ApiResponse;
use crate::core::port::create_user::{
    CreateUserError, CreateUserOutput, CreateUserOutputBoundary, CreateUserOutputError,
};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CreateUserResponse {
    pub message: String,
}

pub struct CreateUserPresenter {
    pub(crate) output: Option<CreateUserOutput>,
}

impl CreateUserPresenter {
    pub fn new() -> Self {
        Self { output: None }
    }

    pub(crate) fn success(&self, output: CreateUserOutput) -> ApiResponse<CreateUserResponse> {
        ApiResponse::success(CreateUserResponse {
            message: output.message.to_string(),
        })
    }

    pub(crate) fn decode_failure(&self, error: DecodeError) -> ApiResponse<()> {
        debug!(%error, "rejecting undecodable body");
        ApiResponse::general_error(StatusCode::BAD_REQUEST, error.to_string())
    }

    pub(crate) fn failure(&self, error: CreateUserError) -> ApiResponse<()> {
        match error {
            CreateUserError::ValidationError(err) => {
                debug!(fields = ?err.violations().keys(), "rejecting invalid user");
                ApiResponse::validation_error(err.0)
            }
            CreateUserError::OutputError(err) => {
                tracing::error!(error = %err, "create user output failed");
                ApiResponse::internal_error()
            }
        }
    }
}

impl Default for CreateUserPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateUserOutputBoundary for CreateUserPresenter {
    fn execute(&mut self, output: CreateUserOutput) -> Result<(), CreateUserOutputError> {
        if self.output.is_some() {
            return Err(CreateUserOutputError::InvalidStateError(
                "output already set".to_string(),
            ));
        }
        self.output = Some(output);
        Ok(())
    }
}
