use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::entity::user::user::{
    CreateUserValidationError, UnvalidatedCreateUserInput,
};

#[async_trait]
pub trait CreateUserInputBoundary: Send + Sync {
    async fn execute(
        &self,
        input: UnvalidatedCreateUserInput,
        output_boundary: &mut dyn CreateUserOutputBoundary,
    ) -> Result<(), CreateUserError>;
}

#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error(transparent)]
    ValidationError(#[from] CreateUserValidationError),

    #[error("Failed to process output: {0}")]
    OutputError(#[from] CreateUserOutputError),
}

/// What the use case hands back once a user has been accepted.
///
/// Nothing is stored yet, so there is no assigned id to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserOutput {
    pub message: &'static str,
}

pub trait CreateUserOutputBoundary: Send + Sync {
    fn execute(&mut self, output: CreateUserOutput) -> Result<(), CreateUserOutputError>;
}

#[derive(Debug, Error)]
pub enum CreateUserOutputError {
    #[error("Invalid output state: {0}")]
    InvalidStateError(String),
}
