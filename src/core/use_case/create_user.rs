use async_trait::async_trait;
use tracing::info;

use crate::core::domain::entity::user::user::UnvalidatedCreateUserInput;
use crate::core::domain::entity::user::User;
use crate::core::port::create_user::{
    CreateUserError, CreateUserInputBoundary, CreateUserOutput, CreateUserOutputBoundary,
};

pub const USER_CREATED: &str = "user created";

/// Validates the input and acknowledges it. Persistence is not wired in.
#[derive(Debug, Default)]
pub struct CreateUserUseCase;

impl CreateUserUseCase {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CreateUserInputBoundary for CreateUserUseCase {
    async fn execute(
        &self,
        input: UnvalidatedCreateUserInput,
        output_boundary: &mut dyn CreateUserOutputBoundary,
    ) -> Result<(), CreateUserError> {
        let user = User::try_from(input)?;

        info!("creating a user");

        output_boundary.execute(CreateUserOutput {
            message: USER_CREATED,
        })?;

        Ok(())
    }
}
