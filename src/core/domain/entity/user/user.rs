use thiserror::Error;

use crate::core::domain::constraint::{validate_all, Constraint, Violations};
use crate::core::domain::entity::user::User;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid user: {} field(s) failed validation", .0.len())]
pub struct CreateUserValidationError(pub Violations);

impl CreateUserValidationError {
    pub fn violations(&self) -> &Violations {
        &self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnvalidatedCreateUserInput {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

// Id and Phone carry no constraint.
const CREATE_USER_CONSTRAINTS: [Constraint<UnvalidatedCreateUserInput>; 3] = [
    Constraint::required("Email", email),
    Constraint::required("Password", password),
    Constraint::required("Name", name),
];

fn email(input: &UnvalidatedCreateUserInput) -> &str {
    &input.email
}

fn password(input: &UnvalidatedCreateUserInput) -> &str {
    &input.password
}

fn name(input: &UnvalidatedCreateUserInput) -> &str {
    &input.name
}

impl TryFrom<UnvalidatedCreateUserInput> for User {
    type Error = CreateUserValidationError;

    fn try_from(value: UnvalidatedCreateUserInput) -> Result<Self, Self::Error> {
        validate_all(&value, &CREATE_USER_CONSTRAINTS).map_err(CreateUserValidationError)?;

        Ok(User {
            id: value.id,
            email: value.email,
            password: value.password,
            name: value.name,
            phone: value.phone,
        })
    }
}
