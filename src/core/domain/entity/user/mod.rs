pub mod user;

/// A user that has passed every field constraint.
///
/// Only constructed through `TryFrom<UnvalidatedCreateUserInput>`, so holding one
/// means `email`, `password` and `name` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}
