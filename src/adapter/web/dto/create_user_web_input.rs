use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use thiserror::Error;

use crate::core::domain::entity::user::user::UnvalidatedCreateUserInput;

impl From<CreateUserWebInput> for UnvalidatedCreateUserInput {
    fn from(value: CreateUserWebInput) -> Self {
        Self {
            id: value.id,
            email: value.email,
            password: value.password,
            name: value.name,
            phone: value.phone,
        }
    }
}

/// Body of `POST /api/users/create`.
///
/// Keys match `Id`, `Email`, `Password`, `Name` and `Phone` in any ASCII case,
/// the last matching key wins, `null` leaves a field as it was, missing keys
/// stay empty and unknown keys are ignored. A `null` body is an empty user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserWebInput {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

impl CreateUserWebInput {
    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        let field = if key.eq_ignore_ascii_case("Id") {
            &mut self.id
        } else if key.eq_ignore_ascii_case("Email") {
            &mut self.email
        } else if key.eq_ignore_ascii_case("Password") {
            &mut self.password
        } else if key.eq_ignore_ascii_case("Name") {
            &mut self.name
        } else if key.eq_ignore_ascii_case("Phone") {
            &mut self.phone
        } else {
            return None;
        };
        Some(field)
    }
}

struct CreateUserWebInputVisitor;

impl<'de> Visitor<'de> for CreateUserWebInputVisitor {
    type Value = CreateUserWebInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a user object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CreateUserWebInput::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut input = CreateUserWebInput::default();

        while let Some(key) = map.next_key::<String>()? {
            match input.field_mut(&key) {
                Some(field) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *field = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(input)
    }
}

impl<'de> Deserialize<'de> for CreateUserWebInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CreateUserWebInputVisitor)
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty body received")]
    EmptyBody,

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

impl CreateUserWebInput {
    /// Decodes the first JSON value in the body; anything after it is ignored.
    /// A body holding nothing but JSON whitespace is empty.
    pub fn from_body(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<CreateUserWebInput>()
            .next()
            .ok_or(DecodeError::EmptyBody)?
            .map_err(DecodeError::from)
    }
}
