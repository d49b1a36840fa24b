use std::collections::BTreeMap;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub const VALIDATION_FAILED: &str = "validation failed";
pub const INTERNAL_ERROR: &str = "internal server error";

// Pre-rendered so the fallback cannot fail to serialize.
const INTERNAL_ERROR_BODY: &[u8] = br#"{"status":"Error","error":"internal server error"}"#;

/// Uniform JSON body for every answer from the API.
///
/// ```json
/// { "status": "OK", "data": { "message": "user created" } }
/// { "status": "Error", "error": "empty body received" }
/// { "status": "Error", "error": "validation failed", "errors": { "Email": "field Email is a required field" } }
/// ```
#[derive(Debug, Serialize)]
#[serde(tag = "status")]
pub enum Envelope<T: Serialize> {
    #[serde(rename = "OK")]
    Success { data: T },

    #[serde(rename = "Error")]
    Error {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        errors: Option<BTreeMap<String, String>>,
    },
}

/// Envelope plus the HTTP status it goes out with.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub status: StatusCode,
    pub envelope: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            envelope: Envelope::Success { data },
        }
    }
}

impl ApiResponse<()> {
    pub fn general_error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: Envelope::Error {
                error: message.into(),
                errors: None,
            },
        }
    }

    pub fn validation_error<K, V>(violations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let errors = violations
            .into_iter()
            .map(|(field, reason)| (field.into(), reason.into()))
            .collect();

        Self {
            status: StatusCode::BAD_REQUEST,
            envelope: Envelope::Error {
                error: VALIDATION_FAILED.to_string(),
                errors: Some(errors),
            },
        }
    }

    pub fn internal_error() -> Self {
        Self::general_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Serializes the envelope; a failure here still answers, with a 500.
    pub fn to_bytes(&self) -> (StatusCode, Vec<u8>) {
        match serde_json::to_vec(&self.envelope) {
            Ok(body) => (self.status, body),
            Err(err) => {
                error!(error = %err, "failed to serialize response envelope");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY.to_vec())
            }
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let (status, body) = self.to_bytes();
        (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response()
    }
}
