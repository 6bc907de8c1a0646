use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    BadRequest,
    UpstreamError,
    InternalServerError,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientResponseError {
    pub message: String,
    pub kind: ErrorKind,
    #[serde(default)]
    pub details: Vec<String>,
}

impl ClientResponseError {
    pub fn new(message: String, kind: ErrorKind, details: Vec<String>) -> Self {
        Self { message, kind, details }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthResponse {
    pub status: String,
}
