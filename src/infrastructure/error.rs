use crate::core::response::{ClientResponseError, ErrorKind};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub type AppResult<T = ()> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{detail}")]
    EntityNotFoundError { detail: String },
    #[error("{}", .reasons.join(","))]
    ValidationError { reasons: Vec<String> },
    #[error("{0}")]
    BadRequestError(String),
    #[error("{0}")]
    GeocodingError(String),
    #[error("{0}")]
    StorageError(String),
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    #[error(transparent)]
    DatabaseError(#[from] sea_orm::DbErr),
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl AppError {
    pub fn response(&self) -> (StatusCode, ClientResponseError) {
        let (status, kind, details) = match self {
            AppError::EntityNotFoundError { .. } => {
                (StatusCode::NOT_FOUND, ErrorKind::NotFound, vec![])
            },
            AppError::ValidationError { reasons } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::ValidationFailed,
                reasons.clone(),
            ),
            AppError::BadRequestError(_) => (StatusCode::BAD_REQUEST, ErrorKind::BadRequest, vec![]),
            AppError::GeocodingError(_) | AppError::HttpClientError(_) => {
                (StatusCode::BAD_GATEWAY, ErrorKind::UpstreamError, vec![])
            },
            AppError::StorageError(_)
            | AppError::DatabaseError(_)
            | AppError::ConfigError(_)
            | AppError::IoError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorKind::InternalServerError,
                vec![],
            ),
        };

        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, ClientResponseError::new(message, kind, details))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequestError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.response();
        if status.is_server_error() {
            log::error!("Request failed with {status} ({}): {self}", body.kind);
        }
        (status, Json(body)).into_response()
    }
}
