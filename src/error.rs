use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// A required field was absent where the API answers with 404 rather than 400.
    #[error("{0}")]
    MissingField(String),

    #[error("Favorite could not be saved")]
    Persistence(#[source] DbErr),

    #[error("Database error")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Api(#[from] ApiException),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::MissingField(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Persistence(_) => StatusCode::BAD_REQUEST,
            AppError::Api(exception) => exception.status(),
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, status = %status, "request failed");
        } else {
            tracing::warn!(error = ?self, status = %status, "request rejected");
        }

        match self {
            AppError::Api(exception) => exception.into_response(),
            other => (status, Json(ErrorBody::new(other.to_string()))).into_response(),
        }
    }
}

/// Global API exception rendered as `{"message", "status_code", ...payload}`.
///
/// Independent from the `{"error"}` envelope the handlers use.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct ApiException {
    pub message: String,
    pub status_code: u16,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ApiException {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code: status.as_u16(),
            payload: Map::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    /// Unmatched route, reported with the requested path.
    pub fn not_found(path: &str) -> Self {
        let mut payload = Map::new();
        payload.insert("path".into(), Value::String(path.to_string()));
        Self::new("Not Found", StatusCode::NOT_FOUND).with_payload(payload)
    }

    pub fn with_payload(mut self, mut payload: Map<String, Value>) -> Self {
        payload.remove("message");
        payload.remove("status_code");
        self.payload = payload;
        self
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }
}

impl IntoResponse for ApiException {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
