//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("unsupported database url: {0} (expected postgres:// or sqlite:)")]
    UnsupportedDatabase(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Carries the resource label, e.g. `Product`.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("You need to specify the {0}")]
    MissingField(String),
    #[error("{0}")]
    BadRequest(String),
    /// A statement that must yield a row (e.g. `INSERT ... RETURNING`) came back empty.
    #[error("{0} returned no row")]
    NoRowReturned(&'static str),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::NoRowReturned(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingField(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error payload. `status_code` always equals the HTTP status of the response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub status_code: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            match &self {
                AppError::Db(_) => "Resource not found".to_string(),
                other => other.to_string(),
            }
        };
        let body = ErrorBody {
            message,
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
