//! Server errors and their HTTP mapping.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use planejaqui_core::PersistError;
use serde_json::json;
use thiserror::Error;

/// Startup errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Logger(#[from] rolling_logger::LoggerError),
}

/// Request errors, answered as `{"success": false, "error": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid collection: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Storage(String),
}

impl From<PersistError> for ApiError {
    fn from(e: PersistError) -> Self {
        match e {
            PersistError::Codec(_) | PersistError::Invalid(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("Request failed: {}", self);
        (status, Json(json!({ "success": false, "error": self.to_string() }))).into_response()
    }
}
