// src/error.rs
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::models::{DataValidationError, ModelError};
use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(StoreError),
    NotFound(String),
    ValidationError(String),
    UnsupportedMediaType(String),
    MethodNotAllowed,
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn unsupported_media_type(msg: impl Into<String>) -> Self {
        AppError::UnsupportedMediaType(msg.into())
    }

    pub fn db(err: StoreError) -> Self {
        AppError::DatabaseError(err)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, error_message) = match self {
            AppError::DatabaseError(e) => {
                error!(error = %e, "Storage failure");
                ("internal_error", "Database error occurred".to_string())
            }
            AppError::Internal(msg) => {
                error!(%msg, "Internal error");
                ("internal_error", "Internal server error".to_string())
            }
            AppError::NotFound(msg) => ("not_found", msg),
            AppError::ValidationError(msg) => ("bad_request", msg),
            AppError::UnsupportedMediaType(msg) => ("unsupported_media_type", msg),
            AppError::MethodNotAllowed => {
                ("method_not_allowed", "Method not allowed".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<DataValidationError> for AppError {
    fn from(err: DataValidationError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(e) => e.into(),
            ModelError::NotFound(id) => {
                AppError::not_found(format!("Product with id '{id}' was not found."))
            }
            ModelError::EmptyId => AppError::Internal(ModelError::EmptyId.to_string()),
            ModelError::Store(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::unsupported_media_type("Content-Type must be application/json")
            }
            other => AppError::validation(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}
