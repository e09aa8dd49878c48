//! HTTP error handling and response conversion.
//!
//! Errors from the domain, the webhook pipeline and the database are mapped to
//! HTTP status codes and a `{"error": "..."}` JSON body. The full error is
//! logged; only a user-safe message is returned.

use crate::application::{
    manage_webhooks::use_case::ManageWebhooksError,
    record_temperature::use_case::RecordTemperatureError,
};
use crate::domain::{shared::errors::DomainError, webhook::errors::WebhookError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request (400).
    BadRequest(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Database operation failed (500).
    Database(String),

    /// Background worker queue unavailable (500).
    Queue(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Queue(msg) => write!(f, "Queue error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Queue(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-safe message without implementation details.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => format!("{} not found", msg),
            Self::BadRequest(msg) => msg.clone(),
            Self::ValidationError(msg) => msg.clone(),
            Self::Database(_) => "Database operation failed".into(),
            Self::Queue(_) => "Request queuing failed".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::InfrastructureError(msg) => AppError::Database(msg),
        }
    }
}

impl From<WebhookError> for AppError {
    fn from(err: WebhookError) -> Self {
        match err {
            WebhookError::InvalidWebhook | WebhookError::InvalidTemperatureEvent => {
                AppError::ValidationError(err.to_string())
            }
            WebhookError::NotFound(id) => AppError::NotFound(format!("webhook {}", id)),
            WebhookError::StorageUnavailable(msg) => AppError::Database(msg),
            WebhookError::QueueClosed(_) => AppError::Queue(err.to_string()),
            WebhookError::DeliveryFailed { .. } => AppError::Internal(err.to_string()),
        }
    }
}

impl From<ManageWebhooksError> for AppError {
    fn from(err: ManageWebhooksError) -> Self {
        match err {
            ManageWebhooksError::Domain(e) => e.into(),
            ManageWebhooksError::Webhook(e) => e.into(),
        }
    }
}

impl From<RecordTemperatureError> for AppError {
    fn from(err: RecordTemperatureError) -> Self {
        match err {
            RecordTemperatureError::Domain(e) => e.into(),
            RecordTemperatureError::Webhook(e) => e.into(),
        }
    }
}

// === Extractor Rejections ===

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!(json_rejection = %err);
        AppError::BadRequest("Invalid request payload".into())
    }
}

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid id: {}", err.body_text()))
    }
}
