use std::collections::BTreeMap;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::services::TeamServiceError;

/// API error carrying the HTTP status and the body shape it renders as
#[derive(Debug)]
pub enum ApiError {
    /// 404 with `{timestamp, status, message}`
    NotFound(String),
    /// 400 with the message as a plain-text body
    BadRequest(String),
    /// 400 with `{timestamp, status, message}` for unreadable payloads
    MalformedBody(String),
    /// 400 with `{timestamp, status, errors: {field: message}}`
    Validation(BTreeMap<String, String>),
    /// 500 with `{timestamp, status, message}`
    Internal(String),
}

impl ApiError {
    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a 400 Bad Request error with a plain-text body
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::MalformedBody(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let timestamp = Utc::now().to_rfc3339();

        match self {
            ApiError::BadRequest(message) => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message,
            )
                .into_response(),
            ApiError::Validation(errors) => {
                let body = Json(json!({
                    "timestamp": timestamp,
                    "status": status.as_u16(),
                    "errors": errors,
                }));
                (status, body).into_response()
            }
            ApiError::NotFound(message)
            | ApiError::MalformedBody(message)
            | ApiError::Internal(message) => {
                let body = Json(json!({
                    "timestamp": timestamp,
                    "status": status.as_u16(),
                    "message": message,
                }));
                (status, body).into_response()
            }
        }
    }
}

impl From<TeamServiceError> for ApiError {
    fn from(error: TeamServiceError) -> Self {
        match error {
            TeamServiceError::NotFound(_) => Self::not_found(error.to_string()),
            TeamServiceError::InvalidSort(_) | TeamServiceError::InvalidPage(_) => {
                tracing::warn!(%error, "Rejected team listing request");
                Self::bad_request(error.to_string())
            }
            TeamServiceError::Repository(e) => {
                tracing::error!(error = %e, "Team store failure");
                Self::internal_server_error("Internal server error")
            }
        }
    }
}
