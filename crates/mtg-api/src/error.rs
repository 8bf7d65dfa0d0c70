use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use mtg_core::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            DomainError::EmailAlreadyExists(_) | DomainError::UsernameAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            DomainError::PasswordTooShort | DomainError::ValidationError(_) => {
                ApiError::BadRequest(err.to_string())
            }
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            DomainError::PasswordHashError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<tower_sessions::session::Error> for ApiError {
    fn from(err: tower_sessions::session::Error) -> Self {
        ApiError::SessionError(err.to_string())
    }
}

impl From<handlebars::RenderError> for ApiError {
    fn from(err: handlebars::RenderError) -> Self {
        ApiError::TemplateError(err.to_string())
    }
}

impl From<handlebars::TemplateError> for ApiError {
    fn from(err: handlebars::TemplateError) -> Self {
        ApiError::TemplateError(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            },
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            },
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "CONFLICT", msg)
            },
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", msg)
            },
            ApiError::SessionError(msg) => {
                tracing::error!("Session error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "SESSION_ERROR", msg)
            },
            ApiError::TemplateError(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "TEMPLATE_ERROR", msg)
            },
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            },
        };

        // Server-side detail stays in the log.
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            message
        };

        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}
