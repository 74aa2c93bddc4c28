use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::time::Duration;

use crate::core::response::WebResponse;
use crate::core::validation::ValidationErrors;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request shape violates declared field rules; never reaches storage
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// No row for the given identifier
    #[error("{0}")]
    NotFound(String),

    /// Database operation errors, message passed through verbatim
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Failures from a non-SQL storage backend
    #[error("{0}")]
    Storage(String),

    /// The request deadline elapsed while waiting on storage
    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),

    /// Request body could not be parsed
    #[error("{0}")]
    MalformedBody(String),

    /// Path identifier is not a decimal u64
    #[error("{reason}")]
    InvalidId { entity: &'static str, reason: String },

    /// No route under `/api` matches the path
    #[error("{0}")]
    RouteNotFound(String),

    /// The path exists but not for this HTTP method
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Status text placed in the response envelope
    pub fn status_text(&self) -> String {
        match self {
            AppError::NotFound(_) | AppError::RouteNotFound(_) => "Not Found".to_string(),
            AppError::MethodNotAllowed(_) => "Method Not Allowed".to_string(),
            AppError::MalformedBody(_) => "Bad Request".to_string(),
            AppError::InvalidId { entity, .. } => format!("Invalid {} ID", entity),
            AppError::Unauthorized(_) => "Unauthorized".to_string(),
            AppError::Validation(_)
            | AppError::Database(_)
            | AppError::Storage(_)
            | AppError::Timeout(_)
            | AppError::Configuration(_) => "Internal Server Error".to_string(),
        }
    }

    /// True for failures that originate in the storage layer
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            AppError::Database(_) | AppError::Storage(_) | AppError::Timeout(_)
        )
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, status = status_code.as_u16(), "Request rejected");
        }

        HttpResponse::build(status_code).json(WebResponse::new(
            status_code,
            self.status_text(),
            Some(self.to_string()),
        ))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn not_found(entity: &str, id: u64) -> Self {
        AppError::NotFound(format!("{} with id {} not found", entity, id))
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
