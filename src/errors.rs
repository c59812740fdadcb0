use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Failed to parse model output for '{0}'")]
    ParseFailed(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ModelUnavailable(_) => "MODEL_UNAVAILABLE",
            AppError::ParseFailed(_) => "PARSE_FAILED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ParseFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
