use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::api::dtos::{ErrorResponse, ValidationErrorResponse};

pub const CODE_INVALID_TYPE: &str = "invalid_type";
pub const CODE_RANGE: &str = "range";
pub const CODE_REQUIRED: &str = "required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.to_string(),
        }
    }

    /// A value that could not be parsed as its declared type.
    pub fn invalid_type(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, CODE_INVALID_TYPE)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::ValidationError { .. } => response.json(self.errors_envelope()),
            AppError::Configuration(_) => response.json(ErrorResponse {
                error: "Internal server error".to_string(),
                message: "Internal server error".to_string(),
                code: self.error_code().to_string(),
            }),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Builds a validation error from collected issues, sorted by field so the
    /// output is stable regardless of collection order.
    pub fn from_issues(mut issues: Vec<ValidationIssue>) -> Self {
        issues.sort_by(|left, right| {
            left.field
                .cmp(&right.field)
                .then(left.code.cmp(&right.code))
        });

        let message = match issues.as_slice() {
            [issue] => issue.message.clone(),
            _ => "Request validation failed".to_string(),
        };

        AppError::ValidationError { message, issues }
    }

    pub fn validation_issues(&self) -> &[ValidationIssue] {
        match self {
            AppError::ValidationError { issues, .. } => issues,
            AppError::Configuration(_) => &[],
        }
    }

    /// The `{ "errors": { field: message } }` body. A field with several
    /// issues keeps the first one.
    pub fn errors_envelope(&self) -> ValidationErrorResponse {
        let mut envelope = ValidationErrorResponse::default();
        for issue in self.validation_issues() {
            envelope
                .errors
                .entry(issue.field.clone())
                .or_insert_with(|| issue.message.clone());
        }
        envelope
    }
}

pub type AppResult<T> = Result<T, AppError>;
