use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed request that is not tied to a single form field
    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more form fields failed validation before calculation
    #[error("Validation error: {0}")]
    InvalidForm(#[from] ValidationErrors),

    /// Quantity reached the engine without being a positive integer
    #[error("Invalid quantity: must be greater than zero, got {0}")]
    InvalidQuantity(i64),

    /// An intermediate amount exceeded the exact decimal range
    #[error("Amount out of range while computing {0}")]
    AmountOutOfRange(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        let mut body = serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        });

        if let AppError::InvalidForm(errors) = self {
            body["error"]["fields"] = serde_json::json!(errors.errors());
        }

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidQuantity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AmountOutOfRange(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}

/// A single rejected form field
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Path of the offending field, e.g. `taxes[0].rate`
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All field errors collected from one form submission
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", joined(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Finds the error reported for a field path, if any
    pub fn field(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

fn joined(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
