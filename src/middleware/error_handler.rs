use actix_web::{error::JsonPayloadError, Error, HttpRequest};

use super::request_id::request_id;
use crate::core::AppError;

/// Turns JSON extractor failures (bad syntax, wrong content type, oversized
/// body) into the standard error envelope instead of actix's plain text
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(
        request_id = request_id(req).as_deref().unwrap_or("-"),
        path = %req.path(),
        error = %err,
        "Rejected JSON payload"
    );

    let message = match &err {
        JsonPayloadError::OverflowKnownLength { limit, .. } | JsonPayloadError::Overflow { limit } => {
            format!("Request body exceeds {} bytes", limit)
        }
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Malformed JSON body: {}", e),
        other => other.to_string(),
    };

    AppError::validation(message).into()
}
