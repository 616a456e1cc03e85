//! Request validation for the HTTP adapter.
//!
//! Extractor failures and field validation errors surface as
//! `invalid_request` with `details.field` and `details.code`, so clients see
//! one error schema regardless of where the request was rejected. Oversized
//! bodies are the exception and map to `payload_too_large`.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, UserValidationError};

/// Map a field validation failure to the client-facing error.
pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": err.code(),
    }))
}

fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    let body_error = |error: Error, code: &str| {
        error.with_details(json!({ "field": "body", "code": code }))
    };
    let mapped = match &err {
        JsonPayloadError::Overflow { limit }
        | JsonPayloadError::OverflowKnownLength { limit, .. } => body_error(
            Error::payload_too_large(format!("request body exceeds {limit} bytes")),
            "payload_too_large",
        ),
        JsonPayloadError::ContentType => body_error(
            Error::invalid_request("request body must be application/json"),
            "unsupported_content_type",
        ),
        JsonPayloadError::Deserialize(inner) => body_error(
            Error::invalid_request(format!("invalid JSON body: {inner}")),
            "invalid_json",
        ),
        other => body_error(
            Error::invalid_request(format!("unreadable request body: {other}")),
            "invalid_body",
        ),
    };
    mapped.into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameter");
    Error::invalid_request("user id must be a positive integer")
        .with_details(json!({ "field": "id", "code": "invalid_id" }))
        .into()
}

/// JSON extractor configuration reporting failures as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_payload_error)
}

/// Path extractor configuration reporting failures as domain errors.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}
