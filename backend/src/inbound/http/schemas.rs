//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers describe the JSON
//! the HTTP adapter actually emits and are registered under the domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request body exceeds the accepted size.
    #[schema(rename = "payload_too_large")]
    PayloadTooLarge,
    /// The database could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected failure occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message; redacted for internal errors.
    #[schema(example = "user 7 not found")]
    message: String,
    /// Request correlation identifier, echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending `field` and a validation `code` for invalid requests.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1, minimum = 1)]
    id: i64,
    /// Display name.
    #[schema(example = "Ann", max_length = 64)]
    name: String,
    /// Contact address; omitted when unset.
    #[schema(example = "ann@example.com", max_length = 254)]
    email: Option<String>,
}
