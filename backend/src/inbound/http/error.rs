//! HTTP adapter mapping for domain errors.
//!
//! The domain error stays HTTP-agnostic; this module decides the status code
//! for each [`ErrorCode`] and renders the JSON payload, hiding the message of
//! internal failures from clients.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failures the client cannot fix are logged with their unredacted message.
fn log_server_failure(err: &Error) {
    if matches!(
        err.code(),
        ErrorCode::InternalError | ErrorCode::ServiceUnavailable
    ) {
        error!(
            code = ?err.code(),
            trace_id = ?err.trace_id(),
            message = %err.message(),
            "request failed"
        );
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_server_failure(self);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        if matches!(self.code(), ErrorCode::InternalError) {
            builder.json(self.redacted())
        } else {
            builder.json(self)
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}
