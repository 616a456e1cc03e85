//! Tests for domain error construction and serialisation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::payload_too_large("huge"), ErrorCode::PayloadTooLarge)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
        .parse()
        .expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some("00000000-0000-0000-0000-000000000000"));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::not_found("missing").trace_id().is_none());
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::not_found("user 3 not found")).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "not_found", "message": "user 3 not found" })
    );

    let value = serde_json::to_value(
        Error::invalid_request("bad")
            .with_trace_id("abc")
            .with_details(json!({ "field": "name" })),
    )
    .expect("serialise");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "traceId": "abc",
            "details": { "field": "name" }
        })
    );
}

#[rstest]
fn redacted_keeps_code_and_trace_but_drops_details() {
    let error = Error::internal("connection string leaked")
        .with_trace_id("abc")
        .with_details(json!({ "secret": "x" }));
    let redacted = error.redacted();

    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), "Internal server error");
    assert_eq!(redacted.trace_id(), Some("abc"));
    assert!(redacted.details().is_none());
}
