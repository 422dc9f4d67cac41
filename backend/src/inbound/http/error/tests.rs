//! Tests for HTTP error responses.

use super::*;
use crate::domain::TraceId;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(error.status_code(), status);
}

async fn render(error: Error) -> (StatusCode, Option<String>, Error) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace-id is ASCII").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("error JSON deserialises");
    (status, header, payload)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("connection string leaked")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let (status, header, payload) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("name must not be empty")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"field": "name", "code": "empty_name"}));

    let (status, header, payload) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(payload.message(), "name must not be empty");
    assert_eq!(
        payload.details(),
        Some(&json!({"field": "name", "code": "empty_name"}))
    );
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_omit_header() {
    let (_, header, payload) = render(Error::not_found("Contact not found")).await;
    assert!(header.is_none());
    assert!(payload.trace_id().is_none());
}

#[rstest]
#[actix_web::test]
async fn errors_raised_in_scope_carry_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::not_found("Contact not found") }).await;

    let (_, header, _) = render(error).await;
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
}
