//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`; these wrappers register their wire
//! shape under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing service is not configured or not reachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Invalid contact ID")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "6f1c1e2a-3b4d-4c5e-8f90-123456789abc")]
    trace_id: Option<String>,
    /// Field-level context such as `{"field": "phone", "code": "invalid_phone"}`.
    details: Option<serde_json::Value>,
}
