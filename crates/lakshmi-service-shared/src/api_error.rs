//! Structured JSON error responses for the contact API.
//!
//! Every failure the handler can produce is represented here, so the wire
//! contract lives in one place: the body is `{"error": <message>}` with an
//! optional `"details"` member, and the HTTP status is carried out of band.
//! Stack traces and secrets never reach the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use lakshmi_lib::Error as LibError;

/// Error response for the contact API.
///
/// The `code` identifies the failure class for logs and metrics; it is not
/// serialized because the public contract exposes only `error` and `details`.
///
/// # Example
///
/// ```
/// use lakshmi_service_shared::ApiError;
///
/// let error = ApiError::invalid_email();
/// assert_eq!(error.status, axum::http::StatusCode::BAD_REQUEST);
/// assert_eq!(error.code, "invalid_email");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// HTTP status for this error.
    #[serde(skip)]
    pub status: StatusCode,

    /// Stable failure-class label for logs and metrics.
    #[serde(skip)]
    pub code: &'static str,

    /// Human-readable error message.
    pub error: String,

    /// Optional context: a per-field report for validation errors, or a
    /// technical detail string for delivery errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, error: impl Into<String>) -> Self {
        Self {
            status,
            code,
            error: error.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// 405 for anything other than `POST` on the contact endpoint.
    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            "Method not allowed",
        )
    }

    /// 400 for a request body that is not valid JSON.
    pub fn malformed_json(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "malformed_json", "Invalid JSON")
            .with_details(Value::String(detail.into()))
    }

    /// 400 for required fields that are absent or blank.
    ///
    /// `details` is the per-field report marking each required field
    /// `"missing"` or `"ok"` so the form client can highlight the right
    /// inputs.
    pub fn missing_fields(details: Value) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "missing_required_field",
            "Missing required fields",
        )
        .with_details(details)
    }

    /// 400 for an email address that fails the shape check.
    pub fn invalid_email() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "invalid_email",
            "Invalid email format",
        )
    }

    /// 500 when the delivery credential is not configured.
    pub fn service_unavailable() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "service_unavailable",
            "Email service not configured",
        )
    }

    /// 400 when the delivery provider rejected the message.
    pub fn provider_rejected(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "provider_rejected",
            "Failed to send email",
        )
        .with_details(Value::String(detail.into()))
    }

    /// 500 when the send failed at the transport level.
    pub fn delivery_failed(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "delivery_failed",
            "Email service error",
        )
        .with_details(Value::String(detail.into()))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.error)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Convert library errors to API errors.
///
/// Provider rejections are client-correctable (bad recipient and the like)
/// and map to 400; transport faults and undecodable provider responses are
/// operator-correctable and map to 500.
pub fn from_lib_error(error: &LibError) -> ApiError {
    match error {
        LibError::ProviderRejected { message } => ApiError::provider_rejected(message.clone()),
        LibError::UnexpectedResponse { message } => ApiError::delivery_failed(message.clone()),
        LibError::Transport(e) => ApiError::delivery_failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn statuses_match_error_taxonomy() {
        assert_eq!(
            ApiError::method_not_allowed().status,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::malformed_json("x").status, StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::missing_fields(json!({})).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::invalid_email().status, StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::service_unavailable().status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::provider_rejected("x").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::delivery_failed("x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn serialization_exposes_only_public_contract() {
        let error = ApiError::provider_rejected("Invalid `to` address");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["error"], "Failed to send email");
        assert_eq!(json["details"], "Invalid `to` address");
        assert!(json.get("status").is_none());
        assert!(json.get("code").is_none());
    }

    #[test]
    fn details_omitted_when_absent() {
        let json = serde_json::to_value(ApiError::invalid_email()).unwrap();
        assert_eq!(json["error"], "Invalid email format");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn missing_fields_report_round_trips() {
        let error = ApiError::missing_fields(json!({
            "fullName": "missing",
            "email": "ok",
            "commitmentLevel": "ok",
            "tripSelection": "ok",
        }));
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["details"]["fullName"], "missing");
        assert_eq!(json["details"]["email"], "ok");
    }

    #[test]
    fn lib_provider_rejection_maps_to_400() {
        let error = from_lib_error(&LibError::ProviderRejected {
            message: "Invalid `to` address".to_string(),
        });
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.code, "provider_rejected");
        assert_eq!(
            error.details,
            Some(Value::String("Invalid `to` address".to_string()))
        );
    }

    #[test]
    fn lib_unexpected_response_maps_to_500() {
        let error = from_lib_error(&LibError::UnexpectedResponse {
            message: "missing id".to_string(),
        });
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code, "delivery_failed");
    }

    #[test]
    fn display_includes_code_and_message() {
        let error = ApiError::invalid_email();
        assert_eq!(error.to_string(), "invalid_email: Invalid email format");
    }
}
