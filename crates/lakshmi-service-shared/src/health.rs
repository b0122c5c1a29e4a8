//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints. Readiness requires
//! the delivery credential to be configured so an instance that can only
//! answer with service-unavailable errors is never put in rotation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Whether email delivery is configured (readiness check only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_configured: Option<bool>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            delivery_configured: None,
        }
    }

    /// Create a ready status.
    pub fn ready(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            delivery_configured: Some(true),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            delivery_configured: Some(false),
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the process is running; no external dependencies are
/// checked.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 200 OK when the delivery credential is configured, 503 otherwise.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    if !state.is_configured() {
        let status = HealthStatus::not_ready(service, version, "email delivery not configured");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version);
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_status_has_no_readiness_detail() {
        let status = HealthStatus::alive("contact", "0.1.0");
        assert_eq!(status.status, "ok");
        assert!(status.delivery_configured.is_none());
    }

    #[test]
    fn ready_status_reports_delivery() {
        let status = HealthStatus::ready("contact", "0.1.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.delivery_configured, Some(true));
    }

    #[test]
    fn not_ready_status_names_reason() {
        let status = HealthStatus::not_ready("contact", "0.1.0", "email delivery not configured");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("not configured"));
        assert_eq!(status.delivery_configured, Some(false));
    }

    #[test]
    fn serialization_skips_absent_readiness_detail() {
        let json = serde_json::to_string(&HealthStatus::alive("contact", "0.1.0")).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("delivery_configured"));
    }
}
