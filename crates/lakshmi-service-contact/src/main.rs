//! Lakshmi Trails contact-inquiry HTTP service.
//!
//! This service receives trip-inquiry submissions from the marketing site's
//! contact form, validates them, and forwards each accepted inquiry as two
//! emails through Resend: a notification to the operator and a confirmation
//! to the submitter.
//!
//! # Endpoints
//!
//! - `POST /api/contact` - Submit a contact inquiry
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! # Configuration
//!
//! - `RESEND_API_KEY` - Delivery credential; when unset, submissions are
//!   answered with a service-unavailable error and nothing is sent
//! - `RESEND_API_URL` - Delivery API base (default: Resend production)
//! - `CONTACT_FROM_ADDRESS` - Sender identity for outbound email
//! - `CONTACT_OPERATOR_ADDRESS` - Operator mailbox for notifications
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use lakshmi_lib::{customer_confirmation, operator_notification};
use lakshmi_service_shared::{
    extract_or_generate_request_id, from_lib_error, health_live, health_ready, init_logging,
    init_metrics, metrics_handler, record_email_failed, record_email_sent,
    record_inquiry_received, record_inquiry_rejected, ApiError, AppState, ContactConfig,
    InquiryForm, LoggingConfig, MetricsConfig, Validate,
};

/// Success response returned to the form client.
#[derive(Debug, Serialize)]
struct ContactResponse {
    success: bool,
    /// Human-readable confirmation for the form client to display.
    message: String,
    /// Provider message id of the operator notification.
    id: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("contact");
    init_logging(&logging_config);

    // Initialize metrics
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Log but don't fail - metrics are optional
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    // Load configuration from environment
    let config = ContactConfig::from_env();
    let port = config.port;

    info!(
        delivery_configured = config.is_delivery_configured(),
        operator = %config.operator_address,
        port,
        "starting contact service"
    );

    let state = AppState::from_config(config);
    let app = app(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router. Separate from `main` so tests can drive it in-process.
fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(contact_handler).fallback(method_not_allowed),
        )
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Answer anything other than `POST` on the contact endpoint.
async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Handle POST /api/contact requests.
///
/// The body is taken raw rather than through the `Json` extractor so that a
/// malformed body produces the endpoint's own error shape instead of axum's
/// rejection.
async fn contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = extract_or_generate_request_id(&headers);

    let form: InquiryForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "rejecting malformed inquiry body");
            record_inquiry_rejected("malformed_json");
            return ApiError::malformed_json(e.to_string()).into_response();
        }
    };

    record_inquiry_received(form.source.as_deref().unwrap_or("unknown"));

    if let Err(rejection) = form.validate() {
        warn!(request_id = %request_id, code = rejection.code, "inquiry failed validation");
        record_inquiry_rejected(rejection.code);
        return rejection.into_response();
    }

    // Fail fast before rendering anything when delivery is not configured.
    let Some(mailer) = state.mailer() else {
        error!(request_id = %request_id, "delivery credential missing, cannot forward inquiry");
        record_inquiry_rejected("service_unavailable");
        return ApiError::service_unavailable().into_response();
    };

    let inquiry = form.into_inquiry();
    let config = state.config();

    info!(
        request_id = %request_id,
        trip = %inquiry.trip_selection,
        commitment = %inquiry.commitment_level,
        "forwarding inquiry"
    );

    // Operator notification first; its failure fails the whole submission.
    let notification =
        operator_notification(&inquiry, &config.from_address, &config.operator_address);
    let receipt = match mailer.send(&notification).await {
        Ok(receipt) => {
            record_email_sent("operator");
            receipt
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "operator notification failed");
            let rejection = from_lib_error(&e);
            record_email_failed("operator", rejection.code);
            record_inquiry_rejected(rejection.code);
            return rejection.into_response();
        }
    };

    // The operator already has the inquiry at this point; a lost
    // acknowledgment is not worth failing the submission over.
    let confirmation = customer_confirmation(&inquiry, &config.from_address);
    match mailer.send(&confirmation).await {
        Ok(_) => record_email_sent("confirmation"),
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "customer confirmation failed");
            record_email_failed("confirmation", from_lib_error(&e).code);
        }
    }

    info!(request_id = %request_id, id = %receipt.id, "inquiry forwarded");

    (
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: "Your inquiry has been sent successfully!".to_string(),
            id: receipt.id,
        }),
    )
        .into_response()
}
