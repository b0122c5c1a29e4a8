//! Prometheus metrics infrastructure for the contact service.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for the `/metrics` endpoint
//! - Business metric helpers for inquiry intake and email delivery

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self { enabled }
    }
}

/// Initialize the Prometheus metrics recorder.
///
/// Must be called once at application startup before any metrics are
/// recorded; subsequent calls return an error.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the `/metrics` endpoint.
///
/// Returns Prometheus exposition format text.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The recorder has already been installed.
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Record an inquiry that parsed as JSON and entered validation.
///
/// Increments the `lakshmi_inquiries_received_total` counter.
///
/// # Arguments
///
/// * `source` - The form's self-reported source (e.g., "web")
pub fn record_inquiry_received(source: &str) {
    metrics::counter!(
        "lakshmi_inquiries_received_total",
        "source" => source.to_string()
    )
    .increment(1);
}

/// Record an inquiry that was rejected.
///
/// Increments the `lakshmi_inquiries_rejected_total` counter.
///
/// # Arguments
///
/// * `reason` - The failure-class code (e.g., "invalid_email",
///   "provider_rejected")
pub fn record_inquiry_rejected(reason: &str) {
    metrics::counter!(
        "lakshmi_inquiries_rejected_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Record a successfully delivered email.
///
/// Increments the `lakshmi_emails_sent_total` counter.
///
/// # Arguments
///
/// * `kind` - "operator" or "confirmation"
pub fn record_email_sent(kind: &str) {
    metrics::counter!(
        "lakshmi_emails_sent_total",
        "kind" => kind.to_string()
    )
    .increment(1);
}

/// Record a failed email send.
///
/// Increments the `lakshmi_emails_failed_total` counter.
///
/// # Arguments
///
/// * `kind` - "operator" or "confirmation"
/// * `reason` - The failure-class code (e.g., "delivery_failed")
pub fn record_email_failed(kind: &str, reason: &str) {
    metrics::counter!(
        "lakshmi_emails_failed_total",
        "kind" => kind.to_string(),
        "reason" => reason.to_string()
    )
    .increment(1);
}
