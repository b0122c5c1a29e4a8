//! Shared infrastructure for Lakshmi Trails HTTP services.
//!
//! This crate provides the HTTP glue around `lakshmi-lib`:
//!
//! - [`ContactConfig`]: Typed configuration built once at process start
//! - [`AppState`]: Configuration plus delivery client shared across handlers
//! - [`ApiError`]: Structured JSON error responses for the public API
//! - [`InquiryForm`]: Wire form with field-by-field validation
//! - [`health`]: Liveness and readiness probe handlers
//! - [`logging`]: Structured JSON logging setup
//! - [`metrics`]: Prometheus metrics infrastructure
//! - Request correlation-ID helpers
//!
//! The services follow a thin-handler pattern: all inquiry semantics live in
//! `lakshmi-lib`, and handlers only parse, validate, call the library, and
//! format the response.
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixture payloads and pre-built states
//! for handler testing. Enable the `test-utils` feature to access it from
//! dependent crates.

#![deny(warnings)]

mod api_error;
mod config;
mod health;
pub mod logging;
pub mod metrics;
mod request;
mod request_id;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use api_error::{from_lib_error, ApiError};
pub use config::{ContactConfig, DEFAULT_FROM_ADDRESS, DEFAULT_OPERATOR_ADDRESS};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_email_failed, record_email_sent,
    record_inquiry_received, record_inquiry_rejected, MetricsConfig, MetricsError,
};
pub use request::{InquiryForm, Validate};
pub use request_id::{extract_or_generate_request_id, RequestId};
pub use state::AppState;
