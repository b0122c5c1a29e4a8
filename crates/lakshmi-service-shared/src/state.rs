//! Application state for the contact service.
//!
//! This module provides the shared state structure that axum handlers use to
//! access the configuration and the delivery client.

use std::sync::Arc;

use lakshmi_lib::ResendClient;

use crate::config::ContactConfig;

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally) and shared via axum's `State`
/// extractor. The delivery client is constructed once at startup and only
/// when a credential is configured, so handlers can fail fast on an
/// unconfigured instance without attempting a send.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ContactConfig,
    mailer: Option<ResendClient>,
}

impl AppState {
    /// Build application state from configuration.
    pub fn from_config(config: ContactConfig) -> Self {
        let mailer = config
            .api_key
            .as_ref()
            .map(|key| ResendClient::with_base_url(key.clone(), config.api_base_url.clone()));

        Self {
            inner: Arc::new(AppStateInner { config, mailer }),
        }
    }

    /// Access the service configuration.
    pub fn config(&self) -> &ContactConfig {
        &self.inner.config
    }

    /// Access the delivery client, if a credential is configured.
    pub fn mailer(&self) -> Option<&ResendClient> {
        self.inner.mailer.as_ref()
    }

    /// Whether email delivery is configured.
    pub fn is_configured(&self) -> bool {
        self.inner.mailer.is_some()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The credential itself must never appear in logs.
        f.debug_struct("AppState")
            .field("delivery_configured", &self.is_configured())
            .field("operator_address", &self.inner.config.operator_address)
            .finish()
    }
}
