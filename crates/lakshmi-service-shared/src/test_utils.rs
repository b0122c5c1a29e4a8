//! Test utilities for handler testing.
//!
//! Provides pre-built states and a known-good inquiry payload so service
//! tests do not repeat fixture setup.

use serde_json::{json, Value};

use crate::{AppState, ContactConfig};

/// State with a dummy credential pointed at `api_base_url` (normally an
/// `httpmock` server).
pub fn test_state(api_base_url: &str) -> AppState {
    AppState::from_config(
        ContactConfig::default()
            .with_api_key("re_test_key")
            .with_api_base_url(api_base_url),
    )
}

/// State without a delivery credential, for service-unavailable paths.
pub fn unconfigured_state() -> AppState {
    AppState::from_config(ContactConfig::default())
}

/// A complete, valid inquiry payload as the site's form would post it.
pub fn sample_inquiry_json() -> Value {
    json!({
        "full-name": "Asha Rao",
        "email": "asha@example.com",
        "commitment-level": "interested",
        "trip-selection": "mysore-mystique",
        "timestamp": "2025-01-01T00:00:00Z",
        "source": "web",
        "page_url": "https://site/tours/mysore",
    })
}
