//! Typed service configuration.
//!
//! The configuration is built once at process start and injected into
//! [`crate::AppState`]; handlers never read environment variables themselves.
//! A missing delivery credential is a valid configuration: the service starts,
//! reports not-ready, and answers submissions with the service-unavailable
//! error instead of crashing.

use lakshmi_lib::DEFAULT_API_BASE;

/// Default sender identity for outbound email.
pub const DEFAULT_FROM_ADDRESS: &str = "Lakshmi Trails <bookings@lakshmitrails.com>";

/// Default operator mailbox that receives inquiry notifications.
pub const DEFAULT_OPERATOR_ADDRESS: &str = "peter@lakshmitrails.com";

/// Configuration for the contact service.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Resend API key. `None` means delivery is not configured.
    pub api_key: Option<String>,
    /// Base URL of the delivery API.
    pub api_base_url: String,
    /// Sender identity for both outbound emails.
    pub from_address: String,
    /// Operator mailbox for inquiry notifications.
    pub operator_address: String,
    /// HTTP port to listen on.
    pub port: u16,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE.to_string(),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            operator_address: DEFAULT_OPERATOR_ADDRESS.to_string(),
            port: 8080,
        }
    }
}

impl ContactConfig {
    /// Create configuration from environment variables.
    ///
    /// - `RESEND_API_KEY`: Delivery credential (empty counts as unset)
    /// - `RESEND_API_URL`: Delivery API base (default: Resend production)
    /// - `CONTACT_FROM_ADDRESS`: Sender identity
    /// - `CONTACT_OPERATOR_ADDRESS`: Operator mailbox
    /// - `SERVICE_PORT`: HTTP port (default: 8080)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let api_base_url =
            std::env::var("RESEND_API_URL").unwrap_or(defaults.api_base_url);

        let from_address =
            std::env::var("CONTACT_FROM_ADDRESS").unwrap_or(defaults.from_address);

        let operator_address =
            std::env::var("CONTACT_OPERATOR_ADDRESS").unwrap_or(defaults.operator_address);

        let port = std::env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            api_key,
            api_base_url,
            from_address,
            operator_address,
            port,
        }
    }

    /// Set the delivery credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different delivery API (tests, self-hosted
    /// gateways).
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Whether the delivery credential is present.
    pub fn is_delivery_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credential() {
        let config = ContactConfig::default();
        assert!(config.api_key.is_none());
        assert!(!config.is_delivery_configured());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.from_address, DEFAULT_FROM_ADDRESS);
        assert_eq!(config.operator_address, DEFAULT_OPERATOR_ADDRESS);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn builder_sets_credential_and_base_url() {
        let config = ContactConfig::default()
            .with_api_key("re_test_key")
            .with_api_base_url("http://localhost:9090");

        assert!(config.is_delivery_configured());
        assert_eq!(config.api_key.as_deref(), Some("re_test_key"));
        assert_eq!(config.api_base_url, "http://localhost:9090");
    }
}
