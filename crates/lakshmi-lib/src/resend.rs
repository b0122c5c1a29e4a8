//! Thin client for the Resend transactional-email API.
//!
//! Only the send endpoint is wrapped; the handler needs nothing else. The API
//! base URL is overridable so tests can point the client at a local mock
//! server. No retry or backoff is attempted here: a transient provider
//! failure surfaces to the caller, and resubmitting the form is the client's
//! recovery path.

use serde::Deserialize;

use crate::email::EmailMessage;
use crate::error::{Error, Result};

/// Default base URL of the Resend API.
pub const DEFAULT_API_BASE: &str = "https://api.resend.com";

/// Receipt returned by the provider for an accepted message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendReceipt {
    /// Provider-assigned message id.
    pub id: String,
}

/// Error body shape returned by the Resend API.
#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
    name: Option<String>,
}

/// Client for the Resend send API.
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ResendClient {
    /// Create a client against the production Resend API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE)
    }

    /// Create a client against a specific API base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send one rendered message.
    ///
    /// A non-success HTTP status from the provider becomes
    /// [`Error::ProviderRejected`] with the provider's message; connection and
    /// timeout faults become [`Error::Transport`]. Network timeouts are left
    /// to the HTTP client's defaults.
    pub async fn send(&self, message: &EmailMessage) -> Result<SendReceipt> {
        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<SendReceipt>()
                .await
                .map_err(|e| Error::UnexpectedResponse {
                    message: e.to_string(),
                })
        } else {
            let message = match response.json::<ProviderError>().await {
                Ok(body) => body
                    .message
                    .or(body.name)
                    .unwrap_or_else(|| format!("HTTP {status}")),
                Err(_) => format!("HTTP {status}"),
            };
            Err(Error::ProviderRejected { message })
        }
    }
}
