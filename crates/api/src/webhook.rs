//! Forwarding of workflow requests to an external automation webhook.
//!
//! In webhook mode the factory does not run workflows itself; it relays
//! the already-authenticated request body to a hosted automation and
//! returns whatever JSON comes back, preserving the response contract.

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ApiError, Result};

/// Client for the external workflow-automation webhook.
pub struct WebhookForwarder {
    client: reqwest::Client,
    base_url: String,
}

impl WebhookForwarder {
    /// Create a forwarder targeting the given webhook base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        info!(base_url = %base_url, "Workflow requests will be forwarded");
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST a workflow payload to `{base_url}/{operation}` on behalf of a
    /// user and return the webhook's JSON reply.
    pub async fn forward(&self, operation: &str, user_id: &str, body: Value) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, operation);
        debug!(url = %url, user_id = %user_id, "Forwarding workflow request");

        let response = self
            .client
            .post(&url)
            .header("X-User-Id", user_id)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Webhook(format!("webhook request failed: {e}")))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Webhook(format!("webhook returned non-JSON: {e}")))?;

        if !status.is_success() {
            return Err(ApiError::Webhook(format!(
                "webhook returned {status}: {payload}"
            )));
        }

        Ok(payload)
    }
}
