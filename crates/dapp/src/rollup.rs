//! HTTP client for the rollup coordination server.
//!
//! The server is pull-driven: each `POST /finish` reports the outcome
//! of the previous request, and the response either carries the next
//! pending [`RollupRequest`] or 202 when nothing is queued.

use prism_core::request::RollupRequest;
use prism_core::status::FinishStatus;

/// Result of one finish-post.
#[derive(Debug)]
pub enum PollOutcome {
    /// HTTP 202 -- nothing is queued; poll again.
    Pending,
    /// A pending request that must be resolved to a status.
    Request(RollupRequest),
}

/// Errors from the rollup-server exchange.
#[derive(Debug, thiserror::Error)]
pub enum RollupError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.),
    /// or the response body was not a well-formed request.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a status that is neither 202 nor success.
    #[error("rollup server error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Client for one rollup coordination server.
pub struct RollupClient {
    client: reqwest::Client,
    base_url: String,
}

impl RollupClient {
    /// Create a client for the server at `base_url` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Report the previous outcome and ask for the next pending request.
    pub async fn finish(&self, status: FinishStatus) -> Result<PollOutcome, RollupError> {
        let response = self
            .client
            .post(format!("{}/finish", self.base_url))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::ACCEPTED {
            return Ok(PollOutcome::Pending);
        }

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RollupError::Api {
                status: status_code,
                body,
            });
        }

        Ok(PollOutcome::Request(response.json::<RollupRequest>().await?))
    }
}
