//! Proxy mode: forward questions to the external answering service.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::answer::{classify_rows, ChatAnswer};
use crate::error::ChatError;
use crate::ChatResponder;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Stateless HTTP proxy to the answering service's `POST {base}/chat`.
///
/// The question is forwarded verbatim; the upstream rowset is relayed
/// unmodified apart from the [`classify_rows`] tag attached at this
/// boundary.
#[derive(Debug, Clone)]
pub struct ProxyResponder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ProxyResponder {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ChatError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ChatError::Configuration(
                "answering-service base URL is empty".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl ChatResponder for ProxyResponder {
    async fn answer(&self, question: &str) -> Result<ChatAnswer, ChatError> {
        let url = format!("{}/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&json!({ "question": question }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Upstream(format!(
                "answering service returned {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ChatError::Upstream(format!("non-JSON answer: {e}")))?;

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let rows = body
            .get("rows")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(ChatAnswer::new(classify_rows(&rows), message, rows))
    }
}

/// Placeholder used when proxy mode is selected but no endpoint is set.
/// Every call fails with a configuration error, mirroring how the HTTP
/// layer reports the missing setting per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredResponder;

#[async_trait]
impl ChatResponder for UnconfiguredResponder {
    async fn answer(&self, _question: &str) -> Result<ChatAnswer, ChatError> {
        Err(ChatError::Configuration(
            "CHAT_API_BASE_URL is not set".to_string(),
        ))
    }
}
