//! Claude API client.
//!
//! Provides non-streaming access to the Anthropic Messages API.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::ClaudeConfig;

use super::error::ClaudeError;
use super::types::{ChatRequest, ChatResponse, Message};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Claude API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ClaudeClient {
    inner: Arc<ClaudeClientInner>,
}

struct ClaudeClientInner {
    client: reqwest::Client,
    api_url: String,
    model: String,
}

impl ClaudeClient {
    /// Create a new Claude client.
    ///
    /// # Errors
    ///
    /// Returns [`ClaudeError::InvalidKey`] if the API key contains
    /// characters that cannot be sent in a header, or [`ClaudeError::Http`]
    /// if the HTTP client cannot be built.
    pub fn new(config: &ClaudeConfig) -> Result<Self, ClaudeError> {
        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-api-key", api_key);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClaudeClientInner {
                client,
                api_url: config.api_url.clone(),
                model: config.model.clone(),
            }),
        })
    }

    /// Model ID used for every request.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.inner.model
    }

    /// Send a chat request and get a complete response.
    ///
    /// # Arguments
    ///
    /// * `messages` - Conversation history
    /// * `system` - Optional system prompt
    /// * `max_tokens` - Upper bound on generated tokens
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self, messages, system), fields(model = %self.inner.model))]
    pub async fn chat(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
        max_tokens: u32,
    ) -> Result<ChatResponse, ClaudeError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            max_tokens,
            messages,
            system,
            temperature: Some(0.0),
        };

        let response = self
            .inner
            .client
            .post(&self.inner.api_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(error_from_status(status, response).await)
        }
    }
}

/// Map a non-success response to a [`ClaudeError`].
async fn error_from_status(status: reqwest::StatusCode, response: reqwest::Response) -> ClaudeError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return ClaudeError::RateLimited { retry_after };
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return ClaudeError::Unauthorized;
    }

    match response.text().await {
        Ok(body) => ClaudeError::from_error_body(status, &body),
        Err(e) => ClaudeError::Http(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;

    use super::*;

    fn config(api_key: &str) -> ClaudeConfig {
        ClaudeConfig {
            api_key: SecretString::from(api_key),
            model: "claude-test".to_string(),
            api_url: "http://127.0.0.1:9/v1/messages".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_new_rejects_unsendable_key() {
        let result = ClaudeClient::new(&config("bad\nkey"));
        assert!(matches!(result, Err(ClaudeError::InvalidKey(_))));
    }

    #[test]
    fn test_new_keeps_model() {
        let client = ClaudeClient::new(&config("sk-ant-test")).expect("client");
        assert_eq!(client.model(), "claude-test");
    }

    #[tokio::test]
    async fn test_chat_unreachable_host_is_http_error() {
        let client = ClaudeClient::new(&config("sk-ant-test")).expect("client");
        let result = client
            .chat(vec![Message::user("hello")], None, 8)
            .await;
        let err = result.unwrap_err();
        assert!(matches!(err, ClaudeError::Http(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn test_claude_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<ClaudeClient>();
    }

    #[test]
    fn test_claude_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClaudeClient>();
    }
}
