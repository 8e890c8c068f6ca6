//! Integration tests for BizBoard.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bizboard-integration-tests
//! ```
//!
//! No network access or API key is needed: Claude calls go to a local
//! [`MockClaude`] server.
//!
//! # Test Categories
//!
//! - `ledger_store` - Ledger invariants, aggregates, and notifications
//! - `categorize` - Category suggestions over the real HTTP client
//! - `screens` - Forms, screens, and screen feeds working together

use std::time::Duration;

use bizboard_app::ClaudeConfig;
use bizboard_core::{LedgerStore, Timestamp};
use chrono::{DateTime, NaiveDate};
use secrecy::SecretString;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Parse an RFC 3339 timestamp, panicking on bad test input.
///
/// # Panics
///
/// Panics if `s` is not RFC 3339.
#[must_use]
pub fn at(s: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(s).unwrap_or_else(|e| panic!("bad test timestamp {s:?}: {e}"))
}

/// Build a calendar day, panicking on bad test input.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(|| panic!("bad test date {y}-{m}-{d}"))
}

/// The sample session as of 2024-06-10 09:00 in UTC-4.
///
/// # Panics
///
/// Panics if the sample data is invalid.
#[must_use]
pub fn sample_store() -> LedgerStore {
    LedgerStore::with_sample_data(at("2024-06-10T09:00:00-04:00"))
        .unwrap_or_else(|e| panic!("sample data rejected: {e}"))
}

/// Claude configuration pointing at `api_url`.
#[must_use]
pub fn claude_config(api_url: &str) -> ClaudeConfig {
    ClaudeConfig {
        api_key: SecretString::from("sk-ant-REDACTED"),
        model: "claude-sonnet-4-20250514".to_string(),
        api_url: api_url.to_string(),
        timeout: Duration::from_secs(5),
    }
}

/// Local stand-in for the Messages API.
///
/// Only a `POST /v1/messages` carrying an API key and the pinned
/// `anthropic-version` header matches. The server verifies on drop that
/// exactly one such request arrived.
pub struct MockClaude {
    /// URL to put in [`ClaudeConfig::api_url`].
    pub url: String,
    server: MockServer,
}

impl MockClaude {
    /// Answer the next request with `status` and a JSON `body`.
    pub async fn respond_once(status: u16, body: String) -> Self {
        Self::respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .await
    }

    /// Answer the next request with `response`, e.g. one with a delay.
    pub async fn respond_with(response: ResponseTemplate) -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(header_exists("x-api-key"))
            .respond_with(response)
            .expect(1)
            .mount(&server)
            .await;

        Self {
            url: format!("{}/v1/messages", server.uri()),
            server,
        }
    }

    /// Requests received so far.
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// A successful Messages API reply whose only text block is `text`.
    #[must_use]
    pub fn reply(text: &str) -> String {
        serde_json::json!({
            "id": "msg_mock",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "content": [{ "type": "text", "text": text }],
            "usage": { "input_tokens": 42, "output_tokens": 3 }
        })
        .to_string()
    }
}
