//! Types for the Claude Messages API.
//!
//! Only the subset needed for single-turn text completions is modelled.

use serde::{Deserialize, Serialize};

/// A message in a conversation with Claude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender ("user" or "assistant").
    pub role: String,
    /// The text content of the message.
    pub content: String,
}

impl Message {
    /// A user turn with plain text content.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A content block within a response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// Text content.
    #[serde(rename = "text")]
    Text {
        /// The text content.
        text: String,
    },
    /// Any block type this client does not use (tool use, thinking, ...).
    #[serde(other)]
    Other,
}

/// Request body for the Claude Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// System prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response from the Claude Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Unique response ID.
    pub id: String,
    /// Model that generated the response.
    pub model: String,
    /// Reason the response stopped.
    pub stop_reason: Option<StopReason>,
    /// Response content blocks.
    pub content: Vec<ContentBlock>,
    /// Token usage information.
    pub usage: Usage,
}

impl ChatResponse {
    /// Text of the first text block, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response.
    EndTurn,
    /// Max tokens reached.
    MaxTokens,
    /// Stop sequence encountered.
    StopSequence,
    /// Tool use requested.
    ToolUse,
    /// Any other reason.
    #[serde(other)]
    Other,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Number of input tokens.
    pub input_tokens: u32,
    /// Number of output tokens.
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_empty_options() {
        let request = ChatRequest {
            model: "claude-test".to_string(),
            max_tokens: 16,
            messages: vec![Message::user("taxi to airport")],
            system: None,
            temperature: None,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "taxi to airport");
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_response_first_text_skips_other_blocks() {
        let json = r#"{
            "id": "msg_01",
            "model": "claude-test",
            "stop_reason": "end_turn",
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Travel"}
            ],
            "usage": {"input_tokens": 40, "output_tokens": 2}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.first_text(), Some("Travel"));
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.usage.output_tokens, 2);
    }

    #[test]
    fn test_response_without_text() {
        let json = r#"{
            "id": "msg_02",
            "model": "claude-test",
            "stop_reason": "refusal",
            "content": [],
            "usage": {"input_tokens": 1, "output_tokens": 0}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.first_text(), None);
        assert_eq!(response.stop_reason, Some(StopReason::Other));
    }
}
