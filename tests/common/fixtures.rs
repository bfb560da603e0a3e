//! Test fixtures and data factories

use llm_platform::core::types::{ChatMessage, ChatRequest};
use serde_json::{Value, json};

/// Factory for chat requests
pub struct ChatRequestFactory;

impl ChatRequestFactory {
    /// One user message, automatic routing, no credentials
    pub fn simple(content: &str) -> ChatRequest {
        ChatRequest::new(vec![ChatMessage::user(content)])
    }

    /// System prompt plus a short exchange
    pub fn conversation() -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system("You are terse."),
            ChatMessage::user("Hi"),
            ChatMessage::assistant("Hello."),
            ChatMessage::user("Name a colour."),
        ])
    }
}

/// Canned `generateContent` response bodies
pub struct GeminiPayloads;

impl GeminiPayloads {
    pub fn text(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 3}
        })
    }

    pub fn empty_with_finish_reason(reason: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": []},
                "finishReason": reason
            }]
        })
    }

    pub fn prompt_blocked() -> Value {
        json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })
    }

    pub fn invalid_key() -> Value {
        json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{"reason": "API_KEY_INVALID"}]
            }
        })
    }
}
