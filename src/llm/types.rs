use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    /// Left out of the payload entirely when absent, so the upstream sees a
    /// message without content and rejects it on its own terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatMessage {
    pub fn user(content: Option<String>) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

impl ChatCompletionRequest {
    /// A request carrying a single user message.
    pub fn single_prompt(model: impl Into<String>, prompt: Option<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// Reads `choices[0].message.content` from an upstream completion body.
pub fn reply_content(completion: &Value) -> Option<&str> {
    completion
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
}
