use super::Shaping;
use crate::{Error, Result, llm::reply_content};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A successful result, before it is put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Passthrough(Value),
    Text(String),
}

impl Reply {
    pub fn shape(shaping: Shaping, completion: Value) -> Result<Self> {
        match shaping {
            Shaping::Passthrough => Ok(Self::Passthrough(completion)),
            Shaping::Reply { fallback: Some(fallback) } => {
                let text = reply_content(&completion)
                    .filter(|c| !c.is_empty())
                    .unwrap_or(fallback);
                Ok(Self::Text(text.to_string()))
            }
            Shaping::Reply { fallback: None } => reply_content(&completion)
                .map(|c| Self::Text(c.to_string()))
                .ok_or_else(|| Error::parse("completion has no choices[0].message.content")),
        }
    }

    pub fn into_body(self) -> Value {
        match self {
            Self::Passthrough(value) => value,
            Self::Text(reply) => json!({ "reply": reply }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundResponse {
    pub status_code: u16,
    pub body: Value,
}

impl InboundResponse {
    pub fn ok(reply: Reply) -> Self {
        Self {
            status_code: 200,
            body: reply.into_body(),
        }
    }

    /// Every failure gets the same envelope: 500 with `{"error": message}`.
    pub fn from_error(err: &Error) -> Self {
        Self {
            status_code: 500,
            body: json!({ "error": err.to_string() }),
        }
    }
}

impl From<Result<Reply>> for InboundResponse {
    fn from(result: Result<Reply>) -> Self {
        match result {
            Ok(reply) => Self::ok(reply),
            Err(e) => Self::from_error(&e),
        }
    }
}
