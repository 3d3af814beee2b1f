use super::Variant;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One inbound invocation, in whichever shape its trigger produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "trigger", rename_all = "snake_case")]
pub enum Invocation {
    EventBody {
        #[serde(default)]
        body: Option<String>,
    },
    RequestJson {
        body: String,
    },
    EventQuery {
        #[serde(default, rename = "queryStringParameters")]
        query_string_parameters: Option<HashMap<String, String>>,
    },
}

impl Invocation {
    pub fn variant(&self) -> Variant {
        match self {
            Self::EventBody { .. } => Variant::EventBody,
            Self::RequestJson { .. } => Variant::RequestJson,
            Self::EventQuery { .. } => Variant::EventQuery,
        }
    }

    /// Extracts the prompt and applies the variant's default.
    ///
    /// `Ok(None)` only happens for variants without a default, and means the
    /// prompt is forwarded absent.
    pub fn prompt(&self) -> Result<Option<String>> {
        let raw = match self {
            Self::EventBody { body } => {
                let body = body.as_deref().filter(|b| !b.is_empty()).unwrap_or("{}");
                let fields = parse_object(body)?;
                string_field(&fields, "q")?
            }
            Self::RequestJson { body } => {
                let fields = parse_object(body)?;
                string_field(&fields, "message")?
            }
            Self::EventQuery {
                query_string_parameters,
            } => query_string_parameters
                .as_ref()
                .and_then(|params| params.get("prompt"))
                .cloned(),
        };

        Ok(self.variant().resolve_prompt(raw))
    }
}

fn parse_object(body: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(Error::validation("body must be a JSON object")),
        Err(e) => Err(Error::validation(format!("body is not valid JSON: {}", e))),
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::validation(format!("`{}` must be a string", name))),
    }
}
