pub const DEFAULT_PROMPT: &str = "Hello!";
pub const NO_RESPONSE_FALLBACK: &str = "No response";

/// The three entry points. Each keeps its own model, prompt default,
/// credential policy and response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Event whose body is a JSON string carrying `q`.
    EventBody,
    /// Request whose JSON body carries `message`.
    RequestJson,
    /// Event carrying the `prompt` query-string parameter.
    EventQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Http,
    Sdk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shaping {
    /// Upstream JSON goes back untouched.
    Passthrough,
    /// Only `choices[0].message.content` goes back, as `{"reply": ...}`.
    /// Without a fallback, a missing content is an error.
    Reply { fallback: Option<&'static str> },
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Self::EventBody => "event_body",
            Self::RequestJson => "request_json",
            Self::EventQuery => "event_query",
        }
    }

    pub fn model(self) -> &'static str {
        match self {
            Self::EventBody => "gpt-4.1-mini",
            Self::RequestJson | Self::EventQuery => "gpt-4o-mini",
        }
    }

    pub fn default_prompt(self) -> Option<&'static str> {
        match self {
            Self::EventBody | Self::EventQuery => Some(DEFAULT_PROMPT),
            Self::RequestJson => None,
        }
    }

    /// Whether a missing credential stops the invocation before any
    /// outbound call.
    pub fn requires_credential(self) -> bool {
        matches!(self, Self::EventBody)
    }

    pub fn client_kind(self) -> ClientKind {
        match self {
            Self::RequestJson => ClientKind::Sdk,
            Self::EventBody | Self::EventQuery => ClientKind::Http,
        }
    }

    pub fn shaping(self) -> Shaping {
        match self {
            Self::EventBody => Shaping::Passthrough,
            Self::RequestJson => Shaping::Reply { fallback: None },
            Self::EventQuery => Shaping::Reply {
                fallback: Some(NO_RESPONSE_FALLBACK),
            },
        }
    }

    /// Applies the prompt default. Variants with a default treat an empty
    /// prompt like a missing one; the others forward what they got.
    pub fn resolve_prompt(self, raw: Option<String>) -> Option<String> {
        match self.default_prompt() {
            Some(default) => Some(
                raw.filter(|p| !p.is_empty())
                    .unwrap_or_else(|| default.to_string()),
            ),
            None => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Variant::EventBody, "gpt-4.1-mini")]
    #[case(Variant::RequestJson, "gpt-4o-mini")]
    #[case(Variant::EventQuery, "gpt-4o-mini")]
    fn test_models(#[case] variant: Variant, #[case] model: &str) {
        assert_eq!(variant.model(), model);
    }

    #[test]
    fn test_only_event_body_requires_credential() {
        assert!(Variant::EventBody.requires_credential());
        assert!(!Variant::RequestJson.requires_credential());
        assert!(!Variant::EventQuery.requires_credential());
    }

    #[rstest]
    #[case(Variant::EventBody, None, Some("Hello!"))]
    #[case(Variant::EventBody, Some(""), Some("Hello!"))]
    #[case(Variant::EventBody, Some("2+2?"), Some("2+2?"))]
    #[case(Variant::EventQuery, None, Some("Hello!"))]
    #[case(Variant::EventQuery, Some("hi"), Some("hi"))]
    #[case(Variant::RequestJson, None, None)]
    #[case(Variant::RequestJson, Some(""), Some(""))]
    fn test_resolve_prompt(
        #[case] variant: Variant,
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            variant.resolve_prompt(raw.map(str::to_string)).as_deref(),
            expected
        );
    }

    #[test]
    fn test_shaping() {
        assert_eq!(Variant::EventBody.shaping(), Shaping::Passthrough);
        assert_eq!(
            Variant::EventQuery.shaping(),
            Shaping::Reply {
                fallback: Some("No response")
            }
        );
        assert_eq!(
            Variant::RequestJson.shaping(),
            Shaping::Reply { fallback: None }
        );
    }

    #[test]
    fn test_client_kinds() {
        assert_eq!(Variant::RequestJson.client_kind(), ClientKind::Sdk);
        assert_eq!(Variant::EventBody.client_kind(), ClientKind::Http);
        assert_eq!(Variant::EventQuery.client_kind(), ClientKind::Http);
    }
}
