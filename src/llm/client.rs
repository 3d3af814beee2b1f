use super::types::ChatCompletionRequest;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one chat-completion request and returns the upstream body as JSON.
    async fn create_chat_completion(&self, request: ChatCompletionRequest) -> Result<Value>;
}

/// Talks to `{base_url}/chat/completions` directly over reqwest.
///
/// The HTTP status is not inspected: whatever JSON the upstream sends back,
/// error bodies included, is returned as-is.
pub struct HttpLlmClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpLlmClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.credential().unwrap_or_default().to_string(),
        }
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn create_chat_completion(&self, request: ChatCompletionRequest) -> Result<Value> {
        debug!("POST {} with model {}", self.endpoint, request.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!("Upstream responded with {} ({} bytes)", status, body.len());

        serde_json::from_slice(&body).map_err(|e| Error::parse(e.to_string()))
    }
}

/// Goes through the async-openai SDK, which owns auth headers and turns
/// non-2xx responses into API errors.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.credential().unwrap_or_default())
            .with_api_base(config.base_url.trim_end_matches('/'));

        let client = Client::with_config(openai_config).with_backoff(no_retry());

        Self { client }
    }
}

// The SDK retries rate limits and server errors by default; a zero time
// budget makes every failure final.
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(&self, request: ChatCompletionRequest) -> Result<Value> {
        debug!("Creating chat completion via SDK with model {}", request.model);

        let response: Value = self.client.chat().create_byot(request).await?;

        Ok(response)
    }
}
