use super::{ClientKind, InboundResponse, Invocation, Reply};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, HttpLlmClient, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

/// Forwards one prompt per invocation to the upstream chat-completion API.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct Forwarder {
    has_credential: bool,
    http_client: Arc<dyn LlmClient>,
    sdk_client: Arc<dyn LlmClient>,
}

impl Forwarder {
    pub fn new(config: &LlmConfig) -> Self {
        Self::with_clients(
            config,
            Arc::new(HttpLlmClient::new(config)),
            Arc::new(OpenAiClient::new(config)),
        )
    }

    pub fn with_clients(
        config: &LlmConfig,
        http_client: Arc<dyn LlmClient>,
        sdk_client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            has_credential: config.credential().is_some(),
            http_client,
            sdk_client,
        }
    }

    fn client(&self, kind: ClientKind) -> &dyn LlmClient {
        match kind {
            ClientKind::Http => self.http_client.as_ref(),
            ClientKind::Sdk => self.sdk_client.as_ref(),
        }
    }

    pub async fn forward(&self, invocation: &Invocation) -> Result<Reply> {
        let variant = invocation.variant();
        let prompt = invocation.prompt()?;

        if variant.requires_credential() && !self.has_credential {
            return Err(Error::CredentialMissing);
        }

        debug!(
            "Forwarding prompt ({} chars) to {}",
            prompt.as_deref().map_or(0, str::len),
            variant.model()
        );

        let request = ChatCompletionRequest::single_prompt(variant.model(), prompt);
        let completion = self
            .client(variant.client_kind())
            .create_chat_completion(request)
            .await?;

        Reply::shape(variant.shaping(), completion)
    }

    /// Runs one invocation to completion. Failures come back as the 500
    /// envelope, never as an `Err`.
    pub async fn handle(&self, invocation: Invocation) -> InboundResponse {
        let variant = invocation.variant();
        let span = info_span!(
            "invocation",
            id = %Uuid::new_v4(),
            variant = variant.name()
        );

        async {
            match self.forward(&invocation).await {
                Ok(reply) => {
                    info!("Invocation succeeded");
                    InboundResponse::ok(reply)
                }
                Err(e) => {
                    error!(kind = ?e.kind(), "Invocation failed: {}", e);
                    InboundResponse::from_error(&e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
