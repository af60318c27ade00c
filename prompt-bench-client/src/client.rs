use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error};

use prompt_bench_core::{CompletionProvider, CoreError, ProviderResponse, Result, TokenUsage};

use crate::config::ClientConfig;
use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::openrouter::{ChatCompletionRequest, ChatCompletionResponse};
use crate::provider::Provider;

/// Internal failure shape; converted to a failed `ProviderResponse` at the
/// single wrap site in `complete`, never surfaced to callers.
#[derive(Error, Debug)]
enum CallError {
    #[error("{0} client not initialized: API key missing")]
    MissingApiKey(&'static str),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("response contained no completion text")]
    EmptyCompletion,
}

/// Unified client for the supported completion providers.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl LlmClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("prompt-bench/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoreError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Which providers have a configured API key.
    pub fn available_providers(&self) -> Vec<Provider> {
        let mut providers = Vec::new();
        if self.config.gemini_api_key.is_some() {
            providers.push(Provider::Gemini);
        }
        if self.config.openrouter_api_key.is_some() {
            providers.push(Provider::OpenRouter);
        }
        providers
    }

    /// The model identifier a provider would use.
    pub fn model_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::Gemini => &self.config.gemini_model,
            Provider::OpenRouter => &self.config.openrouter_model,
        }
    }

    /// Dispatch one completion call.
    ///
    /// This is the only place errors get wrapped: any failure becomes a
    /// `ProviderResponse` with `success == false` and a populated message.
    pub async fn complete(&self, prompt: &str, provider: Provider) -> ProviderResponse {
        let outcome = match provider {
            Provider::Gemini => self.call_gemini(prompt).await,
            Provider::OpenRouter => self.call_openrouter(prompt).await,
        };

        match outcome {
            Ok(response) => response,
            Err(e) => {
                error!(provider = provider.name(), error = %e, "completion call failed");
                ProviderResponse::failure(provider.label(), e.to_string())
            }
        }
    }

    async fn call_gemini(&self, prompt: &str) -> std::result::Result<ProviderResponse, CallError> {
        let api_key = self
            .config
            .gemini_api_key
            .as_deref()
            .ok_or(CallError::MissingApiKey("Gemini"))?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.gemini_base_url.trim_end_matches('/'),
            self.config.gemini_model
        );
        let request = GenerateContentRequest::from_prompt(prompt, self.config.max_tokens);

        debug!(url = %url, "calling Gemini");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CallError::Api { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text().ok_or(CallError::EmptyCompletion)?;
        let usage = parsed
            .usage_metadata
            .map(|u| {
                TokenUsage::new(
                    u.prompt_token_count,
                    u.candidates_token_count,
                    u.total_token_count,
                )
            })
            .unwrap_or_default();

        Ok(ProviderResponse::ok(text, Provider::Gemini.label(), usage))
    }

    async fn call_openrouter(
        &self,
        prompt: &str,
    ) -> std::result::Result<ProviderResponse, CallError> {
        let api_key = self
            .config
            .openrouter_api_key
            .as_deref()
            .ok_or(CallError::MissingApiKey("OpenRouter"))?;

        let url = format!(
            "{}/chat/completions",
            self.config.openrouter_base_url.trim_end_matches('/')
        );
        let request = ChatCompletionRequest::from_prompt(
            &self.config.openrouter_model,
            prompt,
            self.config.max_tokens,
        );

        debug!(url = %url, model = %self.config.openrouter_model, "calling OpenRouter");
        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {api_key}"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CallError::Api { status, body });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let text = parsed.text().ok_or(CallError::EmptyCompletion)?;
        let usage = parsed
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens, u.total_tokens))
            .unwrap_or_default();

        Ok(ProviderResponse::ok(
            text,
            Provider::OpenRouter.label(),
            usage,
        ))
    }
}

/// One (client, provider) pair, usable wherever a `CompletionProvider` is
/// expected. Keeps the runner provider-agnostic.
#[derive(Debug, Clone)]
pub struct BoundProvider {
    client: LlmClient,
    provider: Provider,
}

impl BoundProvider {
    pub fn new(client: LlmClient, provider: Provider) -> Self {
        Self { client, provider }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> &str {
        self.client.model_for(self.provider)
    }
}

#[async_trait]
impl CompletionProvider for BoundProvider {
    async fn complete(&self, prompt: &str) -> ProviderResponse {
        self.client.complete(prompt, self.provider).await
    }

    fn label(&self) -> &str {
        self.provider.label()
    }
}
