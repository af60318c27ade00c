use async_trait::async_trait;

use crate::domain::ProviderResponse;

/// The external LLM call collaborator.
///
/// Implementations must convert every network/auth/quota failure into a
/// `ProviderResponse` with `success == false` rather than returning an error;
/// callers treat failed completions as normal data.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> ProviderResponse;

    /// Human-readable label used in reports ("Gemini", "OpenRouter", ...).
    fn label(&self) -> &str;
}
