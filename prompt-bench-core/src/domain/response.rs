use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32, total_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }
}

/// The typed outcome of one completion call.
///
/// Upstream failures travel as data (`success == false` with a populated
/// `error_message`), never as a raised error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub text: String,
    pub provider_label: String,
    pub token_usage: Option<TokenUsage>,
    pub success: bool,
    pub error_message: String,
}

impl ProviderResponse {
    pub fn ok(
        text: impl Into<String>,
        provider_label: impl Into<String>,
        token_usage: TokenUsage,
    ) -> Self {
        Self {
            text: text.into(),
            provider_label: provider_label.into(),
            token_usage: Some(token_usage),
            success: true,
            error_message: String::new(),
        }
    }

    pub fn failure(provider_label: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            provider_label: provider_label.into(),
            token_usage: None,
            success: false,
            error_message: error_message.into(),
        }
    }

    pub fn total_tokens(&self) -> u32 {
        self.token_usage.map(|u| u.total_tokens).unwrap_or(0)
    }
}
