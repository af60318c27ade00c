use std::env;
use std::time::Duration;

/// Explicit client configuration passed into constructors.
///
/// API keys and defaults live here rather than in process-wide globals; a
/// missing key disables that provider (calls to it come back as failed
/// responses) instead of failing construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub gemini_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub gemini_base_url: String,
    pub openrouter_base_url: String,
    pub gemini_model: String,
    pub openrouter_model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            openrouter_api_key: None,
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            openrouter_base_url: "https://openrouter.ai/api/v1".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            openrouter_model: "openai/gpt-4o".to_string(),
            max_tokens: 1000,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Read keys and optional overrides from the environment.
    ///
    /// `GEMINI_API_KEY` and `OPENROUTER_API_KEY` enable their providers;
    /// `PROMPT_BENCH_GEMINI_MODEL` and `PROMPT_BENCH_OPENROUTER_MODEL`
    /// override the default model identifiers.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.gemini_api_key = non_empty(env::var("GEMINI_API_KEY").ok());
        config.openrouter_api_key = non_empty(env::var("OPENROUTER_API_KEY").ok());

        if let Some(model) = non_empty(env::var("PROMPT_BENCH_GEMINI_MODEL").ok()) {
            config.gemini_model = model;
        }
        if let Some(model) = non_empty(env::var("PROMPT_BENCH_OPENROUTER_MODEL").ok()) {
            config.openrouter_model = model;
        }

        config
    }

    pub fn with_gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    pub fn with_openrouter_api_key(mut self, key: impl Into<String>) -> Self {
        self.openrouter_api_key = Some(key.into());
        self
    }

    pub fn with_gemini_base_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_base_url = url.into();
        self
    }

    pub fn with_openrouter_base_url(mut self, url: impl Into<String>) -> Self {
        self.openrouter_base_url = url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
