//! Chat endpoint configuration.
//!
//! The API credential is never hard-coded: it is empty by default and must
//! be injected through the environment or the command line.

use elle_models::GenerationConfig;

/// Default `generateContent` endpoint.
pub const DEFAULT_CHAT_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Where and how chat requests are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEndpointConfig {
    /// Full URL of the `generateContent` endpoint.
    pub url: String,
    /// API key appended as the `key` query parameter when non-empty.
    pub api_key: String,
    /// Optional sampling parameters added to every request body.
    pub generation_config: Option<GenerationConfig>,
}

impl Default for ChatEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CHAT_URL.to_string(),
            api_key: String::new(),
            generation_config: None,
        }
    }
}

impl ChatEndpointConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable          | Default              | Description              |
    /// |-------------------|----------------------|--------------------------|
    /// | `ELLE_CHAT_URL`   | [`DEFAULT_CHAT_URL`] | `generateContent` URL    |
    /// | `GEMINI_API_KEY`  | empty                | API credential           |
    pub fn from_env() -> Self {
        let url = std::env::var("ELLE_CHAT_URL").unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string());
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();

        Self {
            url,
            api_key,
            generation_config: None,
        }
    }

    /// Override the endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Whether a credential has been configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
