//! Gemini backend adapter

use super::error::GeminiError;
use super::types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use ballot_application::ports::completion::{BackendError, CompletionBackend, CompletionRequest};
use ballot_domain::Model;
use tracing::debug;

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Completion backend implementation for the Gemini REST API
#[derive(Debug)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiBackend {
    /// Create a backend with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a backend reading the key from [`DEFAULT_API_KEY_ENV`]
    pub fn from_env() -> Result<Self, GeminiError> {
        Self::from_env_var(DEFAULT_API_KEY_ENV)
    }

    /// Create a backend reading the key from a named environment variable
    pub fn from_env_var(var: &str) -> Result<Self, GeminiError> {
        let api_key = std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(var.to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Point the adapter at a different endpoint (for testing)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate(
        &self,
        model: &Model,
        request: &CompletionRequest,
    ) -> Result<String, GeminiError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let body =
            GenerateContentRequest::new(&request.prompt, request.temperature, request.reasoning);

        debug!(
            "Gemini call: model={model} temperature={} reasoning={}",
            request.temperature, request.reasoning
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.joined_text();
        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn complete(
        &self,
        model: &Model,
        request: CompletionRequest,
    ) -> Result<String, BackendError> {
        self.generate(model, &request).await.map_err(Into::into)
    }
}
