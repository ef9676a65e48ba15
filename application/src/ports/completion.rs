//! Completion backend port
//!
//! Defines the interface for generating text from a prompt. Temperature and
//! the reasoning toggle are the only tunable generation parameters.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use ballot_domain::Model;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Backend returned no text content")]
    EmptyCompletion,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One stateless completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Full prompt text, including any serialized snapshot state
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Enable extended reasoning effort
    pub reasoning: bool,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 1.0,
            reasoning: false,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_reasoning(mut self, reasoning: bool) -> Self {
        self.reasoning = reasoning;
        self
    }
}

/// Gateway for text completion
///
/// Every call is stateless: the backend sees exactly the prompt it is given,
/// nothing else. Errors are surfaced here as typed failures; the solver
/// engine converts them to sentinel text at its soft-fail boundary.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Generate text for `request` using `model`
    async fn complete(
        &self,
        model: &Model,
        request: CompletionRequest,
    ) -> Result<String, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = CompletionRequest::new("hello");
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.temperature, 1.0);
        assert!(!request.reasoning);
    }

    #[test]
    fn test_request_builder() {
        let request = CompletionRequest::new("hello")
            .with_temperature(1.5)
            .with_reasoning(true);
        assert_eq!(request.temperature, 1.5);
        assert!(request.reasoning);
    }

    #[test]
    fn test_error_display() {
        let error = BackendError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(error.to_string(), "API error (status 429): quota exceeded");
    }
}
