//! Gemini adapter error types

use ballot_application::ports::completion::BackendError;
use thiserror::Error;

/// Errors from the Gemini REST adapter
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key environment variable {0} is not set")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response carried no text parts")]
    EmptyResponse,
}

impl From<GeminiError> for BackendError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::MissingApiKey(var) => {
                BackendError::Connection(format!("API key environment variable {var} is not set"))
            }
            GeminiError::Http(e) => BackendError::Connection(e.to_string()),
            GeminiError::Api { status, message } => BackendError::Api { status, message },
            GeminiError::EmptyResponse => BackendError::EmptyCompletion,
        }
    }
}
