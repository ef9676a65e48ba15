//! Gemini completion backend
//!
//! Adapter implementing the [`CompletionBackend`] port against the Gemini
//! `generateContent` REST API.
//!
//! [`CompletionBackend`]: ballot_application::ports::completion::CompletionBackend

pub mod adapter;
pub mod error;
pub mod types;
