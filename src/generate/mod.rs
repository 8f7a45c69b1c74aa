//! Text generation for category descriptions
//!
//! The cache talks to the generator through the [`TextGenerator`] trait so
//! tests can substitute a counting fake for the HTTP client.

mod chat;

pub use chat::{build_prompt, ChatClient, SYSTEM_PERSONA};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when generating a description
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No API key is configured, so no request was made
    #[error("No API key configured for the generation endpoint")]
    MissingApiKey,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Generation endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not contain a usable completion
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Produces a short description for a product category
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, category: &str) -> Result<String, GenerateError>;
}
