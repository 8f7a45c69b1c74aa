//! OpenAI-compatible chat completions client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerateError, TextGenerator};
use crate::config::GeneratorConfig;

/// Fixed system persona sent with every request
pub const SYSTEM_PERSONA: &str =
    "You are a creative copywriter for a boutique brand of hand-poured, handcrafted candles.";

/// Builds the user prompt for a category
///
/// Only the category is interpolated; item counts never reach the model.
pub fn build_prompt(category: &str) -> String {
    format!(
        "Write a short, evocative description of our {} candle collection in at most 20 words. \
         Return only the description.",
        category
    )
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for a chat completions endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http_client: Client,
    config: GeneratorConfig,
}

impl ChatClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Creates a client with a custom HTTP client
    pub fn with_client(http_client: Client, config: GeneratorConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PERSONA,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for ChatClient {
    async fn generate(&self, category: &str) -> Result<String, GenerateError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GenerateError::MissingApiKey)?;

        let prompt = build_prompt(category);
        debug!(category, endpoint = %self.config.endpoint, "requesting description");

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&self.request_body(&prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status));
        }

        let text = response.text().await?;
        parse_completion(&text)
    }
}

/// Extracts the first completion's text from a response body
fn parse_completion(body: &str) -> Result<String, GenerateError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| GenerateError::MalformedResponse("missing choices[0].message.content".to_string()))?;

    let text = clean_completion(&content);
    if text.is_empty() {
        return Err(GenerateError::MalformedResponse("empty completion".to_string()));
    }
    Ok(text)
}

/// Trims whitespace and one pair of wrapping quotes
fn clean_completion(content: &str) -> String {
    let trimmed = content.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}
