//! Configuration for the description cache and the generation endpoint

use chrono::Duration;

/// Default namespace prefix for every key the cache writes
pub const DEFAULT_NAMESPACE: &str = "ai_desc_";

/// Default time-to-live for cached descriptions, in days
pub const DEFAULT_TTL_DAYS: i64 = 7;

/// Default OpenAI-compatible chat completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model requested from the endpoint
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Settings for [`crate::TextCache`]
#[derive(Debug, Clone)]
pub struct TextCacheConfig {
    /// Prefix prepended to every key; keeps deployments sharing a store apart
    pub namespace: String,
    /// How long an entry counts as fresh
    pub ttl: Duration,
}

impl Default for TextCacheConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            ttl: Duration::days(DEFAULT_TTL_DAYS),
        }
    }
}

impl TextCacheConfig {
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// Settings for [`crate::generate::ChatClient`]
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Full URL of the chat completions endpoint
    pub endpoint: String,
    /// Bearer credential; requests are not attempted without one
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 60,
            temperature: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_cache_config_default() {
        let config = TextCacheConfig::default();
        assert_eq!(config.namespace, "ai_desc_");
        assert_eq!(config.ttl.num_milliseconds(), 7 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_text_cache_config_custom_namespace() {
        let config = TextCacheConfig::default().with_namespace("storefront_eu_");
        assert_eq!(config.namespace, "storefront_eu_");
        assert_eq!(config.ttl, Duration::days(7));
    }

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert!(config.endpoint.ends_with("/chat/completions"));
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 60);
    }
}
