//! Command-line interface parsing for candleblurb
//!
//! Flags and environment variables map onto [`TextCacheConfig`] and
//! [`GeneratorConfig`]; [`RunConfig`] turns them into a ready [`TextCache`].

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::cache::{FileStore, KeyValueStore, MemoryStore};
use crate::config::{
    GeneratorConfig, TextCacheConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_NAMESPACE,
};
use crate::describe::TextCache;
use crate::generate::ChatClient;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// A category argument is empty or whitespace only
    #[error("Invalid category: categories must not be empty")]
    EmptyCategory,

    /// The namespace prefix is empty
    #[error("Invalid namespace: the key prefix must not be empty")]
    EmptyNamespace,

    /// No platform cache directory and no --cache-dir given
    #[error("Could not determine a cache directory; pass --cache-dir or --memory")]
    NoCacheDir,
}

/// candleblurb - Cached AI descriptions for candle collections
#[derive(Parser, Debug)]
#[command(name = "candleblurb")]
#[command(about = "Cache-first generated descriptions for candle collections")]
#[command(version)]
pub struct Cli {
    /// Bearer credential for the generation endpoint
    #[arg(long, global = true, env = "CANDLEBLURB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat completions endpoint URL
    #[arg(long, global = true, env = "CANDLEBLURB_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model requested from the endpoint
    #[arg(long, global = true, env = "CANDLEBLURB_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Prefix for every cache key
    #[arg(long, global = true, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Directory for cached descriptions (defaults to the platform cache dir)
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "memory")]
    pub cache_dir: Option<PathBuf>,

    /// Keep the cache in memory for this run only
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the description for a category
    Describe {
        category: String,

        /// Number of designs in the collection, used by the fallback text
        #[arg(short, long, default_value_t = 0)]
        count: u32,
    },
    /// Fetch descriptions for several categories concurrently
    Prewarm {
        #[arg(required = true)]
        categories: Vec<String>,
    },
    /// Remove every cached description under the namespace
    Clear,
    /// Show whether each category is absent, fresh or stale
    Status {
        #[arg(required = true)]
        categories: Vec<String>,
    },
}

impl Command {
    fn categories(&self) -> Vec<&str> {
        match self {
            Command::Describe { category, .. } => vec![category.as_str()],
            Command::Prewarm { categories } | Command::Status { categories } => {
                categories.iter().map(String::as_str).collect()
            }
            Command::Clear => Vec::new(),
        }
    }
}

/// Where cached descriptions are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    /// Platform cache directory
    Default,
    Dir(PathBuf),
    Memory,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub cache: TextCacheConfig,
    pub generator: GeneratorConfig,
    pub store: StoreChoice,
}

/// Rejects empty or whitespace-only categories
pub fn validate_category(category: &str) -> Result<&str, CliError> {
    if category.trim().is_empty() {
        return Err(CliError::EmptyCategory);
    }
    Ok(category)
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with the cache, generator and store settings
    /// * `Err(CliError)` if a category or the namespace is empty
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        for category in cli.command.categories() {
            validate_category(category)?;
        }
        if cli.namespace.is_empty() {
            return Err(CliError::EmptyNamespace);
        }

        let store = match (&cli.cache_dir, cli.memory) {
            (_, true) => StoreChoice::Memory,
            (Some(dir), false) => StoreChoice::Dir(dir.clone()),
            (None, false) => StoreChoice::Default,
        };

        Ok(RunConfig {
            cache: TextCacheConfig::default().with_namespace(cli.namespace.clone()),
            generator: GeneratorConfig {
                endpoint: cli.endpoint.clone(),
                api_key: cli.api_key.clone(),
                model: cli.model.clone(),
                ..GeneratorConfig::default()
            },
            store,
        })
    }

    /// Builds the text cache described by this configuration
    pub fn build_cache(&self) -> Result<TextCache, CliError> {
        let store: Arc<dyn KeyValueStore> = match &self.store {
            StoreChoice::Memory => Arc::new(MemoryStore::new()),
            StoreChoice::Dir(dir) => Arc::new(FileStore::with_dir(dir.clone())),
            StoreChoice::Default => Arc::new(FileStore::new().ok_or(CliError::NoCacheDir)?),
        };
        let generator = Arc::new(ChatClient::new(self.generator.clone()));

        Ok(TextCache::new(store, generator, self.cache.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category("Luxury").unwrap(), "Luxury");
        assert!(matches!(validate_category(""), Err(CliError::EmptyCategory)));
        assert!(matches!(validate_category("   "), Err(CliError::EmptyCategory)));
    }

    #[test]
    fn test_cli_parse_describe_with_count() {
        let cli = Cli::parse_from(["candleblurb", "describe", "Gift Sets", "--count", "12"]);
        assert_eq!(
            cli.command,
            Command::Describe {
                category: "Gift Sets".to_string(),
                count: 12
            }
        );
    }

    #[test]
    fn test_cli_parse_describe_default_count() {
        let cli = Cli::parse_from(["candleblurb", "describe", "Luxury"]);
        assert_eq!(
            cli.command,
            Command::Describe {
                category: "Luxury".to_string(),
                count: 0
            }
        );
    }

    #[test]
    fn test_cli_parse_prewarm_requires_categories() {
        assert!(Cli::try_parse_from(["candleblurb", "prewarm"]).is_err());

        let cli = Cli::parse_from(["candleblurb", "prewarm", "Luxury", "Seasonal"]);
        assert_eq!(cli.command.categories(), vec!["Luxury", "Seasonal"]);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "candleblurb",
            "clear",
            "--namespace",
            "eu_",
            "--cache-dir",
            "/tmp/blurbs",
        ]);
        assert_eq!(cli.command, Command::Clear);
        assert_eq!(cli.namespace, "eu_");
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/blurbs")));
    }

    #[test]
    fn test_cli_memory_conflicts_with_cache_dir() {
        let result = Cli::try_parse_from([
            "candleblurb",
            "--memory",
            "--cache-dir",
            "/tmp/x",
            "clear",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_config_defaults() {
        let cli = Cli::parse_from(["candleblurb", "--endpoint", DEFAULT_ENDPOINT, "status", "Luxury"]);
        let config = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(config.cache.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.generator.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.store, StoreChoice::Default);
    }

    #[test]
    fn test_run_config_store_choice() {
        let cli = Cli::parse_from(["candleblurb", "--memory", "clear"]);
        assert_eq!(RunConfig::from_cli(&cli).unwrap().store, StoreChoice::Memory);

        let cli = Cli::parse_from(["candleblurb", "--cache-dir", "/tmp/b", "clear"]);
        assert_eq!(
            RunConfig::from_cli(&cli).unwrap().store,
            StoreChoice::Dir(PathBuf::from("/tmp/b"))
        );
    }

    #[test]
    fn test_run_config_rejects_blank_category() {
        let cli = Cli::parse_from(["candleblurb", "describe", "  "]);
        assert!(matches!(RunConfig::from_cli(&cli), Err(CliError::EmptyCategory)));
    }

    #[test]
    fn test_run_config_rejects_empty_namespace() {
        let cli = Cli::parse_from(["candleblurb", "--namespace", "", "clear"]);
        assert!(matches!(RunConfig::from_cli(&cli), Err(CliError::EmptyNamespace)));
    }

    #[test]
    fn test_run_config_passes_api_key_and_model() {
        let cli = Cli::parse_from([
            "candleblurb",
            "--api-key",
            "sk-test",
            "--model",
            "small-model",
            "clear",
        ]);
        let config = RunConfig::from_cli(&cli).unwrap();
        assert_eq!(config.generator.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.generator.model, "small-model");
    }

    #[tokio::test]
    async fn test_build_cache_uses_memory_store() {
        let cli = Cli::parse_from([
            "candleblurb",
            "--memory",
            "--endpoint",
            "http://127.0.0.1:1/v1/chat/completions",
            "describe",
            "Luxury",
            "-c",
            "4",
        ]);
        let config = RunConfig::from_cli(&cli).unwrap();
        let cache = config.build_cache().unwrap();

        // The endpoint is unreachable, so the fallback is returned
        let text = cache.fetch_description("Luxury", 4).await;
        assert!(text.contains("Luxury"));
        assert!(text.contains('4'));
    }
}
