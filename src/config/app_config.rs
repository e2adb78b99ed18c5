use serde::Deserialize;

use crate::domain::ingestion::ChunkingConfig;
use crate::infrastructure::embedding::DEFAULT_HASHING_DIMENSIONS;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub ingestion: IngestionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Settings for the ingestion dry run
#[derive(Debug, Clone, Deserialize)]
pub struct IngestionSettings {
    /// Chunks per embedding call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Vector size of the local hashing embedder
    #[serde(default = "default_embedding_dimensions")]
    pub embedding_dimensions: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_batch_size() -> usize {
    100
}

fn default_embedding_dimensions() -> usize {
    DEFAULT_HASHING_DIMENSIONS
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for IngestionSettings {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            embedding_dimensions: default_embedding_dimensions(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
