//! CLI module for the knowledge-base chunker
//!
//! Subcommands:
//! - `chunk`: split a markdown document and print the chunks
//! - `ingest`: dry-run the ingestion pipeline into an in-memory store

pub mod chunk;
pub mod ingest;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use config::ConfigError;
use tokio::io::AsyncReadExt;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::ingestion::ChunkingConfig;
use crate::infrastructure::logging;

/// Markdown-aware chunker for knowledge-base ingestion
#[derive(Parser)]
#[command(name = "kb-chunker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chunk a markdown document and print the result
    Chunk(chunk::ChunkArgs),

    /// Chunk, embed and store documents in memory, then report counts
    Ingest(ingest::IngestArgs),
}

/// Chunk size overrides shared by the subcommands
#[derive(Args, Clone, Debug, Default)]
pub struct ChunkingArgs {
    /// Maximum chunk size in characters (overrides config)
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Minimum size of a trailing chunk in characters (overrides config)
    #[arg(long)]
    pub min_chunk_size: Option<usize>,

    /// Characters carried over from the previous chunk (overrides config)
    #[arg(long)]
    pub overlap_size: Option<usize>,
}

impl ChunkingArgs {
    /// Apply the flags on top of the loaded configuration
    pub fn apply(&self, mut config: ChunkingConfig) -> ChunkingConfig {
        if let Some(max) = self.max_chunk_size {
            config.max_chunk_size = max;
        }
        if let Some(min) = self.min_chunk_size {
            config = config.with_min_chunk_size(min);
        }
        if let Some(overlap) = self.overlap_size {
            config = config.with_overlap_size(overlap);
        }
        config
    }
}

/// Load `.env`, the layered configuration and the global subscriber
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = config_or_default(AppConfig::load());
    logging::init_logging(&config.logging);

    if let Some(error) = load_error {
        warn!(error = %error, "Failed to load configuration, using defaults");
    }

    config
}

/// Fall back to the default configuration, keeping the load error so it can
/// be reported once logging is up.
fn config_or_default(
    loaded: Result<AppConfig, ConfigError>,
) -> (AppConfig, Option<ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(error) => (AppConfig::default(), Some(error)),
    }
}

/// Read a whole document from a file, or stdin when no path is given
async fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut content = String::new();
            tokio::io::stdin().read_to_string(&mut content).await?;
            Ok(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chunk_command() {
        let cli = Cli::try_parse_from([
            "kb-chunker",
            "chunk",
            "guide.md",
            "--max-chunk-size",
            "500",
            "--overlap-size",
            "0",
        ])
        .unwrap();

        match cli.command {
            Command::Chunk(args) => {
                assert_eq!(args.input, Some(PathBuf::from("guide.md")));
                assert_eq!(args.chunking.max_chunk_size, Some(500));
                assert_eq!(args.chunking.overlap_size, Some(0));
                assert_eq!(args.chunking.min_chunk_size, None);
            }
            Command::Ingest(_) => panic!("expected chunk command"),
        }
    }

    #[test]
    fn test_parse_ingest_requires_input() {
        assert!(Cli::try_parse_from(["kb-chunker", "ingest"]).is_err());
        assert!(Cli::try_parse_from(["kb-chunker", "ingest", "a.md", "b.md"]).is_ok());
    }

    #[test]
    fn test_chunking_args_override_config() {
        let args = ChunkingArgs {
            max_chunk_size: Some(400),
            min_chunk_size: None,
            overlap_size: Some(20),
        };

        let config = args.apply(ChunkingConfig::default());

        assert_eq!(config.max_chunk_size, 400);
        assert_eq!(config.min_chunk_size, 100);
        assert_eq!(config.overlap_size, 20);
    }

    #[test]
    fn test_empty_chunking_args_keep_config() {
        let base = ChunkingConfig::new(300, 30);
        assert_eq!(ChunkingArgs::default().apply(base), base);
    }

    #[test]
    fn test_config_load_error_falls_back_to_defaults() {
        let (config, error) =
            config_or_default(Err(ConfigError::Message("invalid digit".to_string())));

        assert_eq!(config.chunking, ChunkingConfig::default());
        assert!(error.unwrap().to_string().contains("invalid digit"));
    }

    #[test]
    fn test_loaded_config_is_kept() {
        let mut loaded = AppConfig::default();
        loaded.chunking = ChunkingConfig::new(400, 40);

        let (config, error) = config_or_default(Ok(loaded));

        assert_eq!(config.chunking.max_chunk_size, 400);
        assert!(error.is_none());
    }
}
