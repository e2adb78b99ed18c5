//! Chunk command - splits one markdown document and prints the chunks

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use super::ChunkingArgs;
use crate::domain::ingestion::Chunk;
use crate::infrastructure::ingestion::MarkdownChunker;

/// How chunks are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of chunks
    #[default]
    Json,
    /// One line per chunk with its type, size and header path
    Summary,
}

/// Arguments for the chunk command
#[derive(Args, Clone, Debug)]
pub struct ChunkArgs {
    /// Markdown file to chunk (reads stdin when omitted)
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Run the chunk command
pub async fn run(args: ChunkArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let chunking = args.chunking.apply(config.chunking);
    let chunker = MarkdownChunker::new(chunking)?;

    let content = super::read_input(args.input.as_ref()).await?;
    let chunks = chunker.chunk_markdown(&content);

    info!(
        input = ?args.input,
        chunks = chunks.len(),
        max_chunk_size = chunking.max_chunk_size,
        "Chunked document"
    );

    println!("{}", render(&chunks, args.format)?);

    Ok(())
}

fn render(chunks: &[Chunk], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(chunks)?),
        OutputFormat::Summary => Ok(summarize(chunks)),
    }
}

fn summarize(chunks: &[Chunk]) -> String {
    let mut lines = Vec::with_capacity(chunks.len() + 1);
    lines.push(format!("{} chunk(s)", chunks.len()));

    for (index, chunk) in chunks.iter().enumerate() {
        let path = if chunk.metadata.headers.is_empty() {
            "-".to_string()
        } else {
            chunk.metadata.headers.join(" > ")
        };

        lines.push(format!(
            "[{index}] {:<9} {:>5} chars  {path}",
            chunk.chunk_type().as_str(),
            chunk.char_count()
        ));
    }

    lines.join("\n")
}
