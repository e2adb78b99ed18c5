//! Ingest command - dry run of the ingestion pipeline
//!
//! Documents are chunked, embedded with the local hashing provider and stored
//! in memory. Nothing leaves the process; the command reports what a real
//! ingestion would have created.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::ChunkingArgs;
use crate::domain::ingestion::IngestionConfig;
use crate::domain::knowledge_base::ChunkStore;
use crate::infrastructure::embedding::HashingEmbeddingProvider;
use crate::infrastructure::ingestion::{IngestionPipeline, MarkdownChunker};
use crate::infrastructure::knowledge_base::InMemoryChunkStore;

/// Arguments for the ingest command
#[derive(Args, Clone, Debug)]
pub struct IngestArgs {
    /// Markdown files to ingest; each file becomes one source
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub chunking: ChunkingArgs,

    /// Chunks per embedding call (overrides config)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Embedding vector size (overrides config)
    #[arg(long)]
    pub dimensions: Option<usize>,
}

/// Run the ingest command
pub async fn run(args: IngestArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let chunker = MarkdownChunker::new(args.chunking.apply(config.chunking))?;
    let embedder = HashingEmbeddingProvider::new(
        args.dimensions
            .unwrap_or(config.ingestion.embedding_dimensions),
    )?;
    let store = Arc::new(InMemoryChunkStore::new());

    let pipeline = IngestionPipeline::new(Arc::new(chunker), Arc::new(embedder), store.clone());

    let ingestion = IngestionConfig::new()
        .with_batch_size(args.batch_size.unwrap_or(config.ingestion.batch_size));

    let source_ids = source_ids(&args.inputs)?;

    let mut documents = Vec::with_capacity(args.inputs.len());
    for (path, source_id) in args.inputs.iter().zip(source_ids) {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        documents.push((source_id, content));
    }

    let result = pipeline.ingest_batch(documents, &ingestion).await?;

    info!(
        documents = result.total_documents,
        successful = result.successful,
        failed = result.failed,
        chunks = result.total_chunks_created(),
        stored = store.count().await?,
        "Ingestion dry run finished"
    );

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.is_success() {
        anyhow::bail!("{} document(s) failed to ingest", result.failed);
    }

    Ok(())
}

/// Source ids for the input files: each path as given on the command line.
///
/// Record ids derive from the source id, so two inputs resolving to the same
/// id would overwrite each other's chunks and are rejected up front.
fn source_ids(paths: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    let mut seen = HashSet::with_capacity(paths.len());
    let mut ids = Vec::with_capacity(paths.len());

    for path in paths {
        let id = path.display().to_string();

        if !seen.insert(id.clone()) {
            anyhow::bail!("input {} is given more than once", id);
        }

        ids.push(id);
    }

    Ok(ids)
}
