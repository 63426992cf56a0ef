use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docrank::{EngineConfig, JsonTreeParser, SearchEngine, SearchHit};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Rank a directory of parsed markup documents with BM25", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CorpusArgs {
    /// Directory holding one parsed document tree per file (non-recursive)
    #[arg(long)]
    input: String,
    /// Document file extension
    #[arg(long, default_value = "json")]
    ext: String,
    /// Optional JSON engine config (bm25 constants, section tags)
    #[arg(long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the corpus and run each query against it
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Query text; repeat for several queries
        #[arg(long = "query", short = 'q', required = true)]
        queries: Vec<String>,
        /// Only print the first N results per query
        #[arg(long)]
        top: Option<usize>,
    },
    /// Build the corpus and print its TF, IDF and TF-IDF tables
    Stats {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

#[derive(Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    took_s: f64,
    total_hits: usize,
    results: &'a [SearchHit],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { corpus, queries, top } => {
            let engine = build_engine(&corpus)?;
            for query in &queries {
                let start = Instant::now();
                let hits = engine.search(query);
                let shown = top.map_or(hits.len(), |k| k.min(hits.len()));
                let report = QueryReport {
                    query,
                    took_s: start.elapsed().as_secs_f64(),
                    total_hits: hits.len(),
                    results: &hits[..shown],
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
        Commands::Stats { corpus } => {
            let engine = build_engine(&corpus)?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
    }
}

fn build_engine(args: &CorpusArgs) -> Result<SearchEngine> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path).with_context(|| format!("loading config {path}"))?,
        None => EngineConfig::default(),
    };
    let parser = JsonTreeParser::with_extension(args.ext.trim_start_matches('.'));
    let start = Instant::now();
    let engine = SearchEngine::from_dir(Path::new(&args.input), &parser, config)
        .with_context(|| format!("building corpus from {}", args.input))?;
    tracing::info!(
        input = %args.input,
        num_docs = engine.corpus().len(),
        num_terms = engine.corpus().vocabulary().len(),
        took_s = start.elapsed().as_secs_f64(),
        "corpus ready"
    );
    Ok(engine)
}
